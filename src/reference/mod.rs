mod loader;

use anyhow::Result;

use crate::schema::v1::TestType;

pub use loader::{load_checklist_v1, load_zcodes_v1};

pub const ZCODE_INTRO: &str = "Z-codes are unique identifiers assigned by MolDx to molecular \
diagnostic tests. They are required by CMS and some private payers for reimbursement of LDTs \
and NGS panels.";

pub const ZCODE_REGISTRATION: &str = "Z-codes must be registered through the DEX™ Diagnostics \
Exchange and associated with a valid CPT code. Failure to submit a Z-code may result in \
automatic claim denial.";

pub const DEX_REGISTRY_URL: &str = "https://app.dexzcodes.com/public/search";

pub const CODING_GUIDANCE: &str = "Use SNOMED for clinical condition encoding and LOINC for lab \
test identity. These help align with EHRs and increase billing success.";

pub const CHECKLIST_FOOTER: &str =
    "You may copy/paste this list or save it for your billing department.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZCodeExample {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub id: String,
    pub text: String,
}

pub fn render_zcodes() -> Result<String> {
    let examples = load_zcodes_v1()?;
    let mut out = String::new();
    out.push_str("Z-Code Education\n");
    out.push_str(ZCODE_INTRO);
    out.push_str("\nExamples:\n");
    for ex in &examples {
        out.push_str(&format!("- {}: {}\n", ex.code, ex.description));
    }
    out.push_str(ZCODE_REGISTRATION);
    out.push_str(&format!("\nFor more info: DEX Z-code registry {}\n", DEX_REGISTRY_URL));
    Ok(out)
}

pub fn render_checklist() -> Result<String> {
    let items = load_checklist_v1()?;
    let mut out = String::new();
    out.push_str("Billing Documentation Checklist\n");
    out.push_str("Review this checklist before submitting claims:\n");
    for item in &items {
        out.push_str(&format!("✅ {}\n", item.text));
    }
    out.push_str(CHECKLIST_FOOTER);
    out.push('\n');
    Ok(out)
}

pub fn render_coding() -> String {
    format!("SNOMED/LOINC Mapping\n{}\n", CODING_GUIDANCE)
}

pub fn render_test_types() -> String {
    let mut out = String::from("Test types:\n");
    for t in TestType::ALL {
        out.push_str(&format!("- {}\n", t.label()));
    }
    out
}
