//! Canonical reimbursement rule table.
//!
//! Every threshold, rate, payer list and terminology code the calculators
//! rely on is defined once here and handed to them by reference.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub mod defaults;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CptTier {
    pub cpt_code: &'static str,
    pub base_reimbursement: Decimal,
    pub warning: &'static str,
    pub flagged_payers: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodingRule {
    pub snomed_keyword: &'static str,
    pub snomed_match: &'static str,
    pub snomed_default: &'static str,
    pub loinc_keyword: &'static str,
    pub loinc_match: &'static str,
    pub loinc_default: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    /// Panels with strictly more genes than this use `large_panel`.
    pub gene_threshold: u16,
    pub small_panel: CptTier,
    pub large_panel: CptTier,
    pub coding: CodingRule,
}

const RESTRICTING_PAYERS: &[&str] = &[
    "UnitedHealthcare",
    "Aetna",
    "Cigna",
    "Blue Cross Blue Shield",
    "Humana",
];

impl RuleTable {
    pub fn builtin() -> Self {
        Self {
            gene_threshold: 50,
            small_panel: CptTier {
                cpt_code: "81450",
                base_reimbursement: dec!(759.53),
                warning: "Generally covered for hereditary or myeloid panels ≤50 genes.",
                flagged_payers: &[],
            },
            large_panel: CptTier {
                cpt_code: "81455",
                base_reimbursement: dec!(2919.60),
                warning: "Many private payers restrict reimbursement for panels >50 genes. \
                          Often reimbursed at 81450 rate or denied unless clinical justification is strong.",
                flagged_payers: RESTRICTING_PAYERS,
            },
            coding: CodingRule {
                snomed_keyword: "myeloid",
                snomed_match: "123456",
                snomed_default: "654321",
                loinc_keyword: "fusion",
                loinc_match: "98765-4",
                loinc_default: "54321-0",
            },
        }
    }

    pub fn tier_for(&self, gene_count: u16) -> &CptTier {
        if gene_count > self.gene_threshold {
            &self.large_panel
        } else {
            &self.small_panel
        }
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::builtin()
    }
}
