use std::fs;

use ngs_reimburse::ctx::{Ctx, TestConfiguration};
use ngs_reimburse::io::summary::format_summary;
use ngs_reimburse::pipeline::Pipeline;
use ngs_reimburse::scores::RoiInputs;
use rust_decimal_macros::dec;
use tempfile::TempDir;

fn make_ctx(config: TestConfiguration) -> Ctx {
    Ctx::new(
        config,
        RoiInputs::default(),
        std::path::PathBuf::from("out"),
        "0.0.0-test",
    )
}

#[test]
fn summary_default_configuration() {
    let mut ctx = make_ctx(TestConfiguration::default());
    Pipeline::full().run(&mut ctx).unwrap();

    let s = format_summary(&ctx).unwrap();
    assert!(s.contains("ngs-reimburse v"));
    assert!(s.contains("Test: Solid Tumor – DNA Panel, 50 genes, scenario=Panel-Only Testing"));
    assert!(s.contains("Recommended CPT Code: 81450"));
    assert!(s.contains("Medicare Reimbursement Estimate: $759.53"));
    assert!(s.contains("Flagged Payers: none"));
    assert!(s.contains("revenue $1,519.06, profit $791.06"));
    assert!(s.contains("revenue $7,019.06, profit $6,291.06"));
    assert!(s.contains("Panels needed to break even if backbone is NOT billed: 1.78"));
    assert!(!s.contains("Upload:"));
}

#[test]
fn summary_large_panel_lists_payers() {
    let config = TestConfiguration {
        gene_count: 300,
        lab_cost: dec!(2919.60),
        ..TestConfiguration::default()
    };
    let mut ctx = make_ctx(config);
    Pipeline::full().run(&mut ctx).unwrap();

    let s = format_summary(&ctx).unwrap();
    assert!(s.contains("Recommended CPT Code: 81455"));
    assert!(s.contains("Medicare Reimbursement Estimate: $2,919.60"));
    assert!(s.contains("Flagged Payers: UnitedHealthcare, Aetna, Cigna, Blue Cross Blue Shield, Humana"));
    assert!(s.contains("break even if backbone is NOT billed: inf"));
}

#[test]
fn summary_includes_upload_views() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("tests.csv");
    fs::write(
        &path,
        "test_name,cpt_code,denial_risk,estimated_reimbursement\n\
Myeloid Fusion,81450,Low,100\n\
Solid Tumor,81455,High,500\n\
Myeloid Fusion,81450,Low,300\n",
    )
    .unwrap();

    let mut ctx = make_ctx(TestConfiguration::default());
    ctx.upload_path = Some(path);
    Pipeline::full().run(&mut ctx).unwrap();

    let s = format_summary(&ctx).unwrap();
    assert!(s.contains("Upload: 3 rows"));
    assert!(s.contains("Denial Risk: Low n=2 avg $200; High n=1 avg $500"));
    assert!(s.contains("CPT drill-down 81450: 2 rows"));
    assert!(!s.contains("Payer filter"));
    assert!(s.contains("- Myeloid Fusion: SNOMED 123456, LOINC 98765-4"));
    assert!(s.contains("- Solid Tumor: SNOMED 654321, LOINC 54321-0"));
    assert!(ctx.warnings.is_empty());
}

#[test]
fn malformed_upload_degrades_to_warning() {
    let tmp = TempDir::new().unwrap();
    let mut ctx = make_ctx(TestConfiguration::default());
    ctx.upload_path = Some(tmp.path().join("missing.csv"));
    Pipeline::full().run(&mut ctx).unwrap();

    assert!(ctx.table.is_none());
    assert!(ctx.risk_summary.is_none());
    assert_eq!(ctx.warnings.len(), 1);
    assert!(ctx.warnings[0].contains("missing.csv"));
    assert!(ctx.roi.is_some());
}

#[test]
fn rejected_records_keep_other_views() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("tests.csv");
    fs::write(
        &path,
        "test_name,cpt_code,denial_risk,estimated_reimbursement\nA,81450,Unknown,1\n",
    )
    .unwrap();

    let mut ctx = make_ctx(TestConfiguration::default());
    ctx.upload_path = Some(path);
    Pipeline::full().run(&mut ctx).unwrap();

    assert!(ctx.risk_summary.is_none());
    assert!(ctx.cpt_drilldown.is_some());
    assert!(ctx.code_mappings.is_some());
    assert!(ctx.warnings[0].contains("denial risk view skipped"));
}
