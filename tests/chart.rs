use std::fs;

use ngs_reimburse::ctx::{Ctx, TestConfiguration};
use ngs_reimburse::io::chart_svg::render_svg;
use ngs_reimburse::pipeline::Pipeline;
use ngs_reimburse::scores::denial::{aggregate, build_chart};
use ngs_reimburse::scores::{DenialRisk, RoiInputs, TestRecord};
use rust_decimal_macros::dec;
use tempfile::TempDir;

fn record(risk: DenialRisk) -> TestRecord {
    TestRecord {
        test_name: "Panel".into(),
        cpt_code: "81450".into(),
        payer: None,
        denial_risk: risk,
        estimated_reimbursement: Some(dec!(1200)),
    }
}

#[test]
fn svg_contains_bars_and_labels() {
    let records = vec![
        record(DenialRisk::Low),
        record(DenialRisk::Medium),
        record(DenialRisk::High),
        record(DenialRisk::High),
    ];
    let svg = render_svg(&build_chart(&aggregate(&records))).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains("Denial Risk Levels"));
    assert!(svg.contains("Risk Category"));
    assert!(svg.contains("Number of Tests"));
    assert!(svg.contains(r#"fill="green""#));
    assert!(svg.contains(r#"fill="orange""#));
    assert_eq!(svg.matches(r#"fill="red""#).count(), 1);
    assert!(svg.contains("Avg: $1,200"));
}

#[test]
fn svg_is_deterministic() {
    let records = vec![record(DenialRisk::Low), record(DenialRisk::High)];
    let chart = build_chart(&aggregate(&records));
    assert_eq!(render_svg(&chart).unwrap(), render_svg(&chart).unwrap());
}

#[test]
fn chart_without_summary_is_a_warning() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("out");
    let mut ctx = Ctx::new(
        TestConfiguration::default(),
        RoiInputs::default(),
        out.clone(),
        "0.0.0-test",
    );
    ctx.write_chart = true;
    Pipeline::full().run(&mut ctx).unwrap();

    assert!(!out.join("denial_risk_chart.svg").exists());
    assert_eq!(ctx.warnings.len(), 1);
}

#[test]
fn pipeline_writes_chart() {
    let tmp = TempDir::new().unwrap();
    let upload = tmp.path().join("tests.csv");
    fs::write(&upload, "denial_risk,estimated_reimbursement\nLow,10\nHigh,20\n").unwrap();
    let out = tmp.path().join("out");
    let mut ctx = Ctx::new(
        TestConfiguration::default(),
        RoiInputs::default(),
        out.clone(),
        "0.0.0-test",
    );
    ctx.upload_path = Some(upload);
    ctx.write_chart = true;
    Pipeline::full().run(&mut ctx).unwrap();

    let svg = fs::read_to_string(out.join("denial_risk_chart.svg")).unwrap();
    assert!(svg.contains("Avg: $10"));
    assert!(svg.contains("Avg: $20"));
}
