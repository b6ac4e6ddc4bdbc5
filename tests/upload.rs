use std::fs;
use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;
use ngs_reimburse::io::upload::{read_table, read_table_from};
use ngs_reimburse::scores::DenialRisk;
use ngs_reimburse::scores::denial::aggregate;
use rust_decimal_macros::dec;
use tempfile::TempDir;

const SAMPLE: &str = "test_name,cpt_code,payer,denial_risk,estimated_reimbursement\n\
Myeloid Panel,81450,Aetna,Low,700\n\
Fusion Panel,81455,Cigna,High,2900.5\n\
Myeloid Panel,81450,,Low,800\n";

#[test]
fn reads_headers_and_rows() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("tests.csv");
    fs::write(&path, SAMPLE).unwrap();

    let table = read_table(&path).unwrap();
    assert_eq!(
        table.headers(),
        &["test_name", "cpt_code", "payer", "denial_risk", "estimated_reimbursement"]
    );
    assert_eq!(table.len(), 3);
    assert_eq!(table.rows()[1][0], "Fusion Panel");
}

#[test]
fn reads_gzip_upload() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("tests.csv.gz");
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(SAMPLE.as_bytes()).unwrap();
    fs::write(&path, enc.finish().unwrap()).unwrap();

    let table = read_table(&path).unwrap();
    assert_eq!(table.len(), 3);
}

#[test]
fn records_are_typed() {
    let table = read_table_from(SAMPLE.as_bytes(), "sample").unwrap();
    let records = table.test_records().unwrap().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].denial_risk, DenialRisk::Low);
    assert_eq!(records[1].estimated_reimbursement, Some(dec!(2900.5)));
    assert_eq!(records[0].payer.as_deref(), Some("Aetna"));
    assert_eq!(records[2].payer, None);
}

#[test]
fn missing_risk_columns_skip_records() {
    let csv = "test_name,cpt_code\nA,81450\n";
    let table = read_table_from(csv.as_bytes(), "sample").unwrap();
    assert!(table.test_records().unwrap().is_none());
}

#[test]
fn unknown_risk_category_rejects_records() {
    let csv = "test_name,denial_risk,estimated_reimbursement\nA,Low,1\nB,Severe,2\n";
    let table = read_table_from(csv.as_bytes(), "sample").unwrap();
    let err = table.test_records().unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("row 3"), "{}", msg);
    assert!(msg.contains("Severe"), "{}", msg);
}

#[test]
fn bad_reimbursement_rejects_records() {
    let csv = "denial_risk,estimated_reimbursement\nLow,abc\n";
    let table = read_table_from(csv.as_bytes(), "sample").unwrap();
    assert!(table.test_records().is_err());
}

#[test]
fn blank_reimbursement_is_counted_but_not_averaged() {
    let csv = "denial_risk,estimated_reimbursement\nLow,100\nLow,\nHigh,500\n";
    let table = read_table_from(csv.as_bytes(), "sample").unwrap();
    let records = table.test_records().unwrap().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[1].estimated_reimbursement, None);

    let summary = aggregate(&records);
    let low = summary.get(DenialRisk::Low).unwrap();
    assert_eq!(low.count, 2);
    assert_eq!(low.mean_reimbursement, Some(dec!(100)));
    let high = summary.get(DenialRisk::High).unwrap();
    assert_eq!(high.count, 1);
    assert_eq!(high.mean_reimbursement, Some(dec!(500)));
}

#[test]
fn empty_risk_rows_are_dropped() {
    let csv = "denial_risk,estimated_reimbursement\nLow,10\n,20\nHigh,1e2\n";
    let table = read_table_from(csv.as_bytes(), "sample").unwrap();
    let records = table.test_records().unwrap().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].estimated_reimbursement, Some(dec!(100)));
}

#[test]
fn ragged_csv_is_malformed() {
    let csv = "a,b\n1,2\n3\n";
    let err = read_table_from(csv.as_bytes(), "ragged").unwrap_err();
    assert!(format!("{:#}", err).contains("ragged:3"));
}

#[test]
fn empty_file_is_malformed() {
    assert!(read_table_from("".as_bytes(), "empty").is_err());
}

#[test]
fn missing_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    assert!(read_table(&tmp.path().join("nope.csv")).is_err());
}
