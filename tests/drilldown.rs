use ngs_reimburse::io::upload::read_table_from;
use ngs_reimburse::table::{COL_CPT_CODE, COL_PAYER, UploadTable, drilldown};

fn sample() -> UploadTable {
    let csv = "test_name,cpt_code,payer\n\
A,81455,Cigna\n\
B,81450,Aetna\n\
C,81455,\n\
D,81450,Aetna\n";
    read_table_from(csv.as_bytes(), "sample").unwrap()
}

#[test]
fn cpt_defaults_to_first_sorted_code() {
    let view = drilldown(&sample(), COL_CPT_CODE, None).unwrap();
    assert_eq!(view.options, vec!["81450", "81455"]);
    assert_eq!(view.selected, "81450");
    assert_eq!(view.rows.len(), 2);
    assert_eq!(view.rows.headers().len(), 3);
}

#[test]
fn explicit_cpt_selection() {
    let view = drilldown(&sample(), COL_CPT_CODE, Some("81455")).unwrap();
    let names: Vec<&str> = view.rows.rows().iter().map(|r| r[0].as_str()).collect();
    assert_eq!(names, vec!["A", "C"]);
}

#[test]
fn payer_options_drop_empty_values() {
    let view = drilldown(&sample(), COL_PAYER, None).unwrap();
    assert_eq!(view.options, vec!["Aetna", "Cigna"]);
    assert_eq!(view.rows.len(), 2);
}

#[test]
fn missing_payer_column_omits_view() {
    let csv = "test_name,cpt_code\nA,81450\n";
    let table = read_table_from(csv.as_bytes(), "sample").unwrap();
    assert!(drilldown(&table, COL_PAYER, None).is_none());
    assert!(!table.has_column(COL_PAYER));
}

#[test]
fn unknown_selection_yields_empty_rows() {
    let view = drilldown(&sample(), COL_PAYER, Some("Humana")).unwrap();
    assert!(view.rows.is_empty());
    assert!(!view.options.contains(&view.selected));
}
