use ngs_reimburse::rules::RuleTable;
use ngs_reimburse::scores::mapping::{map_codes, mapping_preview};

#[test]
fn myeloid_fusion_matches_both() {
    let m = map_codes("Myeloid Fusion Panel");
    assert_eq!(m.snomed, "123456");
    assert_eq!(m.loinc, "98765-4");
}

#[test]
fn unrelated_name_gets_defaults() {
    let m = map_codes("Solid Tumor Panel");
    assert_eq!(m.snomed, "654321");
    assert_eq!(m.loinc, "54321-0");
}

#[test]
fn checks_are_independent_and_case_insensitive() {
    let m = map_codes("MYELOID NGS");
    assert_eq!(m.snomed, "123456");
    assert_eq!(m.loinc, "54321-0");

    let m = map_codes("RNA fusion screen");
    assert_eq!(m.snomed, "654321");
    assert_eq!(m.loinc, "98765-4");
}

#[test]
fn preview_dedups_in_first_occurrence_order() {
    let rules = RuleTable::builtin();
    let names = ["B Fusion", "A Myeloid", "B Fusion", "C Panel", "A Myeloid"];
    let preview = mapping_preview(&rules.coding, names);
    let order: Vec<&str> = preview.iter().map(|m| m.test_name.as_str()).collect();
    assert_eq!(order, vec!["B Fusion", "A Myeloid", "C Panel"]);
    assert_eq!(preview[0].loinc, "98765-4");
    assert_eq!(preview[1].snomed, "123456");
}

#[test]
fn mapping_is_repeatable() {
    assert_eq!(map_codes("Myeloid"), map_codes("Myeloid"));
}
