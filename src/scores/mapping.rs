use std::collections::HashSet;

use crate::rules::{CodingRule, RuleTable};
use crate::scores::CodeMapping;

pub fn map_codes(test_name: &str) -> CodeMapping {
    map_codes_with(&RuleTable::builtin().coding, test_name)
}

pub fn map_codes_with(rule: &CodingRule, test_name: &str) -> CodeMapping {
    let lowered = test_name.to_lowercase();
    let snomed = if lowered.contains(rule.snomed_keyword) {
        rule.snomed_match
    } else {
        rule.snomed_default
    };
    let loinc = if lowered.contains(rule.loinc_keyword) {
        rule.loinc_match
    } else {
        rule.loinc_default
    };
    CodeMapping {
        test_name: test_name.to_string(),
        snomed: snomed.to_string(),
        loinc: loinc.to_string(),
    }
}

/// Maps each distinct test name once, in order of first occurrence.
pub fn mapping_preview<'a, I>(rule: &CodingRule, test_names: I) -> Vec<CodeMapping>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for name in test_names {
        if seen.insert(name) {
            out.push(map_codes_with(rule, name));
        }
    }
    out
}
