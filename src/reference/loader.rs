use std::collections::HashSet;

use anyhow::{Result, bail};

use crate::reference::{ChecklistItem, ZCodeExample};

pub fn load_zcodes_v1() -> Result<Vec<ZCodeExample>> {
    let content = include_str!("../../assets/reference/zcodes_v1.tsv");
    let pairs = parse_pair_tsv(content, "built-in zcodes v1")?;
    Ok(pairs
        .into_iter()
        .map(|(code, description)| ZCodeExample { code, description })
        .collect())
}

pub fn load_checklist_v1() -> Result<Vec<ChecklistItem>> {
    let content = include_str!("../../assets/reference/checklist_v1.tsv");
    let pairs = parse_pair_tsv(content, "built-in checklist v1")?;
    Ok(pairs
        .into_iter()
        .map(|(id, text)| ChecklistItem { id, text })
        .collect())
}

/// Two-column TSV with `#` comments; keys must be unique, order is kept.
fn parse_pair_tsv(content: &str, source: &str) -> Result<Vec<(String, String)>> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = trimmed.split('\t').collect();
        if parts.len() != 2 {
            bail!("{}:{} malformed TSV (expected 2 columns)", source, line_no);
        }
        let key = parts[0].trim();
        let value = parts[1].trim();
        if key.is_empty() || value.is_empty() {
            bail!("{}:{} empty field in TSV", source, line_no);
        }
        if !seen.insert(key.to_string()) {
            bail!("{}:{} duplicate key '{}'", source, line_no, key);
        }
        out.push((key.to_string(), value.to_string()));
    }

    Ok(out)
}

