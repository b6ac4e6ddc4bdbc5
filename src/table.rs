//! In-memory view of an uploaded test table.
//!
//! Columns are addressed by header name; every derived view keeps the full
//! header set so filtered tables can be shown as-is.

use std::collections::BTreeSet;

use anyhow::{Context, Result, bail};
use rust_decimal::Decimal;

use crate::scores::{DenialRisk, TestRecord};

pub const COL_TEST_NAME: &str = "test_name";
pub const COL_CPT_CODE: &str = "cpt_code";
pub const COL_PAYER: &str = "payer";
pub const COL_DENIAL_RISK: &str = "denial_risk";
pub const COL_ESTIMATED_REIMBURSEMENT: &str = "estimated_reimbursement";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl UploadTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != headers.len() {
                bail!(
                    "row {} has {} fields, header has {}",
                    idx + 1,
                    row.len(),
                    headers.len()
                );
            }
        }
        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|r| r[idx].as_str()).collect())
    }

    /// Sorted distinct non-empty values of a column.
    pub fn distinct_sorted(&self, name: &str) -> Option<Vec<String>> {
        let values = self.column(name)?;
        let set: BTreeSet<&str> = values.into_iter().filter(|v| !v.is_empty()).collect();
        Some(set.into_iter().map(str::to_string).collect())
    }

    /// Rows whose `name` column equals `value` exactly.
    pub fn filter_eq(&self, name: &str, value: &str) -> Option<UploadTable> {
        let idx = self.column_index(name)?;
        let rows = self
            .rows
            .iter()
            .filter(|r| r[idx] == value)
            .cloned()
            .collect();
        Some(UploadTable {
            headers: self.headers.clone(),
            rows,
        })
    }

    /// Typed records for the denial risk view.
    ///
    /// `Ok(None)` when `denial_risk` or `estimated_reimbursement` is absent.
    /// Rows with an empty `denial_risk` are dropped and a blank
    /// `estimated_reimbursement` is kept as missing; any other invalid value
    /// rejects the whole extraction.
    pub fn test_records(&self) -> Result<Option<Vec<TestRecord>>> {
        let (Some(risk_idx), Some(reimb_idx)) = (
            self.column_index(COL_DENIAL_RISK),
            self.column_index(COL_ESTIMATED_REIMBURSEMENT),
        ) else {
            return Ok(None);
        };
        let name_idx = self.column_index(COL_TEST_NAME);
        let cpt_idx = self.column_index(COL_CPT_CODE);
        let payer_idx = self.column_index(COL_PAYER);

        let mut records = Vec::with_capacity(self.rows.len());
        for (idx, row) in self.rows.iter().enumerate() {
            let line_no = idx + 2;
            let risk_raw = row[risk_idx].as_str();
            if risk_raw.is_empty() {
                continue;
            }
            let denial_risk: DenialRisk = risk_raw
                .parse()
                .with_context(|| format!("row {}: invalid {}", line_no, COL_DENIAL_RISK))?;
            let estimated_reimbursement = parse_amount(&row[reimb_idx]).with_context(|| {
                format!(
                    "row {}: invalid {} '{}'",
                    line_no, COL_ESTIMATED_REIMBURSEMENT, row[reimb_idx]
                )
            })?;
            records.push(TestRecord {
                test_name: name_idx.map(|i| row[i].clone()).unwrap_or_default(),
                cpt_code: cpt_idx.map(|i| row[i].clone()).unwrap_or_default(),
                payer: payer_idx
                    .map(|i| row[i].clone())
                    .filter(|p| !p.is_empty()),
                denial_risk,
                estimated_reimbursement,
            });
        }
        Ok(Some(records))
    }
}

/// Blank cells are missing values, not errors.
fn parse_amount(raw: &str) -> Result<Option<Decimal>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map(Some)
        .map_err(|e| anyhow::anyhow!(e))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drilldown {
    pub column: String,
    pub selected: String,
    pub options: Vec<String>,
    pub rows: UploadTable,
}

/// Exact-match filter on `column`, defaulting the selection to the first option.
///
/// `None` when the column is missing or has no non-empty values.
pub fn drilldown(table: &UploadTable, column: &str, selection: Option<&str>) -> Option<Drilldown> {
    let options = table.distinct_sorted(column)?;
    let selected = match selection {
        Some(s) => s.to_string(),
        None => options.first()?.clone(),
    };
    let rows = table.filter_eq(column, &selected)?;
    Some(Drilldown {
        column: column.to_string(),
        selected,
        options,
        rows,
    })
}
