pub mod denial;
pub mod mapping;
pub mod recommend;
pub mod roi;

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeRecommendation {
    pub cpt_code: String,
    pub base_reimbursement: Decimal,
    pub warning_text: String,
    pub flagged_payers: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoiInputs {
    pub carve_out_panels: u8,
    pub backbone_cpt_reimb: Decimal,
    pub backbone_cost: Decimal,
}

/// Panels needed before per-panel profit covers the backbone cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakEven {
    Panels(Decimal),
    /// Panel profit is zero or negative; no panel count breaks even.
    Unreachable,
}

impl BreakEven {
    pub fn panels(self) -> Option<Decimal> {
        match self {
            BreakEven::Panels(p) => Some(p),
            BreakEven::Unreachable => None,
        }
    }

    pub fn is_reachable(self) -> bool {
        matches!(self, BreakEven::Panels(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoiResult {
    pub panel_profit: Decimal,
    pub revenue_a: Decimal,
    pub profit_a: Decimal,
    pub revenue_b: Decimal,
    pub profit_b: Decimal,
    pub break_even_panels: BreakEven,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DenialRisk {
    Low,
    Medium,
    High,
}

impl DenialRisk {
    pub fn as_str(self) -> &'static str {
        match self {
            DenialRisk::Low => "Low",
            DenialRisk::Medium => "Medium",
            DenialRisk::High => "High",
        }
    }
}

impl fmt::Display for DenialRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DenialRisk {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Low" => Ok(DenialRisk::Low),
            "Medium" => Ok(DenialRisk::Medium),
            "High" => Ok(DenialRisk::High),
            other => anyhow::bail!("unrecognized denial_risk category '{}'", other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRecord {
    pub test_name: String,
    pub cpt_code: String,
    pub payer: Option<String>,
    pub denial_risk: DenialRisk,
    /// `None` when the upload cell is blank.
    pub estimated_reimbursement: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskGroup {
    pub risk: DenialRisk,
    pub count: usize,
    /// Mean over records that carry a reimbursement; `None` when none do.
    pub mean_reimbursement: Option<Decimal>,
}

/// Per-category counts, ordered by count descending (ties keep first appearance).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RiskSummary {
    pub groups: Vec<RiskGroup>,
}

impl RiskSummary {
    pub fn get(&self, risk: DenialRisk) -> Option<&RiskGroup> {
        self.groups.iter().find(|g| g.risk == risk)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.count).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarColor {
    Green,
    Orange,
    Red,
}

impl BarColor {
    pub fn as_str(self) -> &'static str {
        match self {
            BarColor::Green => "green",
            BarColor::Orange => "orange",
            BarColor::Red => "red",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    pub label: String,
    pub height: usize,
    pub color: BarColor,
    pub annotation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeMapping {
    pub test_name: String,
    pub snomed: String,
    pub loinc: String,
}
