use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestType {
    SolidTumorDna,
    SolidTumorRna,
    SolidTumorDnaRna,
    HematologicDna,
    HematologicRna,
    HematologicDnaRna,
    LiquidBiopsyCtdna,
    WholeExome,
    WholeGenome,
}

impl TestType {
    pub const ALL: [TestType; 9] = [
        TestType::SolidTumorDna,
        TestType::SolidTumorRna,
        TestType::SolidTumorDnaRna,
        TestType::HematologicDna,
        TestType::HematologicRna,
        TestType::HematologicDnaRna,
        TestType::LiquidBiopsyCtdna,
        TestType::WholeExome,
        TestType::WholeGenome,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TestType::SolidTumorDna => "Solid Tumor – DNA Panel",
            TestType::SolidTumorRna => "Solid Tumor – RNA Panel",
            TestType::SolidTumorDnaRna => "Solid Tumor – DNA + RNA Panel",
            TestType::HematologicDna => "Hematologic – DNA Panel",
            TestType::HematologicRna => "Hematologic – RNA Panel",
            TestType::HematologicDnaRna => "Hematologic – DNA + RNA Panel",
            TestType::LiquidBiopsyCtdna => "Liquid Biopsy – ctDNA",
            TestType::WholeExome => "Whole Exome (WES)",
            TestType::WholeGenome => "Whole Genome (WGS)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestingMode {
    PanelOnly,
    Wes,
    Wgs,
}

impl TestingMode {
    pub fn label(self) -> &'static str {
        match self {
            TestingMode::PanelOnly => "Panel-Only Testing",
            TestingMode::Wes => "Whole Exome Sequencing (WES)",
            TestingMode::Wgs => "Whole Genome Sequencing (WGS)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CarveOutStrategy {
    SameGenome,
    SeparateGenomes,
}

impl CarveOutStrategy {
    pub fn label(self) -> &'static str {
        match self {
            CarveOutStrategy::SameGenome => "Same Genome (multiple CPTs per sample)",
            CarveOutStrategy::SeparateGenomes => "Separate Genomes (one CPT per sample)",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inputs {
    pub test_type: TestType,
    pub testing_mode: TestingMode,
    pub gene_count: u16,
    pub lab_cost: Decimal,
    pub inpatient_pct: u8,
    pub carve_out_strategy: CarveOutStrategy,
    pub carve_out_panels: u8,
    pub backbone_cpt_reimb: Decimal,
    pub backbone_cost: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub cpt_code: String,
    pub base_reimbursement: Decimal,
    pub warning: String,
    pub flagged_payers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub revenue: Decimal,
    pub profit: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakEven {
    pub reachable: bool,
    pub panels: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roi {
    pub panel_profit: Decimal,
    pub scenario_a: Scenario,
    pub scenario_b: Scenario,
    pub break_even: BreakEven,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Upload {
    pub rows: u64,
    pub columns: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskGroup {
    pub category: String,
    pub count: u64,
    pub mean_reimbursement: Option<Decimal>,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drilldown {
    pub column: String,
    pub selected: String,
    pub options: Vec<String>,
    pub rows: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeMapping {
    pub test_name: String,
    #[serde(rename = "SNOMED")]
    pub snomed: String,
    #[serde(rename = "LOINC")]
    pub loinc: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReimbursementReportV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub inputs: Inputs,
    pub recommendation: Option<Recommendation>,
    pub roi: Option<Roi>,
    pub upload: Option<Upload>,
    pub denial_risk: Option<Vec<RiskGroup>>,
    pub cpt_drilldown: Option<Drilldown>,
    pub payer_drilldown: Option<Drilldown>,
    pub code_mapping: Option<Vec<CodeMapping>>,
    pub warnings: Vec<String>,
}

impl ReimbursementReportV1 {
    pub fn empty(tool_version: &str, inputs: Inputs) -> Self {
        Self {
            tool: "ngs-reimburse".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            inputs,
            recommendation: None,
            roi: None,
            upload: None,
            denial_risk: None,
            cpt_drilldown: None,
            payer_drilldown: None,
            code_mapping: None,
            warnings: Vec::new(),
        }
    }
}
