use std::path::PathBuf;

use rust_decimal::Decimal;

use crate::rules::{RuleTable, defaults};
use crate::schema::v1::{CarveOutStrategy, Inputs, TestType, TestingMode};
use crate::scores::{
    BarChart, CodeMapping, CodeRecommendation, RiskSummary, RoiInputs, RoiResult,
};
use crate::table::{Drilldown, UploadTable};

/// Form inputs for one evaluation.
///
/// `inpatient_pct`, `carve_out_strategy` and `testing_mode` are carried
/// through to the report but no formula reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestConfiguration {
    pub test_type: TestType,
    pub testing_mode: TestingMode,
    pub gene_count: u16,
    pub lab_cost: Decimal,
    pub inpatient_pct: u8,
    pub carve_out_strategy: CarveOutStrategy,
}

impl Default for TestConfiguration {
    fn default() -> Self {
        Self {
            test_type: TestType::SolidTumorDna,
            testing_mode: TestingMode::PanelOnly,
            gene_count: defaults::GENE_COUNT,
            lab_cost: defaults::lab_cost(),
            inpatient_pct: defaults::INPATIENT_PCT,
            carve_out_strategy: CarveOutStrategy::SameGenome,
        }
    }
}

impl Default for RoiInputs {
    fn default() -> Self {
        Self {
            carve_out_panels: defaults::CARVE_OUT_PANELS,
            backbone_cpt_reimb: defaults::backbone_cpt_reimb(),
            backbone_cost: defaults::backbone_cost(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub risk_summary_tsv: PathBuf,
    pub code_mapping_tsv: PathBuf,
    pub cpt_drilldown_tsv: PathBuf,
    pub payer_drilldown_tsv: PathBuf,
    pub chart_path: PathBuf,
}

impl OutputPaths {
    pub fn new(out_dir: PathBuf) -> Self {
        Self {
            json_path: out_dir.join("reimbursement.json"),
            risk_summary_tsv: out_dir.join("denial_risk_summary.tsv"),
            code_mapping_tsv: out_dir.join("code_mapping.tsv"),
            cpt_drilldown_tsv: out_dir.join("cpt_drilldown.tsv"),
            payer_drilldown_tsv: out_dir.join("payer_drilldown.tsv"),
            chart_path: out_dir.join("denial_risk_chart.svg"),
            out_dir,
        }
    }
}

#[derive(Debug)]
pub struct Ctx {
    pub tool_version: String,
    pub config: TestConfiguration,
    pub roi_inputs: RoiInputs,
    pub rules: RuleTable,
    pub upload_path: Option<PathBuf>,
    pub cpt_selection: Option<String>,
    pub payer_selection: Option<String>,
    pub write_json: bool,
    pub write_tsv: bool,
    pub write_chart: bool,
    pub output: OutputPaths,
    pub warnings: Vec<String>,
    pub recommendation: Option<CodeRecommendation>,
    pub roi: Option<RoiResult>,
    pub table: Option<UploadTable>,
    pub risk_summary: Option<RiskSummary>,
    pub risk_chart: Option<BarChart>,
    pub cpt_drilldown: Option<Drilldown>,
    pub payer_drilldown: Option<Drilldown>,
    pub code_mappings: Option<Vec<CodeMapping>>,
}

impl Ctx {
    pub fn new(
        config: TestConfiguration,
        roi_inputs: RoiInputs,
        out_dir: PathBuf,
        tool_version: &str,
    ) -> Self {
        Self {
            tool_version: tool_version.to_string(),
            config,
            roi_inputs,
            rules: RuleTable::builtin(),
            upload_path: None,
            cpt_selection: None,
            payer_selection: None,
            write_json: false,
            write_tsv: false,
            write_chart: false,
            output: OutputPaths::new(out_dir),
            warnings: Vec::new(),
            recommendation: None,
            roi: None,
            table: None,
            risk_summary: None,
            risk_chart: None,
            cpt_drilldown: None,
            payer_drilldown: None,
            code_mappings: None,
        }
    }

    pub fn writes_artifacts(&self) -> bool {
        self.write_json || self.write_tsv || self.write_chart
    }
}

pub fn report_inputs(config: &TestConfiguration, roi: &RoiInputs) -> Inputs {
    Inputs {
        test_type: config.test_type,
        testing_mode: config.testing_mode,
        gene_count: config.gene_count,
        lab_cost: config.lab_cost,
        inpatient_pct: config.inpatient_pct,
        carve_out_strategy: config.carve_out_strategy,
        carve_out_panels: roi.carve_out_panels,
        backbone_cpt_reimb: roi.backbone_cpt_reimb,
        backbone_cost: roi.backbone_cost,
    }
}
