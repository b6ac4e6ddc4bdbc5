use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::rules::defaults;
use crate::schema::v1::{CarveOutStrategy, TestType, TestingMode};

#[derive(Debug, Parser)]
#[command(
    name = "ngs-reimburse",
    version,
    about = "NGS reimbursement optimization: CPT recommendation, carve-out ROI, denial risk"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate one test configuration
    Run(RunArgs),
    /// Check an upload and list the views it enables
    Validate(ValidateArgs),
    /// Print billing reference material
    Reference(ReferenceArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(long, value_enum, default_value_t = TestTypeArg::SolidTumorDna)]
    pub test_type: TestTypeArg,

    #[arg(long, value_enum, default_value_t = TestingModeArg::PanelOnly)]
    pub testing_mode: TestingModeArg,

    #[arg(
        long,
        default_value_t = defaults::GENE_COUNT,
        value_parser = clap::value_parser!(u16).range(
            defaults::GENE_COUNT_MIN as i64..=defaults::GENE_COUNT_MAX as i64
        ),
        help = "Number of genes in panel (1-500)"
    )]
    pub gene_count: u16,

    #[arg(
        long,
        default_value_t = defaults::lab_cost(),
        value_parser = parse_non_negative_decimal,
        help = "Total lab cost per sample ($)"
    )]
    pub lab_cost: Decimal,

    #[arg(
        long,
        default_value_t = defaults::INPATIENT_PCT,
        value_parser = clap::value_parser!(u8).range(0..=defaults::INPATIENT_PCT_MAX as i64),
        help = "% of inpatient volume (14-day rule applies)"
    )]
    pub inpatient_pct: u8,

    #[arg(long, value_enum, default_value_t = CarveOutStrategyArg::SameGenome)]
    pub carve_out_strategy: CarveOutStrategyArg,

    #[arg(
        long,
        default_value_t = defaults::CARVE_OUT_PANELS,
        value_parser = clap::value_parser!(u8).range(
            defaults::CARVE_OUT_PANELS_MIN as i64..=defaults::CARVE_OUT_PANELS_MAX as i64
        ),
        help = "Carve-out panels reported per genome (1-5)"
    )]
    pub carve_out_panels: u8,

    #[arg(
        long,
        default_value_t = defaults::backbone_cpt_reimb(),
        value_parser = parse_decimal,
        help = "Backbone CPT reimbursement if billed (e.g. 81425 for WGS)"
    )]
    pub backbone_cpt_reimb: Decimal,

    #[arg(
        long,
        default_value_t = defaults::backbone_cost(),
        value_parser = parse_decimal,
        help = "Backbone sequencing cost (WES/WGS) per sample"
    )]
    pub backbone_cost: Decimal,

    #[arg(long, help = "CSV of test names and attributes (.csv or .csv.gz)")]
    pub upload: Option<PathBuf>,

    #[arg(long, help = "CPT code to drill down on (default: first in upload)")]
    pub cpt: Option<String>,

    #[arg(long, help = "Payer to filter on (default: first in upload)")]
    pub payer: Option<String>,

    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub tsv: bool,

    #[arg(long, default_value_t = false, help = "Write denial_risk_chart.svg")]
    pub chart: bool,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long, help = "CSV of test names and attributes (.csv or .csv.gz)")]
    pub upload: PathBuf,
}

#[derive(Debug, Args)]
pub struct ReferenceArgs {
    #[arg(value_enum)]
    pub topic: ReferenceTopic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReferenceTopic {
    Zcodes,
    Checklist,
    Coding,
    TestTypes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TestTypeArg {
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

impl From<TestTypeArg> for TestType {
    fn from(arg: TestTypeArg) -> Self {
        match arg {
            TestTypeArg::SolidTumorDna => TestType::SolidTumorDna,
            TestTypeArg::SolidTumorRna => TestType::SolidTumorRna,
            TestTypeArg::SolidTumorDnaRna => TestType::SolidTumorDnaRna,
            TestTypeArg::HematologicDna => TestType::HematologicDna,
            TestTypeArg::HematologicRna => TestType::HematologicRna,
            TestTypeArg::HematologicDnaRna => TestType::HematologicDnaRna,
            TestTypeArg::LiquidBiopsyCtdna => TestType::LiquidBiopsyCtdna,
            TestTypeArg::WholeExome => TestType::WholeExome,
            TestTypeArg::WholeGenome => TestType::WholeGenome,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TestingModeArg {
    PanelOnly,
    Wes,
    Wgs,
}

impl From<TestingModeArg> for TestingMode {
    fn from(arg: TestingModeArg) -> Self {
        match arg {
            TestingModeArg::PanelOnly => TestingMode::PanelOnly,
            TestingModeArg::Wes => TestingMode::Wes,
            TestingModeArg::Wgs => TestingMode::Wgs,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CarveOutStrategyArg {
    SameGenome,
    SeparateGenomes,
}

impl From<CarveOutStrategyArg> for CarveOutStrategy {
    fn from(arg: CarveOutStrategyArg) -> Self {
        match arg {
            CarveOutStrategyArg::SameGenome => CarveOutStrategy::SameGenome,
            CarveOutStrategyArg::SeparateGenomes => CarveOutStrategy::SeparateGenomes,
        }
    }
}

fn parse_decimal(raw: &str) -> Result<Decimal, String> {
    raw.trim()
        .parse::<Decimal>()
        .map_err(|e| format!("invalid amount '{}': {}", raw, e))
}

fn parse_non_negative_decimal(raw: &str) -> Result<Decimal, String> {
    let value = parse_decimal(raw)?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(format!("amount must be >= 0, got {}", raw));
    }
    Ok(value)
}
