use clap::Parser;
use ngs_reimburse::cli::{Cli, Commands, ReferenceTopic, TestTypeArg};
use ngs_reimburse::ctx::TestConfiguration;
use ngs_reimburse::scores::RoiInputs;
use rust_decimal_macros::dec;

#[test]
fn run_defaults() {
    let cli = Cli::try_parse_from(["ngs-reimburse", "run"]).unwrap();
    let Commands::Run(args) = cli.command else {
        panic!("expected run");
    };
    assert_eq!(args.test_type, TestTypeArg::SolidTumorDna);
    assert_eq!(args.gene_count, 50);
    assert_eq!(args.lab_cost, dec!(350.0));
    assert_eq!(args.inpatient_pct, 30);
    assert_eq!(args.carve_out_panels, 2);
    assert_eq!(args.backbone_cpt_reimb, dec!(5500.00));
    assert_eq!(args.backbone_cost, dec!(728.00));
    assert!(args.upload.is_none());
    assert!(!args.json && !args.tsv && !args.chart);
}

#[test]
fn run_rejects_out_of_range_gene_count() {
    for bad in ["0", "501"] {
        let res = Cli::try_parse_from(["ngs-reimburse", "run", "--gene-count", bad]);
        assert!(res.is_err(), "gene count {} accepted", bad);
    }
    assert!(Cli::try_parse_from(["ngs-reimburse", "run", "--gene-count", "500"]).is_ok());
}

#[test]
fn run_rejects_negative_lab_cost() {
    let res = Cli::try_parse_from(["ngs-reimburse", "run", "--lab-cost=-1"]);
    assert!(res.is_err());
    let res = Cli::try_parse_from(["ngs-reimburse", "run", "--lab-cost", "abc"]);
    assert!(res.is_err());
}

#[test]
fn run_rejects_out_of_range_panels_and_inpatient() {
    assert!(Cli::try_parse_from(["ngs-reimburse", "run", "--carve-out-panels", "6"]).is_err());
    assert!(Cli::try_parse_from(["ngs-reimburse", "run", "--inpatient-pct", "101"]).is_err());
}

#[test]
fn run_accepts_kebab_test_type() {
    let cli =
        Cli::try_parse_from(["ngs-reimburse", "run", "--test-type", "hematologic-dna-rna"]).unwrap();
    let Commands::Run(args) = cli.command else {
        panic!("expected run");
    };
    assert_eq!(args.test_type, TestTypeArg::HematologicDnaRna);
}

#[test]
fn reference_topics_parse() {
    let cli = Cli::try_parse_from(["ngs-reimburse", "reference", "test-types"]).unwrap();
    let Commands::Reference(args) = cli.command else {
        panic!("expected reference");
    };
    assert_eq!(args.topic, ReferenceTopic::TestTypes);
}

#[test]
fn run_defaults_match_form_defaults() {
    let cli = Cli::try_parse_from(["ngs-reimburse", "run"]).unwrap();
    let Commands::Run(args) = cli.command else {
        panic!("expected run");
    };
    let config = TestConfiguration::default();
    let roi = RoiInputs::default();
    assert_eq!(args.lab_cost, config.lab_cost);
    assert_eq!(args.gene_count, config.gene_count);
    assert_eq!(args.backbone_cpt_reimb, roi.backbone_cpt_reimb);
    assert_eq!(args.backbone_cost, roi.backbone_cost);
    assert_eq!(args.carve_out_panels, roi.carve_out_panels);
}
