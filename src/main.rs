use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ngs_reimburse::cli::{Cli, Commands, ReferenceTopic, RunArgs, ValidateArgs};
use ngs_reimburse::ctx::{Ctx, TestConfiguration};
use ngs_reimburse::io;
use ngs_reimburse::pipeline::Pipeline;
use ngs_reimburse::reference;
use ngs_reimburse::scores::RoiInputs;
use ngs_reimburse::table::{
    COL_CPT_CODE, COL_DENIAL_RISK, COL_ESTIMATED_REIMBURSEMENT, COL_PAYER, COL_TEST_NAME,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => handle_run(args)?,
        Commands::Validate(args) => handle_validate(args)?,
        Commands::Reference(args) => {
            let text = match args.topic {
                ReferenceTopic::Zcodes => reference::render_zcodes()?,
                ReferenceTopic::Checklist => reference::render_checklist()?,
                ReferenceTopic::Coding => reference::render_coding(),
                ReferenceTopic::TestTypes => reference::render_test_types(),
            };
            print!("{}", text);
        }
    }

    Ok(())
}

fn handle_run(args: RunArgs) -> Result<()> {
    let config = TestConfiguration {
        test_type: args.test_type.into(),
        testing_mode: args.testing_mode.into(),
        gene_count: args.gene_count,
        lab_cost: args.lab_cost,
        inpatient_pct: args.inpatient_pct,
        carve_out_strategy: args.carve_out_strategy.into(),
    };
    let roi_inputs = RoiInputs {
        carve_out_panels: args.carve_out_panels,
        backbone_cpt_reimb: args.backbone_cpt_reimb,
        backbone_cost: args.backbone_cost,
    };

    let mut ctx = Ctx::new(config, roi_inputs, args.out, env!("CARGO_PKG_VERSION"));
    ctx.upload_path = args.upload;
    ctx.cpt_selection = args.cpt;
    ctx.payer_selection = args.payer;
    ctx.write_json = args.json;
    ctx.write_tsv = args.tsv;
    ctx.write_chart = args.chart;

    Pipeline::full().run(&mut ctx)?;

    print_summary(&ctx)
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    print_warnings(&ctx.warnings);
    Ok(())
}

fn print_warnings(warnings: &[String]) {
    if !warnings.is_empty() {
        println!("warnings:");
        for warning in warnings {
            println!("- {}", warning);
        }
    }
}

fn handle_validate(args: ValidateArgs) -> Result<()> {
    let table = io::upload::read_table(&args.upload)?;
    let mut warnings = Vec::new();

    let denial_view = match table.test_records() {
        Ok(Some(records)) => format!("yes ({} records)", records.len()),
        Ok(None) => format!(
            "no (needs {} and {})",
            COL_DENIAL_RISK, COL_ESTIMATED_REIMBURSEMENT
        ),
        Err(err) => {
            warnings.push(format!("{:#}", err));
            "rejected".to_string()
        }
    };

    println!("ngs-reimburse validate ok");
    println!("rows: {}", table.len());
    println!("columns: {}", table.headers().join(","));
    println!("denial risk view: {}", denial_view);
    println!("cpt drill-down: {}", yes_no(table.has_column(COL_CPT_CODE)));
    println!("payer filter: {}", yes_no(table.has_column(COL_PAYER)));
    println!("code mapping: {}", yes_no(table.has_column(COL_TEST_NAME)));
    print_warnings(&warnings);
    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
