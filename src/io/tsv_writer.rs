use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use tracing::info;

use crate::ctx::Ctx;
use crate::math::money::round_dp;
use crate::scores::denial::bar_color;
use crate::scores::{CodeMapping, RiskSummary};
use crate::table::UploadTable;

/// Writes every table view the context holds; absent views are skipped.
pub fn write_all(ctx: &Ctx) -> Result<()> {
    if let Some(summary) = &ctx.risk_summary {
        write_risk_summary(&ctx.output.risk_summary_tsv, summary)?;
    }
    if let Some(mappings) = &ctx.code_mappings {
        write_code_mapping(&ctx.output.code_mapping_tsv, mappings)?;
    }
    if let Some(view) = &ctx.cpt_drilldown {
        write_table(&ctx.output.cpt_drilldown_tsv, &view.rows)?;
    }
    if let Some(view) = &ctx.payer_drilldown {
        write_table(&ctx.output.payer_drilldown_tsv, &view.rows)?;
    }
    info!(out_dir = %ctx.output.out_dir.display(), "tsv_outputs_written");
    Ok(())
}

pub fn write_risk_summary(path: &Path, summary: &RiskSummary) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    writeln!(w, "denial_risk\tcount\tmean_reimbursement\tcolor")?;
    for g in &summary.groups {
        let mean = g
            .mean_reimbursement
            .map(|m| format!("{:.2}", round_dp(m, 2)))
            .unwrap_or_default();
        writeln!(
            w,
            "{}\t{}\t{}\t{}",
            g.risk,
            g.count,
            mean,
            bar_color(g.risk).as_str()
        )?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_code_mapping(path: &Path, mappings: &[CodeMapping]) -> Result<()> {
    let mut w = WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    w.write_record(["test_name", "SNOMED", "LOINC"])?;
    for m in mappings {
        w.write_record([m.test_name.as_str(), m.snomed.as_str(), m.loinc.as_str()])?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_table(path: &Path, table: &UploadTable) -> Result<()> {
    let mut w = WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    w.write_record(table.headers())?;
    for row in table.rows() {
        w.write_record(row)?;
    }
    w.flush()?;
    Ok(())
}
