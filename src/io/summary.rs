use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::math::money::{format_break_even, format_usd, format_usd_whole};

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let rec = ctx
        .recommendation
        .as_ref()
        .context("recommendation missing")?;
    let roi = ctx.roi.as_ref().context("roi missing")?;

    let mut out = String::new();
    out.push_str(&format!("ngs-reimburse v{}\n", version));
    out.push_str(&format!(
        "Test: {}, {} genes, scenario={}\n",
        ctx.config.test_type.label(),
        ctx.config.gene_count,
        ctx.config.testing_mode.label()
    ));
    out.push_str(&format!("Recommended CPT Code: {}\n", rec.cpt_code));
    out.push_str(&format!(
        "Medicare Reimbursement Estimate: {}\n",
        format_usd(rec.base_reimbursement)
    ));
    out.push_str(&format!("Warning: {}\n", rec.warning_text));
    if rec.flagged_payers.is_empty() {
        out.push_str("Flagged Payers: none\n");
    } else {
        out.push_str(&format!("Flagged Payers: {}\n", rec.flagged_payers.join(", ")));
    }

    out.push_str(&format!(
        "Scenario A (only panel CPTs billed): revenue {}, profit {}\n",
        format_usd(roi.revenue_a),
        format_usd(roi.profit_a)
    ));
    out.push_str(&format!(
        "Scenario B (panel + backbone CPT billed): revenue {}, profit {}\n",
        format_usd(roi.revenue_b),
        format_usd(roi.profit_b)
    ));
    out.push_str(&format!(
        "Panels needed to break even if backbone is NOT billed: {}\n",
        format_break_even(roi.break_even_panels)
    ));

    if let Some(table) = &ctx.table {
        out.push_str(&format!(
            "Upload: {} rows, columns={}\n",
            table.len(),
            table.headers().join(",")
        ));
    }
    if let Some(summary) = &ctx.risk_summary {
        let parts: Vec<String> = summary
            .groups
            .iter()
            .map(|g| {
                let avg = g
                    .mean_reimbursement
                    .map(format_usd_whole)
                    .unwrap_or_else(|| "n/a".to_string());
                format!("{} n={} avg {}", g.risk, g.count, avg)
            })
            .collect();
        out.push_str(&format!("Denial Risk: {}\n", parts.join("; ")));
    }
    if let Some(view) = &ctx.cpt_drilldown {
        out.push_str(&format!(
            "CPT drill-down {}: {} rows\n",
            view.selected,
            view.rows.len()
        ));
    }
    if let Some(view) = &ctx.payer_drilldown {
        out.push_str(&format!(
            "Payer filter {}: {} rows\n",
            view.selected,
            view.rows.len()
        ));
    }
    if let Some(mappings) = &ctx.code_mappings {
        out.push_str("SNOMED/LOINC mapping:\n");
        for m in mappings {
            out.push_str(&format!("- {}: SNOMED {}, LOINC {}\n", m.test_name, m.snomed, m.loinc));
        }
    }

    Ok(out)
}
