use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::{Ctx, report_inputs};
use crate::scores::denial::bar_color;
use crate::schema::v1::{
    BreakEven, CodeMapping, Drilldown, Recommendation, ReimbursementReportV1, RiskGroup, Roi,
    Scenario, Upload,
};
use crate::table;

pub fn build_report(ctx: &Ctx) -> Result<ReimbursementReportV1> {
    let recommendation = ctx.recommendation.as_ref().map(|r| Recommendation {
        cpt_code: r.cpt_code.clone(),
        base_reimbursement: r.base_reimbursement,
        warning: r.warning_text.clone(),
        flagged_payers: r.flagged_payers.clone(),
    });

    let roi = ctx.roi.as_ref().map(|r| Roi {
        panel_profit: r.panel_profit,
        scenario_a: Scenario {
            revenue: r.revenue_a,
            profit: r.profit_a,
        },
        scenario_b: Scenario {
            revenue: r.revenue_b,
            profit: r.profit_b,
        },
        break_even: BreakEven {
            reachable: r.break_even_panels.is_reachable(),
            panels: r.break_even_panels.panels(),
        },
    });

    let upload = ctx.table.as_ref().map(|t| Upload {
        rows: t.len() as u64,
        columns: t.headers().to_vec(),
    });

    let denial_risk = ctx.risk_summary.as_ref().map(|s| {
        s.groups
            .iter()
            .map(|g| RiskGroup {
                category: g.risk.as_str().to_string(),
                count: g.count as u64,
                mean_reimbursement: g.mean_reimbursement,
                color: bar_color(g.risk).as_str().to_string(),
            })
            .collect::<Vec<_>>()
    });

    let code_mapping = ctx.code_mappings.as_ref().map(|m| {
        m.iter()
            .map(|c| CodeMapping {
                test_name: c.test_name.clone(),
                snomed: c.snomed.clone(),
                loinc: c.loinc.clone(),
            })
            .collect::<Vec<_>>()
    });

    let mut report = ReimbursementReportV1::empty(
        &ctx.tool_version,
        report_inputs(&ctx.config, &ctx.roi_inputs),
    );
    report.recommendation = recommendation;
    report.roi = roi;
    report.upload = upload;
    report.denial_risk = denial_risk;
    report.cpt_drilldown = ctx.cpt_drilldown.as_ref().map(drilldown_entry);
    report.payer_drilldown = ctx.payer_drilldown.as_ref().map(drilldown_entry);
    report.code_mapping = code_mapping;
    report.warnings = ctx.warnings.clone();
    Ok(report)
}

fn drilldown_entry(view: &table::Drilldown) -> Drilldown {
    Drilldown {
        column: view.column.clone(),
        selected: view.selected.clone(),
        options: view.options.clone(),
        rows: view.rows.len() as u64,
    }
}

pub fn write_json(path: &Path, report: &ReimbursementReportV1) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}
