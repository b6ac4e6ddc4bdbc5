use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::table::{COL_CPT_CODE, COL_PAYER, Drilldown, UploadTable, drilldown};

pub struct Stage5Drilldown;

impl Stage5Drilldown {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Drilldown {
    fn name(&self) -> &'static str {
        "stage5_drilldown"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let Some(table) = &ctx.table else {
            return Ok(());
        };

        let cpt = select(table, COL_CPT_CODE, ctx.cpt_selection.as_deref(), &mut ctx.warnings);
        let payer = select(
            table,
            COL_PAYER,
            ctx.payer_selection.as_deref(),
            &mut ctx.warnings,
        );
        ctx.cpt_drilldown = cpt;
        ctx.payer_drilldown = payer;
        Ok(())
    }
}

fn select(
    table: &UploadTable,
    column: &str,
    selection: Option<&str>,
    warnings: &mut Vec<String>,
) -> Option<Drilldown> {
    let view = drilldown(table, column, selection)?;
    if !view.options.contains(&view.selected) {
        warn!(column, selected = %view.selected, "selection not present in upload");
        warnings.push(format!(
            "{} '{}' not found in upload",
            column, view.selected
        ));
    }
    info!(
        column,
        selected = %view.selected,
        rows = view.rows.len(),
        "drilldown_ready"
    );
    Some(view)
}
