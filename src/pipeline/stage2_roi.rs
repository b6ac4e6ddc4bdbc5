use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::math::money::format_break_even;
use crate::pipeline::Stage;
use crate::scores::roi::compute_roi;

pub struct Stage2Roi;

impl Stage2Roi {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Roi {
    fn name(&self) -> &'static str {
        "stage2_roi"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let base = ctx
            .recommendation
            .as_ref()
            .context("recommendation missing")?
            .base_reimbursement;
        let roi = compute_roi(base, ctx.config.lab_cost, ctx.roi_inputs)
            .context("carve-out ROI could not be computed")?;
        info!(
            panel_profit = %roi.panel_profit,
            profit_a = %roi.profit_a,
            profit_b = %roi.profit_b,
            break_even = %format_break_even(roi.break_even_panels),
            "roi_ready"
        );
        ctx.roi = Some(roi);
        Ok(())
    }
}
