//! Carve-out profitability scenarios.
//!
//! Scenario A bills only the carve-out panel CPTs; scenario B additionally
//! bills the backbone (WES/WGS) CPT. Both absorb the backbone sequencing cost.

use anyhow::{Context, Result};
use rust_decimal::Decimal;

use crate::scores::{BreakEven, RoiInputs, RoiResult};

pub fn compute_roi(
    base_reimbursement: Decimal,
    lab_cost: Decimal,
    inputs: RoiInputs,
) -> Result<RoiResult> {
    let panel_profit = base_reimbursement
        .checked_sub(lab_cost)
        .context("panel profit overflowed")?;
    let revenue_a = base_reimbursement
        .checked_mul(Decimal::from(inputs.carve_out_panels))
        .context("scenario A revenue overflowed")?;
    let profit_a = revenue_a
        .checked_sub(inputs.backbone_cost)
        .context("scenario A profit overflowed")?;
    let revenue_b = revenue_a
        .checked_add(inputs.backbone_cpt_reimb)
        .context("scenario B revenue overflowed")?;
    let profit_b = revenue_b
        .checked_sub(inputs.backbone_cost)
        .context("scenario B profit overflowed")?;

    Ok(RoiResult {
        panel_profit,
        revenue_a,
        profit_a,
        revenue_b,
        profit_b,
        break_even_panels: break_even(inputs.backbone_cost, panel_profit)?,
    })
}

pub fn break_even(backbone_cost: Decimal, panel_profit: Decimal) -> Result<BreakEven> {
    if panel_profit <= Decimal::ZERO {
        return Ok(BreakEven::Unreachable);
    }
    let panels = backbone_cost
        .checked_div(panel_profit)
        .context("break-even panel count overflowed")?;
    Ok(BreakEven::Panels(panels))
}
