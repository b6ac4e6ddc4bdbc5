use anyhow::{Context, Result};
use std::fs;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage0Scaffold;

impl Stage0Scaffold {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage0Scaffold {
    fn name(&self) -> &'static str {
        "stage0_scaffold"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.writes_artifacts() {
            fs::create_dir_all(&ctx.output.out_dir).with_context(|| {
                format!("failed to create {}", ctx.output.out_dir.display())
            })?;
            info!(
                out_dir = %ctx.output.out_dir.display(),
                "output_dir_ready"
            );
        }

        info!(
            test_type = ctx.config.test_type.label(),
            testing_mode = ctx.config.testing_mode.label(),
            inpatient_pct = ctx.config.inpatient_pct,
            carve_out_strategy = ctx.config.carve_out_strategy.label(),
            "inputs_recorded"
        );
        Ok(())
    }
}
