use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::denial::{aggregate, build_chart};

pub struct Stage4Denial;

impl Stage4Denial {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Denial {
    fn name(&self) -> &'static str {
        "stage4_denial"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let Some(table) = &ctx.table else {
            return Ok(());
        };

        match table.test_records() {
            Ok(Some(records)) => {
                let summary = aggregate(&records);
                info!(
                    records = records.len(),
                    groups = summary.groups.len(),
                    "denial_risk_ready"
                );
                ctx.risk_chart = Some(build_chart(&summary));
                ctx.risk_summary = Some(summary);
            }
            Ok(None) => {
                info!("denial_risk_skipped_missing_columns");
            }
            Err(err) => {
                warn!(error = %err, "denial risk records rejected");
                ctx.warnings
                    .push(format!("denial risk view skipped: {:#}", err));
            }
        }
        Ok(())
    }
}
