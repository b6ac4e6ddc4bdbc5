use anyhow::Result;
use std::time::Instant;
use tracing::{info, warn};

use crate::ctx::Ctx;

pub mod stage0_scaffold;
pub mod stage1_recommend;
pub mod stage2_roi;
pub mod stage3_upload;
pub mod stage4_denial;
pub mod stage5_drilldown;
pub mod stage6_mapping;
pub mod stage7_output;

pub trait Stage {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: &mut Ctx) -> Result<()>;
}

pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Every stage of a full evaluation, in dependency order.
    pub fn full() -> Self {
        Self::new(vec![
            Box::new(stage0_scaffold::Stage0Scaffold::new()),
            Box::new(stage1_recommend::Stage1Recommend::new()),
            Box::new(stage2_roi::Stage2Roi::new()),
            Box::new(stage3_upload::Stage3Upload::new()),
            Box::new(stage4_denial::Stage4Denial::new()),
            Box::new(stage5_drilldown::Stage5Drilldown::new()),
            Box::new(stage6_mapping::Stage6Mapping::new()),
            Box::new(stage7_output::Stage7Output::new()),
        ])
    }

    pub fn run(&self, ctx: &mut Ctx) -> Result<()> {
        info!(
            gene_count = ctx.config.gene_count,
            upload = ctx.upload_path.is_some(),
            "evaluation started"
        );
        for stage in &self.stages {
            let start = Instant::now();
            info!(stage = stage.name(), "stage started");
            if let Err(err) = stage.run(ctx) {
                let elapsed_ms = start.elapsed().as_millis();
                warn!(
                    stage = stage.name(),
                    elapsed_ms = elapsed_ms as u64,
                    error = %err,
                    "stage failed"
                );
                return Err(err);
            }
            let elapsed_ms = start.elapsed().as_millis();
            info!(
                stage = stage.name(),
                elapsed_ms = elapsed_ms as u64,
                "stage finished"
            );
        }
        Ok(())
    }
}
