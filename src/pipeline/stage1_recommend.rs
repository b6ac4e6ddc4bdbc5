use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::recommend::recommend_with;

pub struct Stage1Recommend;

impl Stage1Recommend {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Recommend {
    fn name(&self) -> &'static str {
        "stage1_recommend"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let rec = recommend_with(&ctx.rules, ctx.config.gene_count);
        info!(
            cpt_code = %rec.cpt_code,
            base_reimbursement = %rec.base_reimbursement,
            flagged_payers = rec.flagged_payers.len(),
            "recommendation_ready"
        );
        ctx.recommendation = Some(rec);
        Ok(())
    }
}
