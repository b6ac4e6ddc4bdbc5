use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::mapping::mapping_preview;
use crate::table::COL_TEST_NAME;

pub struct Stage6Mapping;

impl Stage6Mapping {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage6Mapping {
    fn name(&self) -> &'static str {
        "stage6_mapping"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let Some(names) = ctx.table.as_ref().and_then(|t| t.column(COL_TEST_NAME)) else {
            return Ok(());
        };
        let mappings = mapping_preview(&ctx.rules.coding, names.into_iter().filter(|n| !n.is_empty()));
        info!(test_names = mappings.len(), "code_mapping_ready");
        ctx.code_mappings = Some(mappings);
        Ok(())
    }
}
