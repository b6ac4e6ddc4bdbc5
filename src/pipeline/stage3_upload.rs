use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::io::upload::read_table;
use crate::pipeline::Stage;

pub struct Stage3Upload;

impl Stage3Upload {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Upload {
    fn name(&self) -> &'static str {
        "stage3_upload"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let Some(path) = ctx.upload_path.clone() else {
            return Ok(());
        };

        // A bad upload only disables the table-driven views.
        match read_table(&path) {
            Ok(table) => {
                info!(
                    upload = %path.display(),
                    rows = table.len(),
                    columns = table.headers().len(),
                    "upload_loaded"
                );
                ctx.table = Some(table);
            }
            Err(err) => {
                warn!(upload = %path.display(), error = %err, "upload failed");
                ctx.warnings
                    .push(format!("upload {} failed: {:#}", path.display(), err));
            }
        }
        Ok(())
    }
}
