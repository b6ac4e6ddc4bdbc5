use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{chart_svg, json_writer, tsv_writer};
use crate::pipeline::Stage;

pub struct Stage7Output;

impl Stage7Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage7Output {
    fn name(&self) -> &'static str {
        "stage7_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.write_chart {
            match &ctx.risk_chart {
                Some(chart) => chart_svg::write_chart_svg(&ctx.output.chart_path, chart)?,
                None => ctx
                    .warnings
                    .push("no denial risk summary; chart not written".to_string()),
            }
        }

        if ctx.write_json {
            let report = json_writer::build_report(ctx)?;
            json_writer::write_json(&ctx.output.json_path, &report)?;
        }
        if ctx.write_tsv {
            tsv_writer::write_all(ctx)?;
        }

        info!("stage7_output_ready");
        Ok(())
    }
}
