//! Standalone SVG rendering of a bar chart.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::scores::BarChart;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 480.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 70.0;
const BAR_FILL: f64 = 0.8;

pub fn render_svg(chart: &BarChart) -> Result<String> {
    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let max_height = chart.bars.iter().map(|b| b.height).max().unwrap_or(0);
    // Headroom above the tallest bar for its annotation.
    let y_max = (max_height + 1) as f64;
    let step = ((y_max / 5.0).ceil() as usize).max(1);
    let baseline = MARGIN_TOP + plot_h;

    let mut out = String::new();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = WIDTH,
        h = HEIGHT
    )?;
    writeln!(out, r#"<rect width="100%" height="100%" fill="white"/>"#)?;
    writeln!(
        out,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="16">{}</text>"#,
        MARGIN_LEFT + plot_w / 2.0,
        MARGIN_TOP / 2.0 + 6.0,
        escape(&chart.title)
    )?;

    let mut tick = 0usize;
    while (tick as f64) <= y_max {
        let y = baseline - tick as f64 / y_max * plot_h;
        writeln!(
            out,
            r##"<line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="#dddddd"/>"##,
            MARGIN_LEFT,
            MARGIN_LEFT + plot_w
        )?;
        writeln!(
            out,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="end" font-size="11">{}</text>"#,
            MARGIN_LEFT - 6.0,
            y + 4.0,
            tick
        )?;
        tick += step;
    }

    let n = chart.bars.len().max(1) as f64;
    let slot = plot_w / n;
    let bar_w = slot * BAR_FILL;
    for (i, bar) in chart.bars.iter().enumerate() {
        let x = MARGIN_LEFT + i as f64 * slot + (slot - bar_w) / 2.0;
        let h = bar.height as f64 / y_max * plot_h;
        let center = x + bar_w / 2.0;
        writeln!(
            out,
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
            x,
            baseline - h,
            bar_w,
            h,
            bar.color.as_str()
        )?;
        writeln!(
            out,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="11" font-weight="bold">{}</text>"#,
            center,
            baseline - h - 6.0,
            escape(&bar.annotation)
        )?;
        writeln!(
            out,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="12">{}</text>"#,
            center,
            baseline + 18.0,
            escape(&bar.label)
        )?;
    }

    writeln!(
        out,
        r#"<line x1="{l:.1}" y1="{b:.1}" x2="{r:.1}" y2="{b:.1}" stroke="black"/>"#,
        l = MARGIN_LEFT,
        r = MARGIN_LEFT + plot_w,
        b = baseline
    )?;
    writeln!(
        out,
        r#"<line x1="{l:.1}" y1="{t:.1}" x2="{l:.1}" y2="{b:.1}" stroke="black"/>"#,
        l = MARGIN_LEFT,
        t = MARGIN_TOP,
        b = baseline
    )?;
    writeln!(
        out,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="13">{}</text>"#,
        MARGIN_LEFT + plot_w / 2.0,
        HEIGHT - 20.0,
        escape(&chart.x_label)
    )?;
    writeln!(
        out,
        r#"<text x="20" y="{y:.1}" text-anchor="middle" font-size="13" transform="rotate(-90 20 {y:.1})">{}</text>"#,
        escape(&chart.y_label),
        y = MARGIN_TOP + plot_h / 2.0
    )?;
    writeln!(out, "</svg>")?;
    Ok(out)
}

pub fn write_chart_svg(path: &Path, chart: &BarChart) -> Result<()> {
    let svg = render_svg(chart)?;
    std::fs::write(path, svg).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), bars = chart.bars.len(), "chart_written");
    Ok(())
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
