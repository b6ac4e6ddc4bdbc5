use rust_decimal::Decimal;

use crate::math::money::{format_usd_whole, mean};
use crate::scores::{Bar, BarChart, BarColor, DenialRisk, RiskGroup, RiskSummary, TestRecord};

pub fn aggregate(records: &[TestRecord]) -> RiskSummary {
    // Buckets in order of first appearance; the stable sort below keeps it for ties.
    // Blank reimbursements count toward the group but not its mean.
    let mut buckets: Vec<(DenialRisk, usize, Vec<Decimal>)> = Vec::new();
    for record in records {
        let idx = match buckets.iter().position(|(risk, _, _)| *risk == record.denial_risk) {
            Some(idx) => idx,
            None => {
                buckets.push((record.denial_risk, 0, Vec::new()));
                buckets.len() - 1
            }
        };
        let (_, count, values) = &mut buckets[idx];
        *count += 1;
        values.extend(record.estimated_reimbursement);
    }

    let mut groups: Vec<RiskGroup> = buckets
        .into_iter()
        .map(|(risk, count, values)| RiskGroup {
            risk,
            count,
            mean_reimbursement: mean(&values),
        })
        .collect();
    groups.sort_by(|a, b| b.count.cmp(&a.count));

    RiskSummary { groups }
}

pub fn bar_color(risk: DenialRisk) -> BarColor {
    match risk {
        DenialRisk::Low => BarColor::Green,
        DenialRisk::Medium => BarColor::Orange,
        DenialRisk::High => BarColor::Red,
    }
}

pub fn build_chart(summary: &RiskSummary) -> BarChart {
    let bars = summary
        .groups
        .iter()
        .map(|g| Bar {
            label: g.risk.as_str().to_string(),
            height: g.count,
            color: bar_color(g.risk),
            annotation: match g.mean_reimbursement {
                Some(avg) => format!("Avg: {}", format_usd_whole(avg)),
                None => "Avg: n/a".to_string(),
            },
        })
        .collect();
    BarChart {
        title: "Denial Risk Levels".to_string(),
        x_label: "Risk Category".to_string(),
        y_label: "Number of Tests".to_string(),
        bars,
    }
}
