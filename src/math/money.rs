//! Currency arithmetic and display helpers.
//!
//! Display rounding is banker's rounding on the exact decimal value.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::scores::BreakEven;

/// `$1,519.06`; negative values render as `$-72.00`.
pub fn format_usd(value: Decimal) -> String {
    format!("${}", group_thousands(value, 2))
}

/// `$1,520` for chart annotations.
pub fn format_usd_whole(value: Decimal) -> String {
    format!("${}", group_thousands(value, 0))
}

pub fn format_break_even(value: BreakEven) -> String {
    match value {
        BreakEven::Panels(p) => format!("{:.2}", round_dp(p, 2)),
        BreakEven::Unreachable => "inf".to_string(),
    }
}

pub fn round_dp(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven)
}

pub fn mean(values: &[Decimal]) -> Option<Decimal> {
    if values.is_empty() {
        return None;
    }
    let sum: Decimal = values.iter().copied().sum();
    Some(sum / Decimal::from(values.len()))
}

fn group_thousands(value: Decimal, dp: u32) -> String {
    let rounded = round_dp(value, dp);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.*}", dp as usize, rounded.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + int_part.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}
