//! Default form values and accepted input ranges.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const GENE_COUNT: u16 = 50;
pub const GENE_COUNT_MIN: u16 = 1;
pub const GENE_COUNT_MAX: u16 = 500;

pub const INPATIENT_PCT: u8 = 30;
pub const INPATIENT_PCT_MAX: u8 = 100;

pub const CARVE_OUT_PANELS: u8 = 2;
pub const CARVE_OUT_PANELS_MIN: u8 = 1;
pub const CARVE_OUT_PANELS_MAX: u8 = 5;

pub fn lab_cost() -> Decimal {
    dec!(350.0)
}

pub fn backbone_cpt_reimb() -> Decimal {
    dec!(5500.00)
}

pub fn backbone_cost() -> Decimal {
    dec!(728.00)
}
