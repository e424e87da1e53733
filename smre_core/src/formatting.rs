//! Display helpers for prices and volumes.
//!
//! Ties round half away from zero on the exact binary value of the float,
//! so `0.125` renders as `0.13` rather than the banker's `0.12`.

use num_format::{Locale, ToFormattedString};
use rust_decimal::{Decimal, RoundingStrategy};

fn round_half_away(value: f64, digits: usize) -> Option<Decimal> {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(digits as u32, RoundingStrategy::MidpointAwayFromZero))
}

/// Fixed-point rendering with `digits` decimals. Negative zero renders as zero.
pub fn to_fixed(value: f64, digits: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    match round_half_away(value, digits) {
        Some(rounded) => format!("{:.*}", digits, rounded),
        // Out of decimal range (or NaN/inf)
        None => format!("{:.*}", digits, value),
    }
}

/// US dollar currency format with thousands separators, e.g. `$1,234.56`
pub fn format_usd(value: f64) -> String {
    let fixed = to_fixed(value.abs(), 2);
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let grouped = whole
        .parse::<u128>()
        .map(|w| w.to_formatted_string(&Locale::en))
        .unwrap_or_else(|_| whole.to_string());

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

/// Compact volume format: `1.50M`, `12.00K`, `999.00`
pub fn format_compact(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{}M", to_fixed(value / 1_000_000.0, 2))
    } else if value >= 1_000.0 {
        format!("{}K", to_fixed(value / 1_000.0, 2))
    } else {
        to_fixed(value, 2)
    }
}
