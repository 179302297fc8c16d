//! # Unit Formatting
//!
//! Exact decimal rendering of integer token amounts. No floating point is
//! involved, so large balances keep every digit.

use primitive_types::U256;

/// Decimals of ether relative to wei.
pub const ETHER_DECIMALS: u32 = 18;

/// Render `wei` in ether with `places` fractional digits, rounded half up.
pub fn format_ether(wei: U256, places: u32) -> String {
    format_units(wei, ETHER_DECIMALS, places)
}

/// Render `value` scaled down by `10^decimals` with `places` fractional
/// digits, rounded half up. `places` is capped at `decimals`.
pub fn format_units(value: U256, decimals: u32, places: u32) -> String {
    let places = places.min(decimals);
    let scale = U256::exp10((decimals - places) as usize);

    let quotient = value / scale;
    let remainder = value % scale;
    // remainder >= scale / 2, without overflowing
    let rounded = if remainder >= scale - remainder && !remainder.is_zero() {
        quotient + U256::one()
    } else {
        quotient
    };

    if places == 0 {
        return rounded.to_string();
    }

    let unit = U256::exp10(places as usize);
    let whole = rounded / unit;
    let fraction = (rounded % unit).to_string();
    format!(
        "{whole}.{fraction:0>width$}",
        width = places as usize
    )
}

/// Decimal digits grouped by thousands: `1234567` -> `1,234,567`.
pub fn group_thousands(value: U256) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
