//! Display formatting for hours and money.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats `value` with exactly `places` decimal places, rounding halves
/// away from zero.
///
/// # Examples
///
/// ```
/// use shift_ledger::calculation::format_fixed;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_fixed(Decimal::new(8, 0), 1), "8.0");
/// assert_eq!(format_fixed(Decimal::new(12345, 3), 2), "12.35");
/// ```
pub fn format_fixed(value: Decimal, places: u32) -> String {
    let rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", places as usize, rounded)
}

/// Formats an amount with a currency label prefix, e.g. `"$180.00"`.
pub fn format_money(currency: &str, amount: Decimal) -> String {
    format!("{}{}", currency, format_fixed(amount, 2))
}
