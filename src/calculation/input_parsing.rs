//! Lenient parsing of shift form values.
//!
//! Form fields arrive as free text. Every parse path here is total: a
//! value that cannot be read falls back to zero (or to "not computable"
//! for times) instead of producing an error.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::models::{ShiftInput, TimeOfDay};

/// Returns the leading numeric portion of `value` (optional sign, digits,
/// and optionally a fractional part and exponent), ignoring leading
/// whitespace.
///
/// `"22.50/h"` yields `"22.50"`, `"1e3"` yields `"1e3"`, `"abc"` yields `""`.
fn numeric_prefix(value: &str, allow_fraction: bool) -> &str {
    let trimmed = value.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > digits_start;

    if allow_fraction && end < bytes.len() && bytes[end] == b'.' {
        let fraction_start = end + 1;
        let mut fraction_end = fraction_start;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
        }
        if fraction_end > fraction_start {
            end = fraction_end;
            has_digits = true;
        } else if has_digits {
            // "22." reads as 22
            end = fraction_start - 1;
        }
    }

    if !has_digits {
        return "";
    }

    if allow_fraction && end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exponent_start = end + 1;
        if matches!(bytes.get(exponent_start), Some(b'+') | Some(b'-')) {
            exponent_start += 1;
        }
        let mut exponent_end = exponent_start;
        while exponent_end < bytes.len() && bytes[exponent_end].is_ascii_digit() {
            exponent_end += 1;
        }
        // "2e" or "2e+" reads as 2
        if exponent_end > exponent_start {
            end = exponent_end;
        }
    }

    &trimmed[..end]
}

/// Parses an hourly rate, defaulting to zero.
///
/// Negative or unparsable rates yield zero; trailing text after the number
/// is ignored. Scientific notation is read (`"1e3"` is 1000) unless the
/// value is too large for a decimal, which also yields zero.
///
/// # Examples
///
/// ```
/// use shift_ledger::calculation::parse_rate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_rate("22.50"), Decimal::new(2250, 2));
/// assert_eq!(parse_rate("abc"), Decimal::ZERO);
/// assert_eq!(parse_rate("-5"), Decimal::ZERO);
/// assert_eq!(parse_rate("1e3"), Decimal::new(1000, 0));
/// ```
pub fn parse_rate(value: &str) -> Decimal {
    match read_decimal(value) {
        Some(rate) if !rate.is_sign_negative() => rate,
        _ => Decimal::ZERO,
    }
}

/// Reads the leading decimal number of `value`, if any.
fn read_decimal(value: &str) -> Option<Decimal> {
    let prefix = numeric_prefix(value, true);
    let (negative, digits) = match prefix.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, prefix.strip_prefix('+').unwrap_or(prefix)),
    };
    if digits.is_empty() {
        return None;
    }

    let digits = if digits.starts_with('.') {
        format!("0{}", digits)
    } else {
        digits.to_string()
    };
    let magnitude = if digits.contains(['e', 'E']) {
        Decimal::from_scientific(&digits).ok()?
    } else {
        Decimal::from_str(&digits).ok()?
    };
    Some(if negative { -magnitude } else { magnitude })
}

/// Parses an unpaid break length in whole minutes, defaulting to zero.
///
/// A fractional part is truncated (`"30.9"` is 30 minutes); negative or
/// unparsable values yield zero.
pub fn parse_break_minutes(value: &str) -> u32 {
    numeric_prefix(value, false).parse::<i64>().map_or(0, |minutes| {
        u32::try_from(minutes.max(0)).unwrap_or(u32::MAX)
    })
}

/// Builds a [`ShiftInput`] from raw form values.
///
/// Returns `None` when either time is empty or malformed, meaning the shift
/// cannot be calculated yet. Rate and break default to zero.
pub fn parse_shift_input(
    start_time: &str,
    end_time: &str,
    hourly_rate: &str,
    break_minutes: &str,
    overnight: bool,
) -> Option<ShiftInput> {
    let start_time = TimeOfDay::parse(start_time)?;
    let end_time = TimeOfDay::parse(end_time)?;

    Some(ShiftInput {
        start_time,
        end_time,
        hourly_rate: parse_rate(hourly_rate),
        break_minutes: parse_break_minutes(break_minutes),
        overnight,
    })
}

/// Normalizes a rate field when it loses focus: unparsable or negative
/// values become `"0"`, anything else is left as typed.
pub fn normalize_rate(value: &str) -> String {
    match read_decimal(value) {
        Some(rate) if !rate.is_sign_negative() => value.to_string(),
        _ => "0".to_string(),
    }
}

/// Normalizes a time field when it loses focus: an empty value becomes `"00:00"`.
pub fn normalize_time(value: &str) -> String {
    if value.trim().is_empty() {
        TimeOfDay::MIDNIGHT.to_string()
    } else {
        value.to_string()
    }
}
