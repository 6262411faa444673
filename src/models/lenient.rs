//! Lenient serde adapters for persisted shift fields.
//!
//! Snapshots are written by this crate, but may also have been written by
//! older versions or edited by hand, so numeric fields accept JSON numbers,
//! numeric strings, or `null`. Anything unreadable becomes zero.
//!
//! Both adapters read through [`serde_json::Value`]. With serde_json's
//! `arbitrary_precision` feature a number keeps the exact digits it was
//! written with, so a decimal reloads to the same value it was saved as.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

/// Reads a non-negative decimal from plain or scientific notation.
fn decimal_or_zero(text: &str) -> Decimal {
    let parsed = Decimal::from_str(text).or_else(|_| Decimal::from_scientific(text));
    match parsed {
        Ok(number) if !number.is_sign_negative() => number,
        _ => Decimal::ZERO,
    }
}

/// Writes a [`Decimal`] as a JSON number with its exact digits and reads it
/// back from a number, a numeric string, or `null`.
pub mod decimal_number {
    use super::*;

    /// Serializes the decimal as a JSON number carrying every digit.
    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::arbitrary_precision::serialize(value, serializer)
    }

    /// Deserializes a decimal, defaulting unreadable values to zero.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(number) => decimal_or_zero(&number.to_string()),
            Value::String(text) => decimal_or_zero(text.trim()),
            _ => Decimal::ZERO,
        })
    }
}

/// Reads a whole number of minutes from an integer, a float (truncated),
/// a numeric string, or `null`. Negative values become zero.
pub mod whole_minutes {
    use super::*;

    /// Serializes the minutes as an integer.
    pub fn serialize<S: Serializer>(value: &u32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(*value)
    }

    /// Deserializes minutes, defaulting unreadable values to zero.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(number) => minutes_from_number(&number),
            Value::String(text) => crate::calculation::parse_break_minutes(&text),
            _ => 0,
        })
    }

    fn minutes_from_number(number: &serde_json::Number) -> u32 {
        if let Some(minutes) = number.as_u64() {
            return u32::try_from(minutes).unwrap_or(u32::MAX);
        }
        if number.as_i64().is_some() {
            // any integer that is not a u64 is negative
            return 0;
        }
        match number.as_f64() {
            Some(minutes) if minutes > 0.0 => minutes.trunc().min(f64::from(u32::MAX)) as u32,
            _ => 0,
        }
    }
}
