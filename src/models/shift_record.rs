//! Committed shift records.
//!
//! A [`ShiftRecord`] is what the ledger stores and persists. Its JSON field
//! names (`startTime`, `breakMins`, ...) are the persisted snapshot format.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lenient::{decimal_number, whole_minutes};

/// Title given to shifts saved without one.
pub const DEFAULT_SHIFT_TITLE: &str = "Untitled shift";

fn default_title() -> String {
    DEFAULT_SHIFT_TITLE.to_string()
}

/// A committed shift.
///
/// `pay` is `hours * rate` as computed when the shift was added and is never
/// recomputed; likewise `currency` is the label selected at that moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRecord {
    /// Unique identifier for the shift.
    pub id: String,
    /// Free text title.
    #[serde(default = "default_title")]
    pub title: String,
    /// Calendar date of the shift, ISO `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    /// Start time exactly as entered.
    #[serde(default)]
    pub start_time: String,
    /// End time exactly as entered.
    #[serde(default)]
    pub end_time: String,
    /// Net worked hours.
    #[serde(default, with = "decimal_number")]
    pub hours: Decimal,
    /// Hourly rate.
    #[serde(default, with = "decimal_number")]
    pub rate: Decimal,
    /// Pay for the shift.
    #[serde(default, with = "decimal_number")]
    pub pay: Decimal,
    /// Unpaid break in minutes.
    #[serde(default, with = "whole_minutes")]
    pub break_mins: u32,
    /// Currency label captured when the shift was added.
    #[serde(default)]
    pub currency: String,
    /// Whether the shift was marked overnight.
    #[serde(default)]
    pub overnight: bool,
}

impl ShiftRecord {
    /// Parses the record's date, if it is a valid ISO date.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }
}
