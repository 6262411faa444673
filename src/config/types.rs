//! Configuration types for the shift ledger.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field is
//! optional in the file and falls back to the defaults documented here.

use serde::Deserialize;

use crate::models::DEFAULT_SHIFT_TITLE;

/// Values the shift form is reset to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormDefaults {
    /// Start time, `"09:00"` by default.
    pub start_time: String,
    /// End time, `"17:30"` by default.
    pub end_time: String,
    /// Hourly rate, `"22.50"` by default.
    pub hourly_rate: String,
    /// Unpaid break minutes, 30 by default.
    pub break_minutes: u32,
    /// Overnight toggle, off by default.
    pub overnight: bool,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            start_time: "09:00".to_string(),
            end_time: "17:30".to_string(),
            hourly_rate: "22.50".to_string(),
            break_minutes: 30,
            overnight: false,
        }
    }
}

/// The complete ledger configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Key the shift snapshot is stored under.
    pub storage_key: String,
    /// Currency label selected at startup.
    pub default_currency: String,
    /// Title used for shifts saved without one.
    pub untitled_title: String,
    /// chrono format string for rendered shift dates.
    pub date_format: String,
    /// Marker shown on rows for overnight shifts.
    pub overnight_marker: String,
    /// Form reset values.
    pub form_defaults: FormDefaults,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            storage_key: "shifts".to_string(),
            default_currency: "$".to_string(),
            untitled_title: DEFAULT_SHIFT_TITLE.to_string(),
            date_format: "%a %-d %b %Y".to_string(),
            overnight_marker: "overnight".to_string(),
            form_defaults: FormDefaults::default(),
        }
    }
}
