//! Shift input types.
//!
//! [`ShiftForm`] holds the raw, uncommitted values a user has typed;
//! [`ShiftInput`] is the typed form of those values that the calculator
//! works on. Neither is ever persisted.

use rust_decimal::Decimal;

use crate::calculation::parse_shift_input;
use crate::config::FormDefaults;

use super::TimeOfDay;

/// Typed input to the pay calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftInput {
    /// When the shift starts.
    pub start_time: TimeOfDay,
    /// When the shift ends.
    pub end_time: TimeOfDay,
    /// The hourly rate; never negative.
    pub hourly_rate: Decimal,
    /// Unpaid break length in minutes.
    pub break_minutes: u32,
    /// Whether the shift was marked as crossing midnight.
    pub overnight: bool,
}

/// Raw shift form values as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShiftForm {
    /// Start time as typed, expected `"HH:MM"`.
    pub start_time: String,
    /// End time as typed, expected `"HH:MM"`.
    pub end_time: String,
    /// Hourly rate as typed.
    pub hourly_rate: String,
    /// Break minutes as typed or selected.
    pub break_minutes: String,
    /// The overnight toggle.
    pub overnight: bool,
}

impl ShiftForm {
    /// Creates a form pre-filled with the configured reset values.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_ledger::config::FormDefaults;
    /// use shift_ledger::models::ShiftForm;
    ///
    /// let form = ShiftForm::from_defaults(&FormDefaults::default());
    /// assert_eq!(form.start_time, "09:00");
    /// assert_eq!(form.end_time, "17:30");
    /// assert_eq!(form.hourly_rate, "22.50");
    /// assert_eq!(form.break_minutes, "30");
    /// assert!(!form.overnight);
    /// ```
    pub fn from_defaults(defaults: &FormDefaults) -> Self {
        Self {
            start_time: defaults.start_time.clone(),
            end_time: defaults.end_time.clone(),
            hourly_rate: defaults.hourly_rate.clone(),
            break_minutes: defaults.break_minutes.to_string(),
            overnight: defaults.overnight,
        }
    }

    /// Converts the form into calculator input.
    ///
    /// Returns `None` while either time is missing or malformed.
    pub fn to_input(&self) -> Option<ShiftInput> {
        parse_shift_input(
            &self.start_time,
            &self.end_time,
            &self.hourly_rate,
            &self.break_minutes,
            self.overnight,
        )
    }
}
