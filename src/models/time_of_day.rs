//! Wall-clock time of day.
//!
//! Shift times are entered as `"HH:MM"` strings. This module parses them
//! into a [`TimeOfDay`] that can be expressed as minutes since midnight or
//! as decimal hours (09:30 → 9.5).

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A wall-clock time with `hour` in `[0, 24)` and `minute` in `[0, 60)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Midnight (00:00).
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0 };

    /// Creates a time of day, returning `None` when either component is out of range.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// Parses an `"HH:MM"` string.
    ///
    /// Surrounding whitespace is ignored and single-digit components are
    /// accepted (`"9:05"`). Returns `None` for empty or malformed input.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_ledger::models::TimeOfDay;
    ///
    /// let time = TimeOfDay::parse("09:30").unwrap();
    /// assert_eq!(time.minutes_since_midnight(), 570);
    /// assert!(TimeOfDay::parse("").is_none());
    /// assert!(TimeOfDay::parse("25:00").is_none());
    /// ```
    pub fn parse(value: &str) -> Option<Self> {
        let (hour, minute) = value.trim().split_once(':')?;
        let hour = parse_component(hour)?;
        let minute = parse_component(minute)?;
        Self::new(hour, minute)
    }

    /// Parses an `"HH:MM"` string, mapping empty or malformed input to midnight.
    pub fn parse_or_midnight(value: &str) -> Self {
        Self::parse(value).unwrap_or(Self::MIDNIGHT)
    }

    /// The hour component.
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// The minute component.
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since midnight, in `[0, 1440)`.
    pub fn minutes_since_midnight(&self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }

    /// The time expressed as decimal hours (`hour + minute / 60`).
    pub fn as_decimal_hours(&self) -> Decimal {
        Decimal::from(self.hour) + Decimal::from(self.minute) / Decimal::from(60)
    }
}

fn parse_component(part: &str) -> Option<u8> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl FromStr for TimeOfDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid time of day: '{}'", s))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_times() {
        assert_eq!(TimeOfDay::parse("00:00"), TimeOfDay::new(0, 0));
        assert_eq!(TimeOfDay::parse("17:30"), TimeOfDay::new(17, 30));
        assert_eq!(TimeOfDay::parse("23:59"), TimeOfDay::new(23, 59));
        assert_eq!(TimeOfDay::parse(" 9:05 "), TimeOfDay::new(9, 5));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for input in ["", ":", "24:00", "12:60", "ab:cd", "12", "12:5x", "-1:00", "123:00"] {
            assert!(TimeOfDay::parse(input).is_none(), "accepted {:?}", input);
        }
    }

    #[test]
    fn test_parse_or_midnight_defaults_to_zero() {
        assert_eq!(TimeOfDay::parse_or_midnight(""), TimeOfDay::MIDNIGHT);
        assert_eq!(TimeOfDay::parse_or_midnight("garbage"), TimeOfDay::MIDNIGHT);
        assert_eq!(TimeOfDay::parse_or_midnight("08:15").minutes_since_midnight(), 495);
    }

    #[test]
    fn test_decimal_hours() {
        let time = TimeOfDay::parse("09:30").unwrap();
        assert_eq!(time.as_decimal_hours(), Decimal::new(95, 1));

        let time = TimeOfDay::parse("17:45").unwrap();
        assert_eq!(time.as_decimal_hours(), Decimal::new(1775, 2));
    }

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(TimeOfDay::new(7, 5).unwrap().to_string(), "07:05");
    }

    #[test]
    fn test_from_str_error_mentions_input() {
        let err = "nope".parse::<TimeOfDay>().unwrap_err();
        assert!(err.contains("nope"));
    }
}
