//! Shift duration and pay calculation.
//!
//! This module turns a start time, end time, hourly rate, unpaid break and
//! overnight flag into net worked hours and pay.

use rust_decimal::Decimal;

use crate::models::{MINUTES_PER_DAY, ShiftInput};

use super::format::format_fixed;
use super::input_parsing::parse_shift_input;

/// Decimal places kept for worked hours.
///
/// Hours are derived from whole minutes, so 6 places pin any duration to
/// well under a second while keeping `hours * rate` exactly reproducible
/// from the persisted snapshot.
pub const HOURS_SCALE: u32 = 6;

/// The result of a shift pay calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftPay {
    /// Span between start and adjusted end, before the break.
    pub raw_hours: Decimal,
    /// Net worked hours after subtracting the unpaid break.
    pub hours: Decimal,
    /// The hourly rate used.
    pub rate: Decimal,
    /// Pay for the shift: `hours * rate`.
    pub pay: Decimal,
}

impl ShiftPay {
    /// A short description of the calculation, e.g. `"22.50/h × 8.0 h"`.
    pub fn rate_note(&self) -> String {
        format!(
            "{}/h × {} h",
            format_fixed(self.rate, 2),
            format_fixed(self.hours, 1)
        )
    }
}

/// Returns the end of the shift in minutes after the start day's midnight.
///
/// An overnight shift whose end is at or before its start finishes the next
/// day, so equal times mean a full 24 hours. Without the overnight flag an
/// end strictly before the start is still pushed to the next day, but equal
/// times mean zero hours.
fn adjusted_end_minutes(start: u32, end: u32, overnight: bool) -> u32 {
    let crosses_midnight = if overnight { end <= start } else { end < start };
    if crosses_midnight {
        end + MINUTES_PER_DAY
    } else {
        end
    }
}

fn minutes_to_hours(minutes: u32) -> Decimal {
    (Decimal::from(minutes) / Decimal::from(60)).round_dp(HOURS_SCALE)
}

/// Calculates net hours and pay for a shift.
///
/// # Examples
///
/// ```
/// use shift_ledger::calculation::calculate_shift_pay;
/// use shift_ledger::models::{ShiftInput, TimeOfDay};
/// use rust_decimal::Decimal;
///
/// let input = ShiftInput {
///     start_time: TimeOfDay::parse("09:00").unwrap(),
///     end_time: TimeOfDay::parse("17:30").unwrap(),
///     hourly_rate: Decimal::new(2250, 2),
///     break_minutes: 30,
///     overnight: false,
/// };
///
/// let result = calculate_shift_pay(&input);
/// assert_eq!(result.hours, Decimal::new(8, 0));
/// assert_eq!(result.pay, Decimal::new(180, 0));
/// ```
pub fn calculate_shift_pay(input: &ShiftInput) -> ShiftPay {
    let start = input.start_time.minutes_since_midnight();
    let end = adjusted_end_minutes(
        start,
        input.end_time.minutes_since_midnight(),
        input.overnight,
    );

    let raw_minutes = end.saturating_sub(start);
    let net_minutes = raw_minutes.saturating_sub(input.break_minutes);

    let hours = minutes_to_hours(net_minutes);
    let pay = hours
        .checked_mul(input.hourly_rate)
        .unwrap_or(Decimal::MAX);

    ShiftPay {
        raw_hours: minutes_to_hours(raw_minutes),
        hours,
        rate: input.hourly_rate,
        pay,
    }
}

/// Calculates a shift from raw form values.
///
/// Returns `None` when either time is empty or malformed; the shift simply
/// cannot be calculated yet. An unreadable rate or break counts as zero.
///
/// # Examples
///
/// ```
/// use shift_ledger::calculation::compute;
/// use rust_decimal::Decimal;
///
/// let result = compute("22:00", "06:00", "30", "0", true).unwrap();
/// assert_eq!(result.hours, Decimal::new(8, 0));
///
/// assert!(compute("", "17:00", "10", "0", false).is_none());
/// ```
pub fn compute(
    start_time: &str,
    end_time: &str,
    hourly_rate: &str,
    break_minutes: &str,
    overnight: bool,
) -> Option<ShiftPay> {
    parse_shift_input(start_time, end_time, hourly_rate, break_minutes, overnight)
        .map(|input| calculate_shift_pay(&input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_day_shift_with_break() {
        let result = compute("09:00", "17:30", "22.50", "30", false).unwrap();
        assert_eq!(result.raw_hours, dec("8.5"));
        assert_eq!(result.hours, dec("8"));
        assert_eq!(result.pay, dec("180"));
    }

    #[test]
    fn test_overnight_shift_crosses_midnight() {
        let result = compute("22:00", "06:00", "30", "30", true).unwrap();
        assert_eq!(result.raw_hours, dec("8"));
        assert_eq!(result.hours, dec("7.5"));
        assert_eq!(result.pay, dec("225"));
    }

    #[test]
    fn test_equal_times_overnight_is_full_day() {
        let result = compute("10:00", "10:00", "20", "0", true).unwrap();
        assert_eq!(result.hours, dec("24"));
        assert_eq!(result.pay, dec("480"));
    }

    #[test]
    fn test_equal_times_same_day_is_zero() {
        let result = compute("10:00", "10:00", "20", "0", false).unwrap();
        assert_eq!(result.hours, Decimal::ZERO);
        assert_eq!(result.pay, Decimal::ZERO);
    }

    #[test]
    fn test_end_before_start_without_overnight_still_wraps() {
        let result = compute("23:00", "05:00", "10", "0", false).unwrap();
        assert_eq!(result.hours, dec("6"));
    }

    #[test]
    fn test_overnight_flag_ignored_when_end_after_start() {
        let result = compute("09:00", "17:00", "10", "0", true).unwrap();
        assert_eq!(result.hours, dec("8"));
    }

    #[test]
    fn test_break_longer_than_shift_clamps_to_zero() {
        let result = compute("09:00", "10:00", "20", "90", false).unwrap();
        assert_eq!(result.hours, Decimal::ZERO);
        assert_eq!(result.pay, Decimal::ZERO);
    }

    #[test]
    fn test_missing_times_are_not_computable() {
        assert!(compute("", "17:00", "10", "0", false).is_none());
        assert!(compute("09:00", "", "10", "0", false).is_none());
        assert!(compute("", "", "10", "0", true).is_none());
    }

    #[test]
    fn test_unparsable_rate_and_break_default_to_zero() {
        let result = compute("09:00", "17:00", "abc", "lunch", false).unwrap();
        assert_eq!(result.hours, dec("8"));
        assert_eq!(result.rate, Decimal::ZERO);
        assert_eq!(result.pay, Decimal::ZERO);
    }

    #[test]
    fn test_fractional_hours_are_scaled() {
        let result = compute("09:00", "09:20", "30", "0", false).unwrap();
        assert_eq!(result.hours, dec("0.333333"));
        assert_eq!(result.pay, result.hours * result.rate);
    }

    #[test]
    fn test_rate_note() {
        let result = compute("09:00", "17:30", "22.5", "30", false).unwrap();
        assert_eq!(result.rate_note(), "22.50/h × 8.0 h");
    }

    proptest! {
        #[test]
        fn prop_same_day_hours_match_span_minus_break(
            a in 0u32..1440,
            b in 0u32..1440,
            break_minutes in 0u32..600,
            rate_cents in 0u32..100_000,
        ) {
            let (start, end) = (a.min(b), a.max(b));
            let span = end - start;
            let start_text = format!("{:02}:{:02}", start / 60, start % 60);
            let end_text = format!("{:02}:{:02}", end / 60, end % 60);
            let rate = Decimal::new(i64::from(rate_cents), 2);

            let result = compute(
                &start_text,
                &end_text,
                &rate.to_string(),
                &break_minutes.to_string(),
                false,
            )
            .unwrap();

            let expected = minutes_to_hours(span.saturating_sub(break_minutes));
            prop_assert_eq!(result.hours, expected);
            prop_assert_eq!(result.pay, expected * rate);
            prop_assert!(!result.hours.is_sign_negative());
        }

        #[test]
        fn prop_hours_never_exceed_a_day(
            start in 0u32..1440,
            end in 0u32..1440,
            overnight in any::<bool>(),
        ) {
            let start_text = format!("{:02}:{:02}", start / 60, start % 60);
            let end_text = format!("{:02}:{:02}", end / 60, end % 60);
            let result = compute(&start_text, &end_text, "1", "0", overnight).unwrap();
            prop_assert!(result.hours <= Decimal::from(24));
            prop_assert!(result.hours >= Decimal::ZERO);
        }

        #[test]
        fn prop_compute_is_idempotent(
            start in 0u32..1440,
            end in 0u32..1440,
            break_minutes in 0u32..300,
            overnight in any::<bool>(),
        ) {
            let start_text = format!("{:02}:{:02}", start / 60, start % 60);
            let end_text = format!("{:02}:{:02}", end / 60, end % 60);
            let break_text = break_minutes.to_string();
            let first = compute(&start_text, &end_text, "27.35", &break_text, overnight);
            let second = compute(&start_text, &end_text, "27.35", &break_text, overnight);
            prop_assert_eq!(first, second);
        }
    }
}
