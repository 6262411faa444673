//! Calculation logic for the shift ledger.
//!
//! This module contains the pure pay calculator, the lenient parsing of
//! form values it relies on, and the fixed-point formatting shared by the
//! preview and the rendered shift list.

mod format;
mod input_parsing;
mod shift_pay;

pub use format::{format_fixed, format_money};
pub use input_parsing::{
    normalize_rate, normalize_time, parse_break_minutes, parse_rate, parse_shift_input,
};
pub use shift_pay::{HOURS_SCALE, ShiftPay, calculate_shift_pay, compute};
