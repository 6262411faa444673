//! Core data models for the shift ledger.
//!
//! This module contains the domain models used throughout the crate.

mod lenient;
mod shift;
mod shift_record;
mod time_of_day;

pub use shift::{ShiftForm, ShiftInput};
pub use shift_record::{DEFAULT_SHIFT_TITLE, ShiftRecord};
pub use time_of_day::{MINUTES_PER_DAY, TimeOfDay};
