//! Shift pay calculator and shift ledger.
//!
//! This crate computes pay for work shifts from start and end times, an
//! hourly rate, an unpaid break and an overnight flag, and keeps a locally
//! persisted list of committed shifts with a running total.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
