//! Configuration loading and management for the shift ledger.
//!
//! This module loads the ledger configuration from a YAML file: the
//! storage key, currency and title defaults, date formatting, and the
//! values the shift form resets to.
//!
//! # Example
//!
//! ```no_run
//! use shift_ledger::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ledger.yaml").unwrap();
//! println!("Default currency: {}", config.config().default_currency);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{FormDefaults, LedgerConfig};
