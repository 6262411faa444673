//! Error types for the shift ledger.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the conditions that can occur while configuring, persisting, or
//! adding to the ledger. Unparsable form input is never an error; it is
//! resolved by defaulting (see [`crate::calculation`]).

use thiserror::Error;

/// The main error type for the shift ledger.
///
/// # Example
///
/// ```
/// use shift_ledger::error::LedgerError;
///
/// let error = LedgerError::ConfigNotFound {
///     path: "/missing/ledger.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/ledger.yaml");
/// ```
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The persistence store could not be read.
    #[error("Failed to read '{key}' from the store: {message}")]
    StoreRead {
        /// The store key being read.
        key: String,
        /// A description of the read failure.
        message: String,
    },

    /// The persistence store could not be written.
    #[error("Failed to write '{key}' to the store: {message}")]
    StoreWrite {
        /// The store key being written.
        key: String,
        /// A description of the write failure.
        message: String,
    },

    /// The ledger snapshot could not be serialized.
    #[error("Failed to encode shift snapshot: {message}")]
    SnapshotEncode {
        /// A description of the encoding failure.
        message: String,
    },

    /// A shift was submitted before its start and end times were computable.
    #[error("Incomplete shift: {message}")]
    IncompleteShift {
        /// A description of what is missing.
        message: String,
    },
}

/// A type alias for Results that return LedgerError.
pub type LedgerResult<T> = Result<T, LedgerError>;
