//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the ledger
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};

use super::types::{FormDefaults, LedgerConfig};

/// Loads and provides access to the ledger configuration.
///
/// # File Format
///
/// ```text
/// storage_key: shifts
/// default_currency: "$"
/// untitled_title: Untitled shift
/// date_format: "%a %-d %b %Y"
/// overnight_marker: overnight
/// form_defaults:
///   start_time: "09:00"
///   end_time: "17:30"
///   hourly_rate: "22.50"
///   break_minutes: 30
///   overnight: false
/// ```
///
/// Every key is optional.
///
/// # Example
///
/// ```no_run
/// use shift_ledger::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/ledger.yaml").unwrap();
/// println!("Storing shifts under '{}'", loader.config().storage_key);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: LedgerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or mistyped values (`ConfigParseError`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use shift_ledger::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/ledger.yaml")?;
    /// # Ok::<(), shift_ledger::error::LedgerError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> LedgerResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| LedgerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content).map_err(|message| LedgerError::ConfigParseError {
            path: path_str.clone(),
            message,
        })?;

        debug!(path = %path_str, storage_key = %config.storage_key, "Loaded ledger configuration");
        Ok(Self { config })
    }

    /// Parses configuration from YAML text.
    fn parse(content: &str) -> Result<LedgerConfig, String> {
        // An empty file deserializes as YAML null rather than an empty mapping
        if content.trim().is_empty() {
            return Ok(LedgerConfig::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Returns the form reset values.
    pub fn form_defaults(&self) -> &FormDefaults {
        &self.config.form_defaults
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> LedgerConfig {
        self.config
    }
}
