//! Session configuration.
//!
//! Controls booking policy and input size bounds. Every field has a
//! default, so an empty document (or no document at all) is valid.
//!
//! ```
//! use u_timetable::SessionConfig;
//!
//! let config = SessionConfig::from_toml_str(r#"
//!     enforce_capacity = false
//!
//!     [limits]
//!     max_records = 5000
//! "#).unwrap();
//!
//! assert!(!config.enforce_capacity);
//! assert_eq!(config.limits.max_records, 5000);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Session-wide policy.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SessionConfig {
    /// Reject classroom bookings whose capacity is below the course
    /// enrollment.
    pub enforce_capacity: bool,

    /// Input size bounds applied before loading.
    pub limits: LoadLimits,
}

/// Upper bounds on input size.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct LoadLimits {
    /// Maximum number of records in one session document. Programs,
    /// departments, member records and course enrollments all count.
    pub max_records: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            enforce_capacity: true,
            limits: LoadLimits::default(),
        }
    }
}

impl Default for LoadLimits {
    fn default() -> Self {
        Self {
            max_records: 100_000,
        }
    }
}

impl SessionConfig {
    /// Creates a default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_records == 0 {
            return Err(ConfigError::Invalid(
                "limits.max_records must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets capacity enforcement.
    pub fn with_enforce_capacity(mut self, enforce: bool) -> Self {
        self.enforce_capacity = enforce;
        self
    }

    /// Sets the record limit.
    pub fn with_max_records(mut self, max_records: usize) -> Self {
        self.limits.max_records = max_records;
        self
    }
}
