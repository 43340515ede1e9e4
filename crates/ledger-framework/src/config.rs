//! Ledger configuration.
//!
//! Settings are read from TOML. Every field has a default, so an empty document is a
//! valid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_BUFFER_SIZE: usize = 32;
const DEFAULT_MAX_VALUE_BYTES: usize = 1024 * 1024;

/// Reference ledger settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Capacity of the request channel between clients and the actor.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,

    /// Largest value, in bytes, a single `put_state` may store.
    #[serde(default = "default_max_value_bytes")]
    pub max_value_bytes: usize,
}

fn default_buffer_size() -> usize {
    DEFAULT_BUFFER_SIZE
}

fn default_max_value_bytes() -> usize {
    DEFAULT_MAX_VALUE_BYTES
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            max_value_bytes: DEFAULT_MAX_VALUE_BYTES,
        }
    }
}

impl LedgerConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or `buffer_size` is zero.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // tokio::sync::mpsc::channel panics on a zero capacity
        if self.buffer_size == 0 {
            return Err(ConfigError::Validation(
                "buffer_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading the config file.
    #[error("failed to read config: {0}")]
    Io(#[source] std::io::Error),

    /// Parse error in the TOML document.
    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    /// A value was well-formed but not acceptable.
    #[error("invalid config: {0}")]
    Validation(String),
}
