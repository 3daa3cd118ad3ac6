//! # Validator Configuration
//!
//! Tunables for the request validator. Every field has a default, so an
//! empty YAML document is a valid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default event-count ceiling.
pub const DEFAULT_MAX_EVENTS: usize = 1000;

/// Default number of payload bytes included in diagnostic log records.
pub const DEFAULT_PREVIEW_BYTES: usize = 128;

/// Error loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config '{path}': {source}")]
    Read {
        /// Path that failed to load.
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid YAML for [`ValidatorConfig`].
    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Validator tunables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Event-count ceiling. Only checked when `enforce_max_events` is set;
    /// otherwise an oversized batch is logged and accepted.
    pub max_events: usize,

    /// Reject batches larger than `max_events`.
    pub enforce_max_events: bool,

    /// Maximum payload bytes copied into a log record.
    pub preview_bytes: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_events: DEFAULT_MAX_EVENTS,
            enforce_max_events: false,
            preview_bytes: DEFAULT_PREVIEW_BYTES,
        }
    }
}

impl ValidatorConfig {
    /// Parse a configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }
}
