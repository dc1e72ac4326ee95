//! Configuration schema model.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level Remembery configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RememberyConfig {
    /// Overrides the platform data directory holding the record store.
    pub data_dir: Option<PathBuf>,
    /// List memories newest-first by default.
    pub newest_first: bool,
}

impl Default for RememberyConfig {
    /// Defaults: platform data dir, newest-first listings.
    fn default() -> Self {
        Self {
            data_dir: None,
            newest_first: true,
        }
    }
}

impl RememberyConfig {
    /// Validate configuration invariants that cannot be expressed in serde.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(data_dir) = &self.data_dir {
            if data_dir.as_os_str().is_empty() {
                return Err(ConfigError::Invalid(
                    "data_dir must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}
