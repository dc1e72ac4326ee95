//! Config file discovery and loading.

use crate::{ConfigError, RememberyConfig};
use directories::ProjectDirs;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config filename under the platform config dir.
const DEFAULT_CONFIG_FILE: &str = "remembery.json5";

/// Default location of the config file, if a platform config dir exists.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(DEFAULT_CONFIG_FILE))
}

/// Default data directory for the record store.
pub fn default_data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "remembery")
}

impl RememberyConfig {
    /// Load config from a path.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        info!("loading config from path: {}", path.as_ref().display());
        let contents = fs::read_to_string(path)?;
        Self::load_from_str(&contents)
    }

    /// Load config from JSON5 contents.
    pub fn load_from_str(contents: &str) -> Result<Self, ConfigError> {
        debug!("loading config from raw contents (len={})", contents.len());
        let config: Self = json5::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the default config file if present, otherwise the defaults.
    pub fn load_default() -> Result<Self, ConfigError> {
        match default_config_path() {
            Some(path) if path.exists() => Self::load_from_path(path),
            _ => {
                debug!("no config file found; using defaults");
                Ok(Self::default())
            }
        }
    }
}
