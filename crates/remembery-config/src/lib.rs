//! Configuration model and loading for Remembery.
//!
//! This crate owns the config schema, JSON5 loading, and the default
//! platform locations for the config file and the record data directory.

mod error;
mod loader;
mod model;

/// Public error type returned by config loading and validation APIs.
pub use error::ConfigError;
/// Default platform paths for config and data.
pub use loader::{default_config_path, default_data_dir};
/// Configuration schema model.
pub use model::RememberyConfig;
