//! Errors raised while loading and validating detector settings.

use std::path::PathBuf;
use thiserror::Error;

/// Settings could not be loaded or were rejected.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file passed with `--config` does not exist.
    #[error("Config file {0:?} does not exist")]
    FileNotFound(PathBuf),

    /// The config file extension is not one of toml, json, yaml or yml.
    #[error("Unsupported config format for {0:?}, expected .toml, .json or .yaml")]
    UnsupportedFormat(PathBuf),

    /// A source could not be merged or deserialized into [`DetectorConfig`](crate::config::DetectorConfig).
    #[error("Could not read settings: {0}")]
    ParseError(String),

    /// A setting has a value outside its allowed set.
    #[error("Invalid settings: {0}")]
    ValidationError(String),

    /// A numeric setting is outside its allowed range.
    #[error("Setting {key} rejected: {message}")]
    ValueOutOfRange {
        /// Dotted path of the setting, e.g. `engine.workers`
        key: String,
        /// Allowed range
        message: String,
    },
}
