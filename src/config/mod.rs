//! Detector settings.
//!
//! Settings are layered: built-in defaults, then an optional file (TOML, YAML,
//! JSON), then environment variables prefixed with `DETECTOR` and using `__`
//! as the section separator (e.g. `DETECTOR__ENGINE__DEFAULT_ALGORITHM=bad_character`).
//! The merged result is validated before use.

use std::path::{Path, PathBuf};

use crate::error::config::ConfigError;
use config::{Config, ConfigError as ExternalConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod engine;

/// Result type for loading and validating settings.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Environment variable prefix read by the CLI
pub const ENV_PREFIX: &str = "DETECTOR";

/// Settings sections that can check their own values.
pub trait Validate {
    /// Rejects values the detector cannot run with.
    fn validate(&self) -> ConfigResult<()>;
}

/// All detector settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DetectorConfig {
    /// Matching engine limits and defaults
    pub engine: engine::EngineConfig,

    /// Where the pattern catalog lives
    pub catalog: catalog::CatalogConfig,

    /// Log output
    pub log: LogConfig,
}

impl Validate for DetectorConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.engine.validate()?;
        self.catalog.validate()?;
        self.log.validate()
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error); `RUST_LOG` takes precedence
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    pub json: bool,

    /// Include file and line of each event
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            source_location: true,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

        if LEVELS.contains(&self.level.as_str()) {
            Ok(())
        } else {
            Err(ConfigError::ValidationError(format!(
                "log.level must be one of {}, got {:?}",
                LEVELS.join(", "),
                self.level
            )))
        }
    }
}

/// Builds a [`DetectorConfig`] from defaults, an optional file and the environment.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a loader reading `config_path` (if any) and variables starting with `env_prefix`.
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Merges every source and validates the result.
    ///
    /// # Errors
    ///
    /// Fails when the file is missing or has an unsupported extension, when a
    /// source does not deserialize, or when validation rejects a value.
    pub fn load(&self) -> ConfigResult<DetectorConfig> {
        let defaults = Config::try_from(&DetectorConfig::default())
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        let mut builder = Config::builder().add_source(defaults);

        if let Some(path) = &self.config_path {
            builder = builder.add_source(File::from(path.as_path()).format(file_format(path)?));
        }

        let merged = builder
            .add_source(
                Environment::with_prefix(&self.env_prefix)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(map_external)?;

        let detector_config: DetectorConfig = merged.try_deserialize().map_err(map_external)?;
        detector_config.validate()?;

        tracing::debug!(
            file = ?self.config_path,
            env_prefix = %self.env_prefix,
            "Configuration loaded"
        );

        Ok(detector_config)
    }
}

/// Format of the settings file at `path`, picked from its extension.
fn file_format(path: &Path) -> ConfigResult<FileFormat> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let format = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => FileFormat::Toml,
        Some("json") => FileFormat::Json,
        Some("yaml" | "yml") => FileFormat::Yaml,
        _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    };
    Ok(format)
}

fn map_external(error: ExternalConfigError) -> ConfigError {
    match error {
        ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
        other => ConfigError::ParseError(other.to_string()),
    }
}
