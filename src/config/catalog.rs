//! Pattern catalog location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;

/// Default catalog location, relative to the working directory
const DEFAULT_CATALOG_PATH: &str = "data/patterns.toml";

/// Where the pattern catalog lives and how it is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the catalog file (`.toml` or `.json`)
    pub path: PathBuf,

    /// Whether catalog edits from the command line are written back to `path`
    pub autosave: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CATALOG_PATH),
            autosave: true,
        }
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.path.extension().and_then(|ext| ext.to_str()) {
            Some("toml" | "json") => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Catalog path must end in .toml or .json: {:?}",
                self.path
            ))),
        }
    }
}
