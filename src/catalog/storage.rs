//! Catalog persistence in TOML or JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{CatalogError, CatalogResult};
use super::record::PatternRecord;

/// On-disk layout shared by both formats.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    patterns: Vec<PatternRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
}

impl Format {
    fn from_path(path: &Path) -> CatalogResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Format::Toml),
            Some("json") => Ok(Format::Json),
            _ => Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Reads the raw records of a catalog file without validating them.
pub(super) fn read_records(path: &Path) -> CatalogResult<Vec<PatternRecord>> {
    let format = Format::from_path(path)?;
    if !path.exists() {
        return Err(CatalogError::FileNotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    let file: CatalogFile = match format {
        Format::Toml => {
            toml::from_str(&contents).map_err(|e| CatalogError::Parse(e.to_string()))?
        }
        Format::Json => {
            serde_json::from_str(&contents).map_err(|e| CatalogError::Parse(e.to_string()))?
        }
    };

    Ok(file.patterns)
}

/// Writes `records` to `path`, creating parent directories as needed.
pub(super) fn write_records(path: &Path, records: &[PatternRecord]) -> CatalogResult<()> {
    let format = Format::from_path(path)?;
    let file = CatalogFile {
        patterns: records.to_vec(),
    };

    let contents = match format {
        Format::Toml => toml::to_string_pretty(&file)
            .map_err(|e| CatalogError::Serialization(e.to_string()))?,
        Format::Json => serde_json::to_string_pretty(&file)
            .map_err(|e| CatalogError::Serialization(e.to_string()))?,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}
