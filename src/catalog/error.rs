//! Error types for the pattern catalog.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while editing, loading or saving a pattern catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Error when the catalog file is missing.
    #[error("Pattern catalog not found: {0}")]
    FileNotFound(PathBuf),

    /// Error when the catalog file extension is not a supported format.
    #[error("Unsupported catalog format for {0:?}: expected .toml or .json")]
    UnsupportedFormat(PathBuf),

    /// Error when parsing the catalog file.
    #[error("Failed to parse pattern catalog: {0}")]
    Parse(String),

    /// Error when serializing the catalog for saving.
    #[error("Failed to serialize pattern catalog: {0}")]
    Serialization(String),

    /// Error when a record is missing a required field.
    #[error("Invalid pattern record at index {index}: {reason}")]
    InvalidRecord {
        /// Position of the record in the catalog
        index: usize,
        /// What is wrong with the record
        reason: String,
    },

    /// Error when an index does not address an existing record.
    #[error("Index {index} out of range for catalog of {len} patterns")]
    IndexOutOfRange {
        /// The requested index
        index: usize,
        /// Number of records in the catalog
        len: usize,
    },

    /// IO errors while reading or writing the catalog file.
    #[error("Catalog IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
