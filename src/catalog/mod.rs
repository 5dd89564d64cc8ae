//! Pattern catalog.
//!
//! The catalog is an ordered list of [`PatternRecord`]s owned by whoever
//! created it. The detector receives a snapshot of it per analysis; there is
//! no process-wide pattern list. [`SharedCatalog`] wraps a catalog for callers
//! that need concurrent readers and occasional writers.
//!
//! Catalogs persist as TOML or JSON, selected by file extension:
//!
//! ```toml
//! [[patterns]]
//! pattern = "no funciona"
//! category = "producto"
//! alert_level = "high"
//! alert_message = "Producto no funciona"
//! ```

mod error;
mod record;
mod shared;
mod storage;

pub use error::{CatalogError, CatalogResult};
pub use record::{AlertLevel, PatternRecord};
pub use shared::SharedCatalog;

use std::path::Path;

/// Ordered, validated list of complaint patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternCatalog {
    patterns: Vec<PatternRecord>,
}

impl PatternCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from records, trimming and validating each one.
    pub fn from_records(records: Vec<PatternRecord>) -> CatalogResult<Self> {
        let patterns = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                let record = record.trimmed();
                record.validate(index)?;
                Ok(record)
            })
            .collect::<CatalogResult<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Loads a catalog from a `.toml` or `.json` file.
    pub fn load<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let records = storage::read_records(path.as_ref())?;
        let catalog = Self::from_records(records)?;
        tracing::info!(
            path = %path.as_ref().display(),
            patterns = catalog.len(),
            "Pattern catalog loaded"
        );
        Ok(catalog)
    }

    /// Writes the catalog to a `.toml` or `.json` file, replacing its contents.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> CatalogResult<()> {
        storage::write_records(path.as_ref(), &self.patterns)?;
        tracing::info!(
            path = %path.as_ref().display(),
            patterns = self.len(),
            "Pattern catalog saved"
        );
        Ok(())
    }

    /// Number of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the catalog holds no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// The record at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&PatternRecord> {
        self.patterns.get(index)
    }

    /// All records in catalog order.
    pub fn records(&self) -> &[PatternRecord] {
        &self.patterns
    }

    /// Iterates over records in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, PatternRecord> {
        self.patterns.iter()
    }

    /// Appends a record and returns its index.
    pub fn add(&mut self, record: PatternRecord) -> CatalogResult<usize> {
        let index = self.patterns.len();
        let record = record.trimmed();
        record.validate(index)?;
        self.patterns.push(record);
        Ok(index)
    }

    /// Replaces the record at `index` and returns the previous one.
    pub fn update(&mut self, index: usize, record: PatternRecord) -> CatalogResult<PatternRecord> {
        self.check_index(index)?;
        let record = record.trimmed();
        record.validate(index)?;
        Ok(std::mem::replace(&mut self.patterns[index], record))
    }

    /// Removes and returns the record at `index`; later records shift down.
    pub fn delete(&mut self, index: usize) -> CatalogResult<PatternRecord> {
        self.check_index(index)?;
        Ok(self.patterns.remove(index))
    }

    fn check_index(&self, index: usize) -> CatalogResult<()> {
        if index >= self.patterns.len() {
            return Err(CatalogError::IndexOutOfRange {
                index,
                len: self.patterns.len(),
            });
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a PatternCatalog {
    type Item = &'a PatternRecord;
    type IntoIter = std::slice::Iter<'a, PatternRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
