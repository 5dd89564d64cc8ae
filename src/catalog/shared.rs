//! Shared catalog handle.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;

use super::error::CatalogResult;
use super::PatternCatalog;

/// A catalog shared between readers and writers.
///
/// Readers take an immutable [`snapshot`](SharedCatalog::snapshot) and search
/// it without holding the lock; writers mutate through
/// [`write`](SharedCatalog::write), which copies the catalog only while a
/// snapshot of the previous version is still alive.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<Arc<PatternCatalog>>>,
}

impl SharedCatalog {
    /// Wraps `catalog` for shared access.
    pub fn new(catalog: PatternCatalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(catalog))),
        }
    }

    /// The current catalog. Later writes do not affect the returned value.
    pub fn snapshot(&self) -> Arc<PatternCatalog> {
        Arc::clone(&self.inner.read())
    }

    /// Applies `f` to the catalog under the write lock.
    pub fn write<T>(&self, f: impl FnOnce(&mut PatternCatalog) -> T) -> T {
        let mut guard = self.inner.write();
        f(Arc::make_mut(&mut guard))
    }

    /// Replaces the catalog with the contents of `path` and returns the new
    /// pattern count. The current catalog is kept if loading fails.
    pub fn reload<P: AsRef<Path>>(&self, path: P) -> CatalogResult<usize> {
        let catalog = PatternCatalog::load(path)?;
        let len = catalog.len();
        *self.inner.write() = Arc::new(catalog);
        Ok(len)
    }

    /// Saves the current catalog to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> CatalogResult<()> {
        self.snapshot().save(path)
    }

    /// Number of patterns in the current catalog.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether the current catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AlertLevel, PatternRecord};
    use std::thread;

    fn record(pattern: &str) -> PatternRecord {
        PatternRecord::new(pattern, "servicio", AlertLevel::Medium, "")
    }

    #[test]
    fn test_snapshot_is_isolated_from_writes() {
        let shared = SharedCatalog::new(PatternCatalog::new());
        shared.write(|c| c.add(record("demora"))).unwrap();

        let before = shared.snapshot();
        shared.write(|c| c.add(record("mala atencion"))).unwrap();

        assert_eq!(before.len(), 1);
        assert_eq!(shared.snapshot().len(), 2);
        assert_eq!(shared.len(), 2);
    }

    #[test]
    fn test_concurrent_readers_and_writer() {
        let shared = SharedCatalog::new(PatternCatalog::new());

        let writer = {
            let shared = shared.clone();
            thread::spawn(move || {
                for i in 0..50 {
                    shared.write(|c| c.add(record(&format!("patron {i}")))).unwrap();
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..50 {
                        let snapshot = shared.snapshot();
                        // Snapshots are always internally consistent
                        assert!(snapshot.iter().all(|r| !r.pattern.is_empty()));
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }

        assert_eq!(shared.len(), 50);
    }

    #[test]
    fn test_reload_failure_keeps_current_catalog() {
        let shared = SharedCatalog::new(PatternCatalog::new());
        shared.write(|c| c.add(record("demora"))).unwrap();

        assert!(shared.reload("/nonexistent/patterns.toml").is_err());
        assert_eq!(shared.len(), 1);
    }
}
