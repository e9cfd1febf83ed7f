//! Lock-guarded catalog for concurrent hosts.
//!
//! Writers (`ingest`, `ingest_bytes`, `revalidate`, `evict`) take the lock
//! exclusively; readers share it. Results are cloned out so no guard
//! outlives a call.

use super::{Catalog, CatalogEntry, CatalogSummary};
use crate::validate::ValidatorOptions;
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable handle to a catalog shared between threads.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<Catalog>>,
}

impl SharedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ValidatorOptions) -> Self {
        Self::from(Catalog::with_options(options))
    }

    pub fn ingest(&self, identifier: &str, text: &str, filename_hint: &str) -> CatalogEntry {
        self.inner.write().ingest(identifier, text, filename_hint).clone()
    }

    pub fn ingest_bytes(&self, identifier: &str, bytes: &[u8], filename_hint: &str) -> CatalogEntry {
        self.inner.write().ingest_bytes(identifier, bytes, filename_hint).clone()
    }

    pub fn revalidate(&self, identifier: &str) -> Option<CatalogEntry> {
        self.inner.write().revalidate(identifier).cloned()
    }

    pub fn evict(&self, identifier: &str) -> Option<CatalogEntry> {
        self.inner.write().evict(identifier)
    }

    pub fn get(&self, identifier: &str) -> Option<CatalogEntry> {
        self.inner.read().get(identifier).cloned()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.inner.read().contains(identifier)
    }

    /// Snapshot of the current entries in catalog order
    pub fn list(&self) -> Vec<CatalogEntry> {
        self.inner.read().list().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn summary(&self) -> CatalogSummary {
        self.inner.read().summary()
    }

    /// Run `f` against the catalog under the shared lock
    pub fn read<R>(&self, f: impl FnOnce(&Catalog) -> R) -> R {
        f(&self.inner.read())
    }
}

impl From<Catalog> for SharedCatalog {
    fn from(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Dialect;
    use std::thread;

    #[test]
    fn test_concurrent_ingest() {
        let catalog = SharedCatalog::new();
        thread::scope(|s| {
            for worker in 0..4 {
                let catalog = catalog.clone();
                s.spawn(move || {
                    for i in 0..25 {
                        let name = format!("w{worker}-{i}.js");
                        catalog.ingest(&name, "let a = 1;", &name);
                        assert!(catalog.get(&name).is_some());
                    }
                });
            }
        });
        assert_eq!(catalog.len(), 100);
        assert_eq!(catalog.summary().valid, 100);
    }

    #[test]
    fn test_reads_are_snapshots() {
        let catalog = SharedCatalog::new();
        catalog.ingest("a", "const a = 1;", "a.js");
        let snapshot = catalog.list();
        catalog.ingest("b", "const b = <b />;", "b.jsx");
        assert_eq!(snapshot.len(), 1);
        assert_eq!(catalog.list().len(), 2);
        assert_eq!(catalog.read(|c| c.summary().dialect_count(Dialect::MarkupEmbedded)), 1);
    }

    #[test]
    fn test_revalidate_and_evict() {
        let catalog = SharedCatalog::new();
        assert!(catalog.revalidate("none").is_none());
        catalog.ingest("x", "x(", "x.js");
        let entry = catalog.revalidate("x").map(|e| e.is_valid());
        assert_eq!(entry, Some(false));
        assert!(catalog.evict("x").is_some());
        assert!(catalog.is_empty());
    }
}
