//! In-memory snippet catalog.
//!
//! The catalog owns every [`CatalogEntry`]; classification and validation
//! stay pure and are only called from here.
//!
//! ```text
//! Catalog
//! ├── entries: IndexMap<identifier, CatalogEntry>  (first-insertion order)
//! └── validator: Validator
//! ```
//!
//! Re-ingesting an identifier replaces the whole entry in its original slot.
//! Eviction keeps the relative order of the remaining entries.

mod entry;
mod shared;

pub use entry::{CatalogEntry, EntryId, Snippet};
pub use shared::SharedCatalog;

use crate::classify::classify;
use crate::dialect::Dialect;
use crate::validate::{ValidationResult, Validator, ValidatorOptions};
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::debug;

/// Ordered store of snippets keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: IndexMap<Arc<str>, CatalogEntry>,
    validator: Validator,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog whose validator uses `options`
    pub fn with_options(options: ValidatorOptions) -> Self {
        Self {
            entries: IndexMap::new(),
            validator: Validator::with_options(options),
        }
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Classify and validate `text`, then store it under `identifier`.
    pub fn ingest(&mut self, identifier: &str, text: &str, filename_hint: &str) -> &CatalogEntry {
        self.store(Snippet::new(identifier, text, filename_hint), filename_hint)
    }

    /// Like [`Catalog::ingest`] for raw bytes; undecodable input is not text.
    pub fn ingest_bytes(&mut self, identifier: &str, bytes: &[u8], filename_hint: &str) -> &CatalogEntry {
        self.store(Snippet::from_bytes(identifier, bytes, filename_hint), filename_hint)
    }

    fn store(&mut self, snippet: Snippet, filename_hint: &str) -> &CatalogEntry {
        let dialect = classify(filename_hint, snippet.raw_text());
        let result = self.check(&snippet, dialect);
        let key: Arc<str> = snippet.identifier().into();
        let entry = CatalogEntry::new(snippet, dialect, result);
        debug!(
            identifier = %key,
            %dialect,
            valid = entry.is_valid(),
            "ingested snippet"
        );

        // `insert` on an existing key keeps its slot
        let (index, replaced) = self.entries.insert_full(key, entry);
        if replaced.is_some() {
            debug!(index, "replaced existing entry");
        }
        &self.entries[index]
    }

    /// Re-run validation for `identifier`, keeping its dialect.
    pub fn revalidate(&mut self, identifier: &str) -> Option<&CatalogEntry> {
        let entry = self.entries.get(identifier)?;
        let result = self.check(entry.snippet(), entry.dialect());
        let entry = self.entries.get_mut(identifier)?;
        if entry.result() != &result {
            debug!(identifier, valid = result.is_valid(), "validation result changed");
        }
        entry.set_result(result);
        Some(entry)
    }

    /// Remove `identifier`, returning its entry.
    pub fn evict(&mut self, identifier: &str) -> Option<CatalogEntry> {
        let entry = self.entries.shift_remove(identifier)?;
        debug!(identifier, "evicted snippet");
        Some(entry)
    }

    fn check(&self, snippet: &Snippet, dialect: Dialect) -> ValidationResult {
        match snippet.text_error() {
            Some(err) => err.clone().into(),
            None => self.validator.validate(snippet.raw_text(), dialect),
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn get(&self, identifier: &str) -> Option<&CatalogEntry> {
        self.entries.get(identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    /// Entries in first-insertion order. Each call is a fresh traversal.
    pub fn list(&self) -> impl Iterator<Item = &CatalogEntry> + '_ {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counts for reporting
    pub fn summary(&self) -> CatalogSummary {
        self.list().fold(CatalogSummary::default(), |mut summary, entry| {
            summary.record(entry);
            summary
        })
    }
}

/// Totals over a catalog's current entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub plain_script: usize,
    pub typed_superset: usize,
    pub markup_embedded: usize,
}

impl CatalogSummary {
    fn record(&mut self, entry: &CatalogEntry) {
        self.total += 1;
        if entry.is_valid() {
            self.valid += 1;
        } else {
            self.invalid += 1;
        }
        match entry.dialect() {
            Dialect::PlainScript => self.plain_script += 1,
            Dialect::TypedSuperset => self.typed_superset += 1,
            Dialect::MarkupEmbedded => self.markup_embedded += 1,
        }
    }

    /// Entries classified as `dialect`
    pub fn dialect_count(&self, dialect: Dialect) -> usize {
        match dialect {
            Dialect::PlainScript => self.plain_script,
            Dialect::TypedSuperset => self.typed_superset,
            Dialect::MarkupEmbedded => self.markup_embedded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identifiers(catalog: &Catalog) -> Vec<&str> {
        catalog.list().map(|e| e.identifier()).collect()
    }

    #[test]
    fn test_ingest_and_get() {
        let mut catalog = Catalog::new();
        let entry = catalog.ingest("greet", "function greet() {}", "greet.js");
        assert_eq!(entry.dialect(), Dialect::PlainScript);
        assert!(entry.is_valid());
        assert_eq!(entry.snippet().declared_extension(), "js");
        assert!(catalog.contains("greet"));
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_replacement_keeps_slot() {
        let mut catalog = Catalog::new();
        catalog.ingest("a", "1", "a.js");
        let old_id = catalog.ingest("b", "2", "b.js").id();
        catalog.ingest("c", "3", "c.js");

        let entry = catalog.ingest("b", "let x: number = 2;", "b.ts");
        assert_eq!(entry.dialect(), Dialect::TypedSuperset);
        assert_ne!(entry.id(), old_id);
        assert_eq!(identifiers(&catalog), ["a", "b", "c"]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_list_is_restartable() {
        let mut catalog = Catalog::new();
        catalog.ingest("x", "x", "x.js");
        catalog.ingest("y", "y", "y.js");
        let first: Vec<_> = catalog.list().map(|e| e.id()).collect();
        let second: Vec<_> = catalog.list().map(|e| e.id()).collect();
        assert_eq!(first, second);
        assert_eq!(catalog.list().count(), 2);
    }

    #[test]
    fn test_evict_preserves_order() {
        let mut catalog = Catalog::new();
        for name in ["one", "two", "three", "four"] {
            catalog.ingest(name, "", "snippet.js");
        }
        let evicted = catalog.evict("two").map(|e| e.identifier().to_string());
        assert_eq!(evicted.as_deref(), Some("two"));
        assert_eq!(identifiers(&catalog), ["one", "three", "four"]);
        assert!(catalog.evict("two").is_none());
    }

    #[test]
    fn test_revalidate() {
        let mut catalog = Catalog::with_options(ValidatorOptions::default().with_max_depth(8));
        let text = "x = [[[[[[[[[[1]]]]]]]]]];";
        assert!(!catalog.ingest("deep", text, "deep.js").is_valid());
        assert!(catalog.revalidate("missing").is_none());

        let entry = catalog.revalidate("deep").map(|e| (e.dialect(), e.result().reason().map(String::from)));
        assert_eq!(entry, Some((Dialect::PlainScript, Some("nesting too deep".to_string()))));
    }

    #[test]
    fn test_ingest_bytes() {
        let mut catalog = Catalog::new();
        let entry = catalog.ingest_bytes("bin", b"\x89PNG\r\n\x1a\n", "logo.png");
        assert_eq!(entry.result(), &ValidationResult::not_text());
        // Lossy text is never re-checked as if it were the original input
        let entry = catalog.revalidate("bin").map(|e| e.result().clone());
        assert_eq!(entry, Some(ValidationResult::not_text()));

        let entry = catalog.ingest_bytes("ok", b"let ok = true;", "ok.mjs");
        assert!(entry.is_valid());
    }

    #[test]
    fn test_summary() {
        let mut catalog = Catalog::new();
        catalog.ingest("a", "let a = 1;", "a.js");
        catalog.ingest("b", "let b: = 1;", "b.ts");
        catalog.ingest("c", "<p>{c}</p>", "c.tsx");
        let summary = catalog.summary();
        assert_eq!(summary.total, 3);
        assert_eq!((summary.valid, summary.invalid), (2, 1));
        assert_eq!(summary.dialect_count(Dialect::TypedSuperset), 1);
        assert_eq!(summary.dialect_count(Dialect::MarkupEmbedded), 1);
    }
}
