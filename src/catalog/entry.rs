//! Catalog records: snippets and the entries that own them.

use crate::classify;
use crate::dialect::Dialect;
use crate::text::{self, TextError};
use crate::validate::ValidationResult;
use std::sync::Arc;
use uuid::Uuid;

// ============================================================================
// IDs
// ============================================================================

/// Identity of one ingestion. A replaced entry gets a fresh id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Generate a new random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// SNIPPET
// ============================================================================

/// One unit of source text plus its identifying metadata. Immutable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snippet {
    identifier: Arc<str>,
    raw_text: Arc<str>,
    declared_extension: Arc<str>,
    /// Set when the snippet was ingested from bytes that are not text
    text_error: Option<TextError>,
}

impl Snippet {
    /// Create a snippet; the extension is taken from `filename_hint`.
    pub fn new(identifier: impl Into<Arc<str>>, raw_text: impl Into<Arc<str>>, filename_hint: &str) -> Self {
        Self {
            identifier: identifier.into(),
            raw_text: raw_text.into(),
            declared_extension: classify::extension(filename_hint).into(),
            text_error: None,
        }
    }

    /// Create a snippet from raw bytes. Undecodable input is kept lossily
    /// and remembered as not being text.
    pub fn from_bytes(identifier: impl Into<Arc<str>>, bytes: &[u8], filename_hint: &str) -> Self {
        match text::decode(bytes) {
            Ok(raw_text) => Self::new(identifier, raw_text, filename_hint),
            Err(err) => Self {
                text_error: Some(err),
                ..Self::new(identifier, String::from_utf8_lossy(bytes), filename_hint)
            },
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Lowercase extension of the filename hint, empty when it had none
    pub fn declared_extension(&self) -> &str {
        &self.declared_extension
    }

    /// Why the ingested bytes were rejected, if they were
    pub fn text_error(&self) -> Option<&TextError> {
        self.text_error.as_ref()
    }
}

// ============================================================================
// ENTRY
// ============================================================================

/// A snippet with its dialect and latest validation outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    id: EntryId,
    snippet: Snippet,
    dialect: Dialect,
    result: ValidationResult,
}

impl CatalogEntry {
    pub(crate) fn new(snippet: Snippet, dialect: Dialect, result: ValidationResult) -> Self {
        Self {
            id: EntryId::generate(),
            snippet,
            dialect,
            result,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn identifier(&self) -> &str {
        self.snippet.identifier()
    }

    pub fn snippet(&self) -> &Snippet {
        &self.snippet
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn result(&self) -> &ValidationResult {
        &self.result
    }

    pub fn is_valid(&self) -> bool {
        self.result.is_valid()
    }

    pub(crate) fn set_result(&mut self, result: ValidationResult) {
        self.result = result;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_extension() {
        let snippet = Snippet::new("card", "<div />", "components/Card.TSX");
        assert_eq!(snippet.identifier(), "card");
        assert_eq!(snippet.raw_text(), "<div />");
        assert_eq!(snippet.declared_extension(), "tsx");
        assert_eq!(Snippet::new("x", "", "README").declared_extension(), "");
    }

    #[test]
    fn test_snippet_from_bytes() {
        let snippet = Snippet::from_bytes("ok", b"let a = 1;", "ok.js");
        assert_eq!(snippet.raw_text(), "let a = 1;");
        assert_eq!(snippet.text_error(), None);

        let snippet = Snippet::from_bytes("bad", b"let \xff = 1;", "bad.js");
        assert_eq!(snippet.raw_text(), "let \u{FFFD} = 1;");
        assert_eq!(snippet.text_error(), Some(&TextError::Utf8 { valid_up_to: 4 }));
    }

    #[test]
    fn test_entry_ids_are_unique() {
        let snippet = Snippet::new("a", "1", "a.js");
        let first = CatalogEntry::new(snippet.clone(), Dialect::PlainScript, ValidationResult::Valid);
        let second = CatalogEntry::new(snippet, Dialect::PlainScript, ValidationResult::Valid);
        assert_ne!(first.id(), second.id());
        assert_eq!(first.snippet(), second.snippet());
    }
}
