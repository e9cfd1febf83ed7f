//! # jsnip-base
//!
//! Dialect-aware catalog and syntax validator for snippets of the
//! JavaScript family: plain scripts, the typed superset, and components
//! with embedded markup.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! catalog   → Ordered snippet store, SharedCatalog for concurrent hosts
//!   ↓
//! validate  → ValidationResult from a parse under a dialect's grammar
//! classify  → Dialect from filename extension or content sniffing
//!   ↓
//! dialect   → Closed set of grammar variants
//! text      → Binary/UTF-8 screening
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, rowan CST
//!   ↓
//! base      → Primitives (TextRange, LineIndex, Position)
//! ```
//!
//! ## Example
//!
//! ```
//! use jsnip::{Catalog, Dialect, ValidationResult};
//!
//! let mut catalog = Catalog::new();
//! let entry = catalog.ingest("card.tsx", "<div>{x}</div>", "card.tsx");
//! assert_eq!(entry.dialect(), Dialect::MarkupEmbedded);
//! assert_eq!(entry.result(), &ValidationResult::Valid);
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → dialect → classify/validate → catalog)
// ============================================================================

/// Foundation types: TextRange, LineIndex, Position
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, grammar trait
pub mod parser;

/// Grammar variants and their parser configuration
pub mod dialect;

/// Input screening for binary and undecodable content
pub mod text;

/// Dialect classification by extension and content
pub mod classify;

/// Syntax validation under a dialect's grammar
pub mod validate;

/// In-memory snippet catalog
pub mod catalog;

/// Reference snippets for each dialect
pub mod samples;

// Re-export commonly needed items
pub use base::{LineCol, LineIndex, Position, TextRange, TextSize};
pub use catalog::{Catalog, CatalogEntry, CatalogSummary, EntryId, SharedCatalog, Snippet};
pub use classify::classify;
pub use dialect::Dialect;
pub use text::TextError;
pub use validate::{NOT_TEXT, ValidationResult, Validator, ValidatorOptions, validate, validate_bytes};
