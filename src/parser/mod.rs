//! Rowan-based parser for the JavaScript family
//!
//! This module provides a lossless parser using:
//! - **logos** for fast lexing
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! This is the rust-analyzer approach: we build a lossless CST that preserves
//! all whitespace and comments. Which optional syntax (type annotations,
//! embedded markup, decorators) is accepted is chosen per parse through
//! [`GrammarFlags`].
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind, relexed on demand
//!     ↓
//! Parser → GreenNode tree (immutable, cheap to clone)
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//! ```
//!
//! The parser stops at the first syntax error: everything after the failing
//! token is kept verbatim in a trailing `ERROR` node, so the tree still
//! round-trips the input text.

mod errors;
pub mod grammar;
mod lexer;
#[allow(clippy::module_inception)]
mod parser;
mod syntax_kind;

pub use errors::{ErrorCode, RelatedInfo, SyntaxError};
pub use grammar::{Context, DEFAULT_MAX_DEPTH, GrammarFlags};
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{Parse, parse};
pub use syntax_kind::{
    ScriptLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxNodeChildren, SyntaxToken,
    kind_to_name,
};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
