//! Foundation types for the snippet toolchain.
//!
//! This module provides the position types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//! - [`Position`] - 1-indexed line/column positions for reports
//!
//! This module has NO dependencies on other jsnip modules.

mod position;
mod span;

pub use position::Position;
pub use span::{LineCol, LineIndex, TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
