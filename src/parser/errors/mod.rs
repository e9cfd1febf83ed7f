//! Parser error handling module
//!
//! This module provides error reporting for the JavaScript-family parser:
//! - Categorized error codes for filtering and documentation
//! - `expected X, found Y` messages anchored at the offending token
//! - Hints and related spans (e.g. the opening tag of a mismatched element)

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::{RelatedInfo, SyntaxError};
