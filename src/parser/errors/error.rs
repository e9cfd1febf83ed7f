//! Syntax error types
//!
//! A [`SyntaxError`] carries:
//! - a human-readable message (`expected X, found Y`)
//! - the source range of the offending token
//! - an [`ErrorCode`] for categorization
//! - an optional hint and related locations (e.g. the opening tag of a
//!   mismatched JSX element)

use rowan::{TextRange, TextSize};

use super::codes::ErrorCode;

/// Related location information for an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    /// Description of this related location
    pub message: String,
    /// Source range
    pub range: TextRange,
}

impl RelatedInfo {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// A syntax error found while parsing a snippet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Human-readable error message
    pub message: String,
    /// Source location
    pub range: TextRange,
    /// Categorized error code
    pub code: ErrorCode,
    /// Optional suggestion for fixing the error
    pub hint: Option<String>,
    /// Related source locations
    pub related: Vec<RelatedInfo>,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            range,
            code,
            hint: None,
            related: vec![],
        }
    }

    /// Create an error at a specific offset with zero-width range
    pub fn at_offset(message: impl Into<String>, offset: TextSize, code: ErrorCode) -> Self {
        Self::new(message, TextRange::empty(offset), code)
    }

    /// Create an error using the code's default message
    pub fn from_code(code: ErrorCode, range: TextRange) -> Self {
        Self::new(code.default_message(), range, code)
    }

    /// Create an `expected {what}, found {found}` error.
    ///
    /// `found` is the offending token text, or `None` at end of input.
    pub fn expected(what: &str, found: Option<&str>, range: TextRange, code: ErrorCode) -> Self {
        let message = match found {
            Some(text) => format!("expected {what}, found '{}'", abbreviate(text)),
            None => format!("expected {what}, found end of input"),
        };
        Self::new(message, range, code)
    }

    /// Add a hint to this error
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Add related information
    pub fn with_related(mut self, info: RelatedInfo) -> Self {
        self.related.push(info);
        self
    }

    pub fn has_hint(&self) -> bool {
        self.hint.is_some()
    }

    pub fn has_related(&self) -> bool {
        !self.related.is_empty()
    }

    /// Byte offset where the error starts
    pub fn offset(&self) -> TextSize {
        self.range.start()
    }

    /// Format the error for display
    pub fn format(&self) -> String {
        let mut result = format!("{}: {}", self.code, self.message);
        if let Some(hint) = &self.hint {
            result.push_str(&format!("\n  hint: {}", hint));
        }
        result
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for SyntaxError {}

/// Long tokens (template chunks, JSX text) are cut so messages stay on one line
fn abbreviate(text: &str) -> String {
    const MAX_CHARS: usize = 24;
    let first_line = text.lines().next().unwrap_or("");
    let mut out: String = first_line.chars().take(MAX_CHARS).collect();
    if out.len() < text.len() {
        out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_new() {
        let err = SyntaxError::new(
            "expected ';'",
            TextRange::new(TextSize::new(10), TextSize::new(11)),
            ErrorCode::E0201,
        );

        assert_eq!(err.message, "expected ';'");
        assert_eq!(err.code, ErrorCode::E0201);
        assert_eq!(err.offset(), TextSize::new(10));
        assert!(err.hint.is_none());
        assert!(err.related.is_empty());
    }

    #[test]
    fn test_expected_found_token() {
        let err = SyntaxError::expected(
            "a parameter name",
            Some(":"),
            TextRange::at(TextSize::new(11), TextSize::new(1)),
            ErrorCode::E0305,
        );
        assert_eq!(err.message, "expected a parameter name, found ':'");
    }

    #[test]
    fn test_expected_found_end_of_input() {
        let err = SyntaxError::expected("'}'", None, TextRange::empty(TextSize::new(3)), ErrorCode::E0202);
        assert_eq!(err.message, "expected '}', found end of input");
        assert_eq!(err.to_string(), err.message);
    }

    #[test]
    fn test_long_token_is_abbreviated() {
        let err = SyntaxError::expected(
            "';'",
            Some("`a very long template literal that keeps going`"),
            TextRange::empty(TextSize::new(0)),
            ErrorCode::E0201,
        );
        assert!(err.message.ends_with("...'"));
    }

    #[test]
    fn test_syntax_error_with_hint_and_related() {
        let err = SyntaxError::from_code(ErrorCode::E0701, TextRange::empty(TextSize::new(20)))
            .with_hint("close the element with </div>")
            .with_related(RelatedInfo::new(
                "opening tag here",
                TextRange::new(TextSize::new(0), TextSize::new(5)),
            ));

        assert_eq!(err.message, "mismatched closing tag");
        assert!(err.has_hint());
        assert!(err.has_related());
        assert_eq!(err.related[0].message, "opening tag here");
    }

    #[test]
    fn test_format_error() {
        let err = SyntaxError::at_offset("expected ';'", TextSize::new(10), ErrorCode::E0201)
            .with_hint("add semicolon");

        let formatted = err.format();
        assert!(formatted.contains("E0201"));
        assert!(formatted.contains("expected ';'"));
        assert!(formatted.contains("hint"));
        assert!(formatted.contains("add semicolon"));
    }
}
