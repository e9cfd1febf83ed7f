//! Error code definitions for parser diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (invalid tokens)
//! - E02xx: Structural errors (braces, semicolons)
//! - E03xx: Declaration errors (bindings, functions, classes)
//! - E04xx: Expression errors
//! - E05xx: Import/export errors
//! - E06xx: Type annotation errors
//! - E07xx: Embedded markup errors
//! - E09xx: Generic/fallback errors and limits

use std::fmt;

/// Error codes for parser diagnostics
///
/// Each error code represents a specific category of parse error,
/// enabling filtering and documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors (invalid tokens)
    // =========================================================================
    /// Invalid or unexpected character in source
    E0101,
    /// Unterminated string literal
    E0102,
    /// Unterminated block comment
    E0103,
    /// Unterminated template literal
    E0104,
    /// Unterminated regular expression literal
    E0105,

    // =========================================================================
    // E02xx: Structural errors (braces, semicolons, delimiters)
    // =========================================================================
    /// Missing semicolon
    E0201,
    /// Unclosed brace `{`
    E0202,
    /// Unclosed parenthesis `(`
    E0203,
    /// Unclosed bracket `[`
    E0204,
    /// Token cannot start a statement
    E0205,

    // =========================================================================
    // E03xx: Declaration errors
    // =========================================================================
    /// Missing binding or declaration name
    E0301,
    /// `const` declaration without an initializer
    E0302,
    /// Invalid class member
    E0303,
    /// Missing function body
    E0304,
    /// Invalid parameter
    E0305,

    // =========================================================================
    // E04xx: Expression errors
    // =========================================================================
    /// Missing expression where expected
    E0401,
    /// Illegal line break
    E0402,
    /// Arrow-only syntax outside an arrow parameter list
    E0403,
    /// Unterminated template substitution
    E0404,
    /// Statement not allowed in this context (e.g. `return` at top level)
    E0405,

    // =========================================================================
    // E05xx: Import/export errors
    // =========================================================================
    /// Missing module specifier string
    E0501,
    /// `import`/`export` outside the top level
    E0502,
    /// Invalid import or export clause
    E0503,

    // =========================================================================
    // E06xx: Type annotation errors
    // =========================================================================
    /// Missing type where expected
    E0601,
    /// Unclosed type argument or parameter list
    E0602,
    /// Invalid member in an interface or type literal
    E0603,

    // =========================================================================
    // E07xx: Embedded markup errors
    // =========================================================================
    /// Closing tag does not match the opening tag
    E0701,
    /// Element never closed
    E0702,
    /// Invalid attribute
    E0703,

    // =========================================================================
    // E09xx: Generic/fallback errors
    // =========================================================================
    /// Unexpected token in current context
    E0901,
    /// Expected a specific token
    E0902,
    /// Nesting limit exceeded
    E0903,
    /// Internal parser error
    E0999,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexical
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0103 => "E0103",
            Self::E0104 => "E0104",
            Self::E0105 => "E0105",
            // Structural
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0204 => "E0204",
            Self::E0205 => "E0205",
            // Declaration
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0303 => "E0303",
            Self::E0304 => "E0304",
            Self::E0305 => "E0305",
            // Expression
            Self::E0401 => "E0401",
            Self::E0402 => "E0402",
            Self::E0403 => "E0403",
            Self::E0404 => "E0404",
            Self::E0405 => "E0405",
            // Module
            Self::E0501 => "E0501",
            Self::E0502 => "E0502",
            Self::E0503 => "E0503",
            // Types
            Self::E0601 => "E0601",
            Self::E0602 => "E0602",
            Self::E0603 => "E0603",
            // Markup
            Self::E0701 => "E0701",
            Self::E0702 => "E0702",
            Self::E0703 => "E0703",
            // Generic
            Self::E0901 => "E0901",
            Self::E0902 => "E0902",
            Self::E0903 => "E0903",
            Self::E0999 => "E0999",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 | Self::E0102 | Self::E0103 | Self::E0104 | Self::E0105 => "lexical error",
            Self::E0201 | Self::E0202 | Self::E0203 | Self::E0204 | Self::E0205 => "structural error",
            Self::E0301 | Self::E0302 | Self::E0303 | Self::E0304 | Self::E0305 => "declaration error",
            Self::E0401 | Self::E0402 | Self::E0403 | Self::E0404 | Self::E0405 => "expression error",
            Self::E0501 | Self::E0502 | Self::E0503 => "module error",
            Self::E0601 | Self::E0602 | Self::E0603 => "type error",
            Self::E0701 | Self::E0702 | Self::E0703 => "markup error",
            Self::E0901 | Self::E0902 | Self::E0903 | Self::E0999 => "syntax error",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            // Lexical
            Self::E0101 => "invalid character",
            Self::E0102 => "unterminated string literal",
            Self::E0103 => "unterminated block comment",
            Self::E0104 => "unterminated template literal",
            Self::E0105 => "unterminated regular expression literal",
            // Structural
            Self::E0201 => "missing semicolon",
            Self::E0202 => "unclosed brace",
            Self::E0203 => "unclosed parenthesis",
            Self::E0204 => "unclosed bracket",
            Self::E0205 => "unexpected token at start of statement",
            // Declaration
            Self::E0301 => "missing identifier",
            Self::E0302 => "missing initializer in const declaration",
            Self::E0303 => "invalid class member",
            Self::E0304 => "missing function body",
            Self::E0305 => "invalid parameter",
            // Expression
            Self::E0401 => "expected expression",
            Self::E0402 => "illegal line break",
            Self::E0403 => "arrow parameter syntax outside an arrow function",
            Self::E0404 => "unterminated template substitution",
            Self::E0405 => "statement not allowed here",
            // Module
            Self::E0501 => "missing module specifier",
            Self::E0502 => "import or export outside the top level",
            Self::E0503 => "invalid import or export clause",
            // Types
            Self::E0601 => "expected type",
            Self::E0602 => "unclosed type argument list",
            Self::E0603 => "invalid type member",
            // Markup
            Self::E0701 => "mismatched closing tag",
            Self::E0702 => "unclosed element",
            Self::E0703 => "invalid attribute",
            // Generic
            Self::E0901 => "unexpected token",
            Self::E0902 => "expected token",
            Self::E0903 => "nesting too deep",
            Self::E0999 => "internal parser error",
        }
    }

    /// Check if this is a structural error (delimiter-related)
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::E0201 | Self::E0202 | Self::E0203 | Self::E0204 | Self::E0205
        )
    }

    /// Check if this is a lexical error (raised before grammar rules apply)
    pub fn is_lexical(&self) -> bool {
        matches!(
            self,
            Self::E0101 | Self::E0102 | Self::E0103 | Self::E0104 | Self::E0105
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_as_str() {
        assert_eq!(ErrorCode::E0201.as_str(), "E0201");
        assert_eq!(ErrorCode::E0903.as_str(), "E0903");
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(format!("{}", ErrorCode::E0701), "E0701");
    }

    #[test]
    fn test_error_code_default_message() {
        assert_eq!(ErrorCode::E0201.default_message(), "missing semicolon");
        assert_eq!(ErrorCode::E0903.default_message(), "nesting too deep");
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::E0102.category_description(), "lexical error");
        assert_eq!(ErrorCode::E0305.category_description(), "declaration error");
        assert_eq!(ErrorCode::E0601.category_description(), "type error");
        assert_eq!(ErrorCode::E0701.category_description(), "markup error");
    }

    #[test]
    fn test_is_structural_and_lexical() {
        assert!(ErrorCode::E0202.is_structural());
        assert!(!ErrorCode::E0301.is_structural());
        assert!(ErrorCode::E0105.is_lexical());
        assert!(!ErrorCode::E0401.is_lexical());
    }
}
