//! Syntax validation
//!
//! Runs the parser under a dialect's grammar and reduces the outcome to a
//! [`ValidationResult`]: `Valid`, or `Invalid` with the first syntax error's
//! message and its 1-indexed line/column. Binary input is rejected before
//! parsing with the reason [`NOT_TEXT`].

use crate::base::{LineIndex, Position};
use crate::dialect::Dialect;
use crate::parser::{self, DEFAULT_MAX_DEPTH, GrammarFlags, Parse, SyntaxError};
use crate::text::{self, TextError};
use tracing::trace;

/// Reason reported for binary or undecodable input
pub const NOT_TEXT: &str = "not text";

/// Outcome of validating one snippet
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "status", rename_all = "snake_case")
)]
pub enum ValidationResult {
    Valid,
    Invalid {
        reason: String,
        position: Option<Position>,
    },
}

impl ValidationResult {
    pub fn invalid(reason: impl Into<String>, position: Option<Position>) -> Self {
        Self::Invalid {
            reason: reason.into(),
            position,
        }
    }

    pub fn not_text() -> Self {
        Self::invalid(NOT_TEXT, None)
    }

    /// Result for the first syntax error of a parse of `text`
    pub fn from_syntax_error(text: &str, error: &SyntaxError) -> Self {
        let line_col = LineIndex::new(text).line_col(error.offset());
        Self::invalid(error.message.clone(), Some(Position::from(line_col)))
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid { reason, .. } => Some(reason),
        }
    }

    pub fn position(&self) -> Option<Position> {
        match self {
            Self::Valid => None,
            Self::Invalid { position, .. } => *position,
        }
    }
}

impl From<TextError> for ValidationResult {
    fn from(_: TextError) -> Self {
        Self::not_text()
    }
}

impl std::fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Valid => f.write_str("valid"),
            Self::Invalid {
                reason,
                position: Some(position),
            } => write!(f, "invalid at {position}: {reason}"),
            Self::Invalid { reason, .. } => write!(f, "invalid: {reason}"),
        }
    }
}

// =============================================================================
// Validator
// =============================================================================

/// Settings applied on top of each dialect's grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorOptions {
    /// Nesting depth at which input is rejected as too deep
    pub max_depth: usize,
    /// Accept `@decorator` syntax
    pub decorators: bool,
    /// Accept a `#!` line at the start of the text
    pub hashbang: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            decorators: true,
            hashbang: true,
        }
    }
}

impl ValidatorOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_decorators(mut self, enabled: bool) -> Self {
        self.decorators = enabled;
        self
    }

    pub fn with_hashbang(mut self, enabled: bool) -> Self {
        self.hashbang = enabled;
        self
    }

    /// The grammar used for `dialect` under these options
    pub fn grammar(&self, dialect: Dialect) -> GrammarFlags {
        dialect
            .grammar()
            .with_max_depth(self.max_depth)
            .with_decorators(self.decorators)
            .with_hashbang(self.hashbang)
    }
}

/// Checks snippets for syntactic validity. Stateless apart from its options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    options: ValidatorOptions,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ValidatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    /// Validate `text` under `dialect`
    pub fn validate(&self, text: &str, dialect: Dialect) -> ValidationResult {
        if let Err(err) = text::check_text(text) {
            trace!(%err, "rejected input");
            return err.into();
        }
        let parse = self.parse(text, dialect);
        match parse.first_error() {
            None => ValidationResult::Valid,
            Some(error) => ValidationResult::from_syntax_error(text, error),
        }
    }

    /// Validate raw bytes; undecodable input is not text
    pub fn validate_bytes(&self, bytes: &[u8], dialect: Dialect) -> ValidationResult {
        match text::decode(bytes) {
            Ok(text) => self.validate(text, dialect),
            Err(err) => {
                trace!(%err, "rejected input");
                err.into()
            }
        }
    }

    /// Full parse of `text`, with the CST and every error
    pub fn parse(&self, text: &str, dialect: Dialect) -> Parse {
        parser::parse(text, self.options.grammar(dialect))
    }
}

/// Validate `text` under `dialect` with default options
pub fn validate(text: &str, dialect: Dialect) -> ValidationResult {
    Validator::new().validate(text, dialect)
}

/// Validate raw bytes under `dialect` with default options
pub fn validate_bytes(bytes: &[u8], dialect: Dialect) -> ValidationResult {
    Validator::new().validate_bytes(bytes, dialect)
}

/// Parse `text` under `dialect` with default options
pub fn parse(text: &str, dialect: Dialect) -> Parse {
    Validator::new().parse(text, dialect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   \n\t  ")]
    #[case("// just a comment\n/* and another */")]
    fn test_empty_is_valid(#[case] text: &str) {
        for dialect in Dialect::ALL {
            assert_eq!(validate(text, dialect), ValidationResult::Valid);
        }
    }

    #[test]
    fn test_not_text() {
        let result = validate("\x00\x01binary", Dialect::PlainScript);
        assert_eq!(result, ValidationResult::invalid("not text", None));
        assert_eq!(validate_bytes(b"const a = \xc3;", Dialect::TypedSuperset), result);
    }

    #[test]
    fn test_bytes_that_decode_are_parsed() {
        assert!(validate_bytes("let s = 'naïve';".as_bytes(), Dialect::PlainScript).is_valid());
    }

    #[test]
    fn test_malformed_parameter_list() {
        let result = validate("function f(: number {", Dialect::TypedSuperset);
        assert_eq!(result.reason(), Some("expected a parameter name, found ':'"));
        assert_eq!(result.position(), Some(Position::new(1, 12)));
    }

    #[test]
    fn test_position_on_later_line() {
        let result = validate("let a = 1;\nlet b = ;", Dialect::PlainScript);
        assert_eq!(result.position(), Some(Position::new(2, 9)));
    }

    #[test]
    fn test_position_counts_characters() {
        let result = validate("const é = ;", Dialect::PlainScript);
        assert_eq!(result.position(), Some(Position::new(1, 11)));
    }

    #[rstest]
    #[case("let x: number = 1;")]
    #[case("interface A { b: string }")]
    #[case("const n = value!;")]
    fn test_type_syntax_needs_typed_dialect(#[case] text: &str) {
        assert!(!validate(text, Dialect::PlainScript).is_valid());
        assert!(validate(text, Dialect::TypedSuperset).is_valid());
        assert!(validate(text, Dialect::MarkupEmbedded).is_valid());
    }

    #[test]
    fn test_angle_assertion_is_typed_only() {
        let text = "const n = <number>value;";
        assert!(validate(text, Dialect::TypedSuperset).is_valid());
        assert!(!validate(text, Dialect::MarkupEmbedded).is_valid());
    }

    #[test]
    fn test_nesting_limit_option() {
        let text = format!("x = {}1{};", "[".repeat(80), "]".repeat(80));
        let shallow = Validator::with_options(ValidatorOptions::default().with_max_depth(40));
        let result = shallow.validate(&text, Dialect::PlainScript);
        assert_eq!(result.reason(), Some("nesting too deep"));
        assert!(validate(&text, Dialect::PlainScript).is_valid());
    }

    #[test]
    fn test_decorator_option() {
        let text = "@sealed class A {}";
        assert!(validate(text, Dialect::TypedSuperset).is_valid());
        let strict = Validator::with_options(ValidatorOptions::default().with_decorators(false));
        assert!(!strict.validate(text, Dialect::TypedSuperset).is_valid());
    }

    #[test]
    fn test_deterministic() {
        let text = "if (a) { b(); } else c(";
        assert_eq!(validate(text, Dialect::PlainScript), validate(text, Dialect::PlainScript));
    }

    #[test]
    fn test_parse_exposes_tree() {
        let parse = parse("export const a = 1;", Dialect::PlainScript);
        assert!(parse.ok());
        assert!(parse.is_module());
        assert_eq!(parse.syntax().to_string(), "export const a = 1;");
    }

    #[test]
    fn test_display() {
        assert_eq!(ValidationResult::Valid.to_string(), "valid");
        let result = ValidationResult::invalid("expected ';', found 'b'", Some(Position::new(3, 4)));
        assert_eq!(result.to_string(), "invalid at 3:4: expected ';', found 'b'");
        assert_eq!(ValidationResult::not_text().to_string(), "invalid: not text");
    }
}
