//! Grammar modules for the JavaScript family
//!
//! This module contains the parsing logic organized by construct:
//! - `statements` - Statements, blocks and automatic semicolon insertion
//! - `declarations` - Functions, classes, variables, patterns, import/export
//!   and the typed declarations (interfaces, aliases, enums, namespaces)
//! - `expressions` - Expression precedence chain, arrows, templates
//! - `types` - Type annotations for the typed superset
//! - `jsx` - Embedded markup (elements, fragments, attributes)
//!
//! The parsing functions are generic over the [`ScriptParser`] trait so they
//! can be used with any parser implementation. Which optional syntax is
//! accepted is decided by [`GrammarFlags`].

mod declarations;
mod expressions;
mod jsx;
mod statements;
mod types;

pub(super) use crate::parser::errors::{ErrorCode, SyntaxError};
pub(super) use crate::parser::syntax_kind::SyntaxKind;
use rowan::{Checkpoint, TextRange};

pub use self::statements::parse_source_file;

/// Default nesting limit for statements, expressions, types and elements
pub const DEFAULT_MAX_DEPTH: usize = 256;

// =============================================================================
// Grammar configuration
// =============================================================================

/// Optional syntax accepted by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GrammarFlags {
    /// Type annotations and the typed declarations
    pub types: bool,
    /// Tags in expression position
    pub markup: bool,
    /// `@decorator` syntax on classes and class members
    pub decorators: bool,
    /// A `#!` line at the very start of the text
    pub hashbang: bool,
    /// Nesting limit before the parser gives up
    pub max_depth: usize,
}

impl GrammarFlags {
    /// Plain scripts: no type syntax, no markup
    pub fn plain() -> Self {
        Self {
            types: false,
            markup: false,
            decorators: true,
            hashbang: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// The typed superset
    pub fn typed() -> Self {
        Self {
            types: true,
            ..Self::plain()
        }
    }

    /// Typed superset with embedded markup
    pub fn markup() -> Self {
        Self {
            types: true,
            markup: true,
            ..Self::plain()
        }
    }

    pub fn with_decorators(mut self, enabled: bool) -> Self {
        self.decorators = enabled;
        self
    }

    pub fn with_hashbang(mut self, enabled: bool) -> Self {
        self.hashbang = enabled;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// `<T>expr` assertions collide with tags, so only the markup-free typed
    /// grammar accepts them
    pub fn angle_assertions(&self) -> bool {
        self.types && !self.markup
    }
}

impl Default for GrammarFlags {
    fn default() -> Self {
        Self::plain()
    }
}

/// Where the parser currently is, for context-dependent rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Context {
    pub in_function: bool,
    pub in_async: bool,
    pub in_generator: bool,
    pub in_iteration: bool,
    pub in_switch: bool,
    /// Inside a `for (... in ...)` head, where `in` is not a binary operator
    pub no_in: bool,
    /// Module items (`import`/`export`) are allowed
    pub top_level: bool,
    /// Inside `declare`, where bodies and initializers may be omitted
    pub ambient: bool,
    /// In the `?` branch of a conditional, where `(a): T => b` is only an
    /// arrow when the conditional's `:` follows its body
    pub in_consequent: bool,
}

impl Context {
    pub fn top_level() -> Self {
        Self {
            top_level: true,
            ..Self::default()
        }
    }

    /// Context for a function body
    pub fn function(self, is_async: bool, is_generator: bool) -> Self {
        Self {
            in_function: true,
            in_async: is_async,
            in_generator: is_generator,
            in_iteration: false,
            in_switch: false,
            no_in: false,
            top_level: false,
            ambient: self.ambient,
            in_consequent: false,
        }
    }

    /// Context for a nested block
    pub fn block(self) -> Self {
        Self {
            top_level: false,
            no_in: false,
            in_consequent: false,
            ..self
        }
    }

    pub fn with_no_in(self, no_in: bool) -> Self {
        Self { no_in, ..self }
    }
}

// =============================================================================
// ScriptParser trait
// =============================================================================

/// Trait for parsing operations
///
/// This trait defines the interface between the grammar functions and the
/// main parser. The main parser implements this trait to provide token
/// access, relexing and tree building.
///
/// After a syntax error has been recorded the parser behaves as if input
/// were exhausted, so every grammar function unwinds without consuming more.
pub trait ScriptParser {
    // Configuration
    fn flags(&self) -> GrammarFlags;
    fn context(&self) -> Context;
    fn set_context(&mut self, ctx: Context);

    // Token inspection (trivia is skipped)
    fn current(&self) -> SyntaxKind;
    fn current_text(&self) -> &str;
    fn current_range(&self) -> TextRange;

    /// Peek at the kind of the nth significant token ahead
    fn nth(&mut self, n: usize) -> SyntaxKind;
    fn nth_text(&mut self, n: usize) -> &str;

    /// Kind of the nth raw token after the current one, trivia included.
    /// Used to join adjacent punctuation such as `>` `>` `=`.
    fn glued(&mut self, n: usize) -> SyntaxKind;

    /// Whether a line terminator separates the current token from the previous one
    fn has_line_break_before(&self) -> bool;
    fn nth_has_line_break_before(&mut self, n: usize) -> bool;

    // Position tracking
    fn get_pos(&self) -> usize;

    // Token consumption
    fn bump(&mut self);
    /// Consume the current token without consuming the trivia after it
    fn bump_raw(&mut self);
    /// Consume `n` adjacent tokens as a single token of `kind`
    fn bump_joined(&mut self, n: usize, kind: SyntaxKind);
    fn skip_trivia(&mut self);

    // Context-dependent lexing
    fn relex_regex(&mut self);
    fn relex_template_continuation(&mut self);
    /// Scan markup text at the current position; returns whether any was consumed
    fn relex_jsx_child_text(&mut self) -> bool;
    fn relex_jsx_string(&mut self);

    // Node building
    fn start_node(&mut self, kind: SyntaxKind);
    fn finish_node(&mut self);
    fn checkpoint(&self) -> Checkpoint;
    fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind);

    // Errors
    fn error(&mut self, error: SyntaxError);
    /// Record `expected {what}, found {current token}`
    fn error_expected(&mut self, what: &str, code: ErrorCode);
    fn has_failed(&self) -> bool;
    /// Wrap whatever input is left after a failure into an ERROR node
    fn recover_remaining(&mut self);

    // Nesting guard
    fn enter(&mut self) -> bool;
    fn exit(&mut self);

    // -----------------------------------------------------------------
    // Provided helpers
    // -----------------------------------------------------------------

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        kinds.contains(&self.current())
    }

    fn at_eof(&self) -> bool {
        self.current() == SyntaxKind::EOF
    }

    /// At an identifier spelled `word` (contextual keywords are identifiers)
    fn at_contextual(&self, word: &str) -> bool {
        self.at(SyntaxKind::IDENT) && self.current_text() == word
    }

    fn nth_at(&mut self, n: usize, kind: SyntaxKind) -> bool {
        self.nth(n) == kind
    }

    fn nth_contextual(&mut self, n: usize, word: &str) -> bool {
        self.nth(n) == SyntaxKind::IDENT && self.nth_text(n) == word
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn eat_contextual(&mut self, word: &str) -> bool {
        if self.at_contextual(word) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            return true;
        }
        self.error_expected(&quoted(kind), expected_code(kind));
        false
    }
}

// =============================================================================
// Helper functions shared by the submodules
// =============================================================================

/// Run `f` under `ctx`, restoring the previous context afterwards
pub(super) fn with_context<P: ScriptParser, R>(
    p: &mut P,
    ctx: Context,
    f: impl FnOnce(&mut P) -> R,
) -> R {
    let saved = p.context();
    p.set_context(ctx);
    let result = f(p);
    p.set_context(saved);
    result
}

/// Automatic semicolon insertion: a statement ends at `;`, before `}`, at
/// end of input, or before a token on a new line
pub(super) fn consume_semicolon<P: ScriptParser>(p: &mut P) {
    if p.eat(SyntaxKind::SEMICOLON) || p.at(SyntaxKind::R_BRACE) || p.at_eof() {
        return;
    }
    if p.has_line_break_before() {
        return;
    }
    p.error_expected("';'", ErrorCode::E0201);
}

/// Whether the current token can end a statement without an explicit `;`
pub(super) fn at_statement_end<P: ScriptParser>(p: &P) -> bool {
    p.at(SyntaxKind::SEMICOLON) || p.at(SyntaxKind::R_BRACE) || p.at_eof() || p.has_line_break_before()
}

/// A binding identifier: any identifier, including contextual words
pub(super) fn at_binding_identifier<P: ScriptParser>(p: &P) -> bool {
    p.at(SyntaxKind::IDENT)
}

/// Property keys: identifier names, strings, numbers, private names
pub(super) fn at_literal_property_name<P: ScriptParser>(p: &P) -> bool {
    let kind = p.current();
    kind.is_identifier_name()
        || matches!(
            kind,
            SyntaxKind::STRING | SyntaxKind::NUMBER | SyntaxKind::PRIVATE_NAME
        )
}

/// Format a token kind for `expected ...` messages
pub(super) fn quoted(kind: SyntaxKind) -> String {
    match kind.fixed_text() {
        Some(text) => format!("'{}'", text),
        None => crate::parser::syntax_kind::kind_to_name(kind).to_string(),
    }
}

fn expected_code(kind: SyntaxKind) -> ErrorCode {
    match kind {
        SyntaxKind::SEMICOLON => ErrorCode::E0201,
        SyntaxKind::R_BRACE => ErrorCode::E0202,
        SyntaxKind::R_PAREN => ErrorCode::E0203,
        SyntaxKind::R_BRACKET => ErrorCode::E0204,
        SyntaxKind::GT => ErrorCode::E0602,
        _ => ErrorCode::E0902,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_flags() {
        assert!(!GrammarFlags::plain().types);
        assert!(GrammarFlags::typed().types);
        assert!(GrammarFlags::markup().markup);
        assert!(GrammarFlags::typed().angle_assertions());
        assert!(!GrammarFlags::markup().angle_assertions());
        assert_eq!(GrammarFlags::default().max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_function_context_resets_loops() {
        let ctx = Context {
            in_iteration: true,
            top_level: true,
            ..Context::default()
        };
        let inner = ctx.function(true, false);
        assert!(inner.in_function && inner.in_async);
        assert!(!inner.in_iteration && !inner.top_level);
    }

    #[test]
    fn test_quoted_kinds() {
        assert_eq!(quoted(SyntaxKind::R_PAREN), "')'");
        assert_eq!(quoted(SyntaxKind::FAT_ARROW), "'=>'");
        assert_eq!(quoted(SyntaxKind::IDENT), "identifier");
    }
}
