//! Recursive descent parser for the JavaScript family
//!
//! Builds a rowan GreenNode tree from tokens and produces a lossless CST.
//! Tokens are lexed lazily so the grammar can re-scan context-dependent
//! constructs (regular expressions, template continuations, markup text).
//! The first syntax error stops the parse; the unconsumed rest of the input
//! is kept in a trailing ERROR node.

use super::errors::{ErrorCode, SyntaxError};
use super::grammar::{self, Context, GrammarFlags, ScriptParser};
use super::lexer::{Lexer, Token};
use super::syntax_kind::{SyntaxKind, SyntaxNode};
use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};
use tracing::trace;

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// The error that stopped the parse
    pub fn first_error(&self) -> Option<&SyntaxError> {
        self.errors.first()
    }

    /// Whether the text has top-level `import`/`export` declarations
    pub fn is_module(&self) -> bool {
        self.syntax()
            .children()
            .any(|node| matches!(node.kind(), SyntaxKind::IMPORT_DECL | SyntaxKind::EXPORT_DECL))
    }
}

/// Parse source text into a CST under the given grammar
pub fn parse(input: &str, flags: GrammarFlags) -> Parse {
    let mut parser = Parser::new(input, flags);
    if !flags.hashbang && input.starts_with("#!") {
        let end = input.find(['\n', '\r']).unwrap_or(input.len());
        parser.errors.push(SyntaxError::expected(
            "a statement",
            Some(&input[..end]),
            TextRange::at(TextSize::new(0), TextSize::new(end as u32)),
            ErrorCode::E0205,
        ));
        parser.failed = true;
    }
    grammar::parse_source_file(&mut parser);
    parser.finish()
}

/// The parser state
struct Parser<'a> {
    source: &'a str,
    lexer: Lexer<'a>,
    /// Every token lexed so far; `tokens[..pos]` are already in the tree
    tokens: Vec<Token<'a>>,
    pos: usize,
    /// Byte offset up to which the source is in the tree
    emitted_end: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
    flags: GrammarFlags,
    context: Context,
    depth: usize,
    failed: bool,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str, flags: GrammarFlags) -> Self {
        Self {
            source,
            lexer: Lexer::new(source),
            tokens: Vec::new(),
            pos: 0,
            emitted_end: 0,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
            flags,
            context: Context::top_level(),
            depth: 0,
            failed: false,
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    // =========================================================================
    // Token buffer
    // =========================================================================

    /// Make sure `tokens[idx]` exists; false at end of input
    fn fill(&mut self, idx: usize) -> bool {
        while self.tokens.len() <= idx {
            match self.lexer.next() {
                Some(token) => self.tokens.push(token),
                None => return false,
            }
        }
        true
    }

    /// Buffer index of the nth significant token from `pos`
    fn significant_index(&mut self, n: usize) -> Option<usize> {
        let mut idx = self.pos;
        let mut count = 0;
        loop {
            if !self.fill(idx) {
                return None;
            }
            if !self.tokens[idx].kind.is_trivia() {
                if count == n {
                    return Some(idx);
                }
                count += 1;
            }
            idx += 1;
        }
    }

    fn line_break_before_index(&self, idx: usize) -> bool {
        self.tokens[..idx]
            .iter()
            .rev()
            .take_while(|t| t.kind.is_trivia())
            .any(|t| t.has_line_break())
    }

    fn emit(&mut self, token: Token<'a>) {
        self.builder.token(token.kind.into(), token.text);
        self.emitted_end = token.end();
    }

    /// Drop buffered lookahead so the lexer can re-scan from the current token
    fn discard_lookahead(&mut self) -> Option<usize> {
        let offset = self.tokens.get(self.pos).map(|t| usize::from(t.offset))?;
        self.tokens.truncate(self.pos);
        Some(offset)
    }

    fn lexical_error(token: &Token<'_>) -> SyntaxError {
        let code = if token.text.starts_with("/*") {
            ErrorCode::E0103
        } else {
            match token.text.chars().next() {
                Some('"' | '\'') => ErrorCode::E0102,
                Some('`' | '}') => ErrorCode::E0104,
                Some('/') => ErrorCode::E0105,
                _ => ErrorCode::E0101,
            }
        };
        let message = match (code, token.text.chars().next()) {
            (ErrorCode::E0101, Some(c)) => format!("invalid character {:?}", c),
            _ => code.default_message().to_string(),
        };
        SyntaxError::new(message, token.range(), code)
    }
}

impl ScriptParser for Parser<'_> {
    fn flags(&self) -> GrammarFlags {
        self.flags
    }

    fn context(&self) -> Context {
        self.context
    }

    fn set_context(&mut self, ctx: Context) {
        self.context = ctx;
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> SyntaxKind {
        if self.failed {
            return SyntaxKind::EOF;
        }
        self.tokens
            .get(self.pos)
            .map(|t| t.kind)
            .unwrap_or(SyntaxKind::EOF)
    }

    fn current_text(&self) -> &str {
        if self.failed {
            return "";
        }
        self.tokens.get(self.pos).map(|t| t.text).unwrap_or("")
    }

    fn current_range(&self) -> TextRange {
        self.tokens
            .get(self.pos)
            .map(|t| t.range())
            .unwrap_or_else(|| TextRange::empty(TextSize::of(self.source)))
    }

    fn nth(&mut self, n: usize) -> SyntaxKind {
        if self.failed {
            return SyntaxKind::EOF;
        }
        self.significant_index(n)
            .map(|idx| self.tokens[idx].kind)
            .unwrap_or(SyntaxKind::EOF)
    }

    fn nth_text(&mut self, n: usize) -> &str {
        if self.failed {
            return "";
        }
        match self.significant_index(n) {
            Some(idx) => self.tokens[idx].text,
            None => "",
        }
    }

    fn glued(&mut self, n: usize) -> SyntaxKind {
        if self.failed || !self.fill(self.pos + n) {
            return SyntaxKind::EOF;
        }
        self.tokens[self.pos + n].kind
    }

    fn has_line_break_before(&self) -> bool {
        self.line_break_before_index(self.pos.min(self.tokens.len()))
    }

    fn nth_has_line_break_before(&mut self, n: usize) -> bool {
        match self.significant_index(n) {
            Some(idx) => self.line_break_before_index(idx),
            None => false,
        }
    }

    fn get_pos(&self) -> usize {
        self.pos
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) {
        self.bump_raw();
        self.skip_trivia();
    }

    fn bump_raw(&mut self) {
        if self.failed || !self.fill(self.pos) {
            return;
        }
        let token = self.tokens[self.pos];
        self.emit(token);
        self.pos += 1;
    }

    fn bump_joined(&mut self, n: usize, kind: SyntaxKind) {
        if self.failed || n == 0 || !self.fill(self.pos + n - 1) {
            return;
        }
        let start = usize::from(self.tokens[self.pos].offset);
        let end = self.tokens[self.pos + n - 1].end();
        self.builder.token(kind.into(), &self.source[start..end]);
        self.emitted_end = end;
        self.pos += n;
        self.skip_trivia();
    }

    fn skip_trivia(&mut self) {
        while !self.failed && self.fill(self.pos) && self.tokens[self.pos].kind.is_trivia() {
            let token = self.tokens[self.pos];
            self.emit(token);
            self.pos += 1;
        }
    }

    // =========================================================================
    // Context-dependent lexing
    // =========================================================================

    fn relex_regex(&mut self) {
        if self.failed {
            return;
        }
        if let Some(offset) = self.discard_lookahead() {
            let token = self.lexer.relex_regex(offset);
            self.tokens.push(token);
        }
    }

    fn relex_template_continuation(&mut self) {
        if self.failed {
            return;
        }
        if let Some(offset) = self.discard_lookahead() {
            let token = self.lexer.relex_template_continuation(offset);
            self.tokens.push(token);
        }
    }

    fn relex_jsx_child_text(&mut self) -> bool {
        if self.failed {
            return false;
        }
        self.tokens.truncate(self.pos);
        match self.lexer.relex_jsx_text(self.emitted_end) {
            Some(token) => {
                self.tokens.push(token);
                self.emit(token);
                self.pos += 1;
                self.fill(self.pos);
                true
            }
            None => {
                self.fill(self.pos);
                false
            }
        }
    }

    fn relex_jsx_string(&mut self) {
        if self.failed {
            return;
        }
        if let Some(offset) = self.discard_lookahead() {
            let token = self.lexer.relex_jsx_string(offset);
            self.tokens.push(token);
        }
    }

    // =========================================================================
    // Node building
    // =========================================================================

    fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    fn checkpoint(&self) -> Checkpoint {
        self.builder.checkpoint()
    }

    fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error(&mut self, error: SyntaxError) {
        if self.failed {
            return;
        }
        trace!(
            offset = u32::from(error.range.start()),
            code = %error.code,
            "parse stopped: {}",
            error.message
        );
        self.errors.push(error);
        self.failed = true;
    }

    fn error_expected(&mut self, what: &str, code: ErrorCode) {
        if self.failed {
            return;
        }
        let error = match self.tokens.get(self.pos) {
            Some(token) if token.kind == SyntaxKind::ERROR => Self::lexical_error(token),
            Some(token) => SyntaxError::expected(what, Some(token.text), token.range(), code),
            None => SyntaxError::expected(
                what,
                None,
                TextRange::empty(TextSize::of(self.source)),
                code,
            ),
        };
        self.error(error);
    }

    fn has_failed(&self) -> bool {
        self.failed
    }

    fn recover_remaining(&mut self) {
        if self.emitted_end >= self.source.len() {
            return;
        }
        self.builder.start_node(SyntaxKind::ERROR.into());
        self.builder
            .token(SyntaxKind::ERROR.into(), &self.source[self.emitted_end..]);
        self.builder.finish_node();
        self.emitted_end = self.source.len();
    }

    // =========================================================================
    // Nesting guard
    // =========================================================================

    fn enter(&mut self) -> bool {
        if self.depth >= self.flags.max_depth {
            let range = self.current_range();
            self.error(SyntaxError::from_code(ErrorCode::E0903, range));
            return false;
        }
        self.depth += 1;
        true
    }

    fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_plain(input: &str) -> Parse {
        parse(input, GrammarFlags::plain())
    }

    #[test]
    fn test_parse_empty() {
        let parse = parse_plain("");
        assert!(parse.ok());
        assert_eq!(parse.syntax().kind(), SyntaxKind::SOURCE_FILE);
    }

    #[test]
    fn test_tree_is_lossless() {
        let source = "// greeting\nconst x = /a+/g.test(`${y}`) ? 1 : 2;\n";
        let parse = parse_plain(source);
        assert!(parse.ok(), "errors: {:?}", parse.errors);
        assert_eq!(parse.syntax().text().to_string(), source);
    }

    #[test]
    fn test_failed_parse_keeps_all_text() {
        let source = "let a = (1 + ;\nlet b = 2;";
        let parse = parse_plain(source);
        assert!(!parse.ok());
        assert_eq!(parse.errors.len(), 1);
        assert_eq!(parse.syntax().text().to_string(), source);
    }

    #[test]
    fn test_first_error_position() {
        let parse = parse("function f(: number {", GrammarFlags::typed());
        let error = parse.first_error().map(|e| (e.message.clone(), e.offset()));
        assert_eq!(
            error,
            Some(("expected a parameter name, found ':'".to_string(), TextSize::new(11)))
        );
    }

    #[test]
    fn test_lexical_error_messages() {
        let parse = parse_plain("let s = 'open");
        assert_eq!(parse.errors[0].code, ErrorCode::E0102);
        let parse = parse_plain("let t = `open ${x}");
        assert_eq!(parse.errors[0].code, ErrorCode::E0104);
        let parse = parse_plain("x = 1; /* open");
        assert_eq!(parse.errors[0].code, ErrorCode::E0103);
        let parse = parse_plain("let r = /open\n");
        assert_eq!(parse.errors[0].code, ErrorCode::E0105);
    }

    #[test]
    fn test_is_module() {
        assert!(parse_plain("import x from 'y';").is_module());
        assert!(parse_plain("export const a = 1;").is_module());
        assert!(!parse_plain("const a = import('y');").is_module());
    }

    #[test]
    fn test_hashbang_flag() {
        let source = "#!/usr/bin/env node\nconsole.log(1);";
        assert!(parse_plain(source).ok());
        let parse = parse(source, GrammarFlags::plain().with_hashbang(false));
        assert!(!parse.ok());
        assert_eq!(parse.syntax().text().to_string(), source);
    }

    #[test]
    fn test_nesting_limit() {
        let source = format!("x = {}1{};", "(".repeat(64), ")".repeat(64));
        let parse = parse(&source, GrammarFlags::plain().with_max_depth(32));
        assert_eq!(parse.errors[0].code, ErrorCode::E0903);
        assert!(parse_plain(&source).ok());
    }
}
