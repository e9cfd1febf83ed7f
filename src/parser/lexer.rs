//! Logos-based lexer for the JavaScript family
//!
//! Fast tokenization using the logos crate. The token grammar is context
//! free except for four constructs whose meaning depends on the parser's
//! position: regular expression literals, template continuations after a
//! `${...}` substitution, JSX text children and JSX attribute strings. For
//! those the parser asks the lexer to re-scan from a given offset
//! (see [`Lexer::relex_regex`] and friends) and lexing resumes right after.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::{TextRange, TextSize};

/// A token with its kind, text, and position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text))
    }

    /// Byte offset just past the end of the token
    pub fn end(&self) -> usize {
        usize::from(self.offset) + self.text.len()
    }

    /// Whether this token is trivia containing a line terminator
    pub fn has_line_break(&self) -> bool {
        self.kind.is_trivia() && self.text.contains(['\n', '\r', '\u{2028}', '\u{2029}'])
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    source: &'a str,
    inner: logos::Lexer<'a, LogosToken>,
    base: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::at(input, 0)
    }

    /// Start lexing `source` at byte `offset`
    pub fn at(source: &'a str, offset: usize) -> Self {
        Self {
            source,
            inner: LogosToken::lexer(&source[offset..]),
            base: offset,
        }
    }

    fn restart(&mut self, offset: usize) {
        self.inner = LogosToken::lexer(&self.source[offset..]);
        self.base = offset;
    }

    fn token(&self, kind: SyntaxKind, start: usize, end: usize) -> Token<'a> {
        Token {
            kind,
            text: &self.source[start..end],
            offset: TextSize::new(start as u32),
        }
    }

    fn emit_and_restart(&mut self, kind: SyntaxKind, start: usize, len: usize) -> Token<'a> {
        self.restart(start + len);
        self.token(kind, start, start + len)
    }

    /// Re-scan a regular expression literal starting at the `/` at `offset`.
    ///
    /// An unterminated literal becomes an ERROR token running to the end of
    /// the line.
    pub fn relex_regex(&mut self, offset: usize) -> Token<'a> {
        let rest = &self.source[offset..];
        match scan_regex(rest) {
            Some(len) => self.emit_and_restart(SyntaxKind::REGEX, offset, len),
            None => {
                let len = rest.find(['\n', '\r']).unwrap_or(rest.len());
                self.emit_and_restart(SyntaxKind::ERROR, offset, len.max(1))
            }
        }
    }

    /// Re-scan a template continuation starting at the `}` that closes a
    /// substitution.
    pub fn relex_template_continuation(&mut self, offset: usize) -> Token<'a> {
        let (len, end) = scan_template(&self.source[offset + 1..]);
        let kind = match end {
            TemplateEnd::Backtick => SyntaxKind::TEMPLATE_TAIL,
            TemplateEnd::Substitution => SyntaxKind::TEMPLATE_MIDDLE,
            TemplateEnd::Unterminated => SyntaxKind::ERROR,
        };
        self.emit_and_restart(kind, offset, len + 1)
    }

    /// Scan JSX text at `offset`. Returns `None` (and resumes normal lexing
    /// at `offset`) when the child starts with `<` or `{` or input is exhausted.
    pub fn relex_jsx_text(&mut self, offset: usize) -> Option<Token<'a>> {
        let len = scan_jsx_text(&self.source[offset..]);
        if len == 0 {
            self.restart(offset);
            return None;
        }
        Some(self.emit_and_restart(SyntaxKind::JSX_TEXT, offset, len))
    }

    /// Re-scan a JSX attribute string (no escapes, may span lines)
    pub fn relex_jsx_string(&mut self, offset: usize) -> Token<'a> {
        let (len, terminated) = scan_jsx_string(&self.source[offset..]);
        let kind = if terminated {
            SyntaxKind::JSX_STRING
        } else {
            SyntaxKind::ERROR
        };
        self.emit_and_restart(kind, offset, len)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.base == 0 && self.inner.span().end == 0 && self.source.starts_with("#!") {
            let len = self.source.find(['\n', '\r']).unwrap_or(self.source.len());
            return Some(self.emit_and_restart(SyntaxKind::SHEBANG, 0, len));
        }

        let logos_token = self.inner.next()?;
        let span = self.inner.span();
        let start = self.base + span.start;
        let end = self.base + span.end;

        match logos_token {
            Ok(t) => {
                let kind = SyntaxKind::from(t);
                if kind == SyntaxKind::IDENT || kind.is_keyword() {
                    // Words may continue with non-ASCII identifier characters
                    let tail = ident_tail_len(&self.source[end..]);
                    if tail > 0 {
                        return Some(self.emit_and_restart(SyntaxKind::IDENT, start, end - start + tail));
                    }
                }
                Some(self.token(kind, start, end))
            }
            Err(()) => {
                let rest = &self.source[start..];
                let first = rest.chars().next()?;
                if unicode_ident::is_xid_start(first) {
                    let len = first.len_utf8() + ident_tail_len(&rest[first.len_utf8()..]);
                    return Some(self.emit_and_restart(SyntaxKind::IDENT, start, len));
                }
                Some(self.emit_and_restart(SyntaxKind::ERROR, start, first.len_utf8()))
            }
        }
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// How a template chunk ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateEnd {
    Backtick,
    Substitution,
    Unterminated,
}

// =========================================================================
// Scanners shared by logos callbacks and parser-driven relexing
// =========================================================================

fn ident_tail_len(rest: &str) -> usize {
    rest.chars()
        .take_while(|c| unicode_ident::is_xid_continue(*c) || matches!(c, '$' | '\u{200C}' | '\u{200D}'))
        .map(char::len_utf8)
        .sum()
}

/// Scan a quoted string body (after the opening quote).
/// Returns the consumed length and whether the closing quote was found.
fn scan_quoted(rest: &str, quote: u8) -> (usize, bool) {
    let bytes = rest.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                // Line continuations may use CRLF
                if bytes.get(i + 1) == Some(&b'\r') && bytes.get(i + 2) == Some(&b'\n') {
                    i += 3;
                } else {
                    i += 2;
                }
            }
            b'\n' | b'\r' => return (i, false),
            b if b == quote => return (i + 1, true),
            _ => i += 1,
        }
    }
    (rest.len(), false)
}

/// Scan template text (after the opening backtick or closing `}`)
fn scan_template(rest: &str) -> (usize, TemplateEnd) {
    let bytes = rest.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'`' => return (i + 1, TemplateEnd::Backtick),
            b'$' if bytes.get(i + 1) == Some(&b'{') => return (i + 2, TemplateEnd::Substitution),
            _ => i += 1,
        }
    }
    (rest.len(), TemplateEnd::Unterminated)
}

/// Scan a regular expression literal; `rest` starts at the opening `/`
fn scan_regex(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let mut i = 1;
    let mut in_class = false;
    loop {
        match *bytes.get(i)? {
            b'\n' | b'\r' => return None,
            b'\\' => {
                if matches!(bytes.get(i + 1), Some(b'\n' | b'\r') | None) {
                    return None;
                }
                i += 2;
                continue;
            }
            b'[' => in_class = true,
            b']' => in_class = false,
            b'/' if !in_class => {
                i += 1;
                break;
            }
            _ => {}
        }
        i += 1;
    }
    Some(i + ident_tail_len(&rest[i..]))
}

fn scan_jsx_text(rest: &str) -> usize {
    rest.find(['<', '{']).unwrap_or(rest.len())
}

/// `rest` starts at the opening quote
fn scan_jsx_string(rest: &str) -> (usize, bool) {
    let Some(quote) = rest.chars().next() else {
        return (0, false);
    };
    match rest[1..].find(quote) {
        Some(pos) => (pos + 2, true),
        None => (rest.len(), false),
    }
}

fn lex_quoted(lex: &mut logos::Lexer<LogosToken>, quote: u8) -> Option<bool> {
    let (len, terminated) = scan_quoted(lex.remainder(), quote);
    lex.bump(len);
    Some(terminated)
}

fn lex_template(lex: &mut logos::Lexer<LogosToken>) -> Option<TemplateEnd> {
    let (len, end) = scan_template(lex.remainder());
    lex.bump(len);
    Some(end)
}

fn lex_block_comment(lex: &mut logos::Lexer<LogosToken>) -> Option<bool> {
    match lex.remainder().find("*/") {
        Some(pos) => {
            lex.bump(pos + 2);
            Some(true)
        }
        None => {
            lex.bump(lex.remainder().len());
            Some(false)
        }
    }
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\x0B\x0C\u{A0}\u{FEFF}\u{2028}\u{2029}]+")]
    Whitespace,

    #[regex(r"//[^\n\r]*")]
    LineComment,

    /// `true` when the closing `*/` was found
    #[token("/*", lex_block_comment)]
    BlockComment(bool),

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Ident,

    #[regex(r"#[a-zA-Z_$][a-zA-Z0-9_$]*")]
    PrivateName,

    #[regex(r"[0-9][0-9_]*(\.[0-9_]*)?([eE][+-]?[0-9][0-9_]*)?n?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9][0-9_]*)?")]
    #[regex(r"0[xX][0-9a-fA-F][0-9a-fA-F_]*n?")]
    #[regex(r"0[oO][0-7][0-7_]*n?")]
    #[regex(r"0[bB][01][01_]*n?")]
    Number,

    /// `true` when the closing quote was found on the same line
    #[token("\"", |lex| lex_quoted(lex, b'"'))]
    #[token("'", |lex| lex_quoted(lex, b'\''))]
    Str(bool),

    #[token("`", lex_template)]
    Template(TemplateEnd),

    // =========================================================================
    // MULTI-CHARACTER PUNCTUATION (logos picks the longest match)
    // =========================================================================
    #[token("...")]
    DotDotDot,
    #[token("??=")]
    QuestionQuestionEq,
    #[token("??")]
    QuestionQuestion,
    #[token("===")]
    EqEqEq,
    #[token("==")]
    EqEq,
    #[token("!==")]
    BangEqEq,
    #[token("!=")]
    BangEq,
    #[token("=>")]
    FatArrow,
    #[token("<=")]
    LtEq,
    #[token("<<=")]
    LtLtEq,
    #[token("<<")]
    LtLt,
    #[token("++")]
    PlusPlus,
    #[token("+=")]
    PlusEq,
    #[token("--")]
    MinusMinus,
    #[token("-=")]
    MinusEq,
    #[token("**=")]
    StarStarEq,
    #[token("**")]
    StarStar,
    #[token("*=")]
    StarEq,
    #[token("/=")]
    SlashEq,
    #[token("%=")]
    PercentEq,
    #[token("&&=")]
    AmpAmpEq,
    #[token("&&")]
    AmpAmp,
    #[token("&=")]
    AmpEq,
    #[token("||=")]
    PipePipeEq,
    #[token("||")]
    PipePipe,
    #[token("|=")]
    PipeEq,
    #[token("^=")]
    CaretEq,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,
    #[token("?")]
    Question,
    #[token("@")]
    At,
    #[token("~")]
    Tilde,
    #[token("!")]
    Bang,
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,

    // =========================================================================
    // KEYWORDS (reserved words; contextual words stay identifiers)
    // =========================================================================
    #[token("break")]
    BreakKw,
    #[token("case")]
    CaseKw,
    #[token("catch")]
    CatchKw,
    #[token("class")]
    ClassKw,
    #[token("const")]
    ConstKw,
    #[token("continue")]
    ContinueKw,
    #[token("debugger")]
    DebuggerKw,
    #[token("default")]
    DefaultKw,
    #[token("delete")]
    DeleteKw,
    #[token("do")]
    DoKw,
    #[token("else")]
    ElseKw,
    #[token("enum")]
    EnumKw,
    #[token("export")]
    ExportKw,
    #[token("extends")]
    ExtendsKw,
    #[token("false")]
    FalseKw,
    #[token("finally")]
    FinallyKw,
    #[token("for")]
    ForKw,
    #[token("function")]
    FunctionKw,
    #[token("if")]
    IfKw,
    #[token("import")]
    ImportKw,
    #[token("in")]
    InKw,
    #[token("instanceof")]
    InstanceofKw,
    #[token("new")]
    NewKw,
    #[token("null")]
    NullKw,
    #[token("return")]
    ReturnKw,
    #[token("super")]
    SuperKw,
    #[token("switch")]
    SwitchKw,
    #[token("this")]
    ThisKw,
    #[token("throw")]
    ThrowKw,
    #[token("true")]
    TrueKw,
    #[token("try")]
    TryKw,
    #[token("typeof")]
    TypeofKw,
    #[token("var")]
    VarKw,
    #[token("void")]
    VoidKw,
    #[token("while")]
    WhileKw,
    #[token("with")]
    WithKw,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            Whitespace => SyntaxKind::WHITESPACE,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment(true) => SyntaxKind::BLOCK_COMMENT,
            BlockComment(false) => SyntaxKind::ERROR,
            Ident => SyntaxKind::IDENT,
            PrivateName => SyntaxKind::PRIVATE_NAME,
            Number => SyntaxKind::NUMBER,
            Str(true) => SyntaxKind::STRING,
            Str(false) => SyntaxKind::ERROR,
            Template(TemplateEnd::Backtick) => SyntaxKind::TEMPLATE_FULL,
            Template(TemplateEnd::Substitution) => SyntaxKind::TEMPLATE_HEAD,
            Template(TemplateEnd::Unterminated) => SyntaxKind::ERROR,
            DotDotDot => SyntaxKind::DOT_DOT_DOT,
            QuestionQuestionEq => SyntaxKind::QUESTION_QUESTION_EQ,
            QuestionQuestion => SyntaxKind::QUESTION_QUESTION,
            EqEqEq => SyntaxKind::EQ_EQ_EQ,
            EqEq => SyntaxKind::EQ_EQ,
            BangEqEq => SyntaxKind::BANG_EQ_EQ,
            BangEq => SyntaxKind::BANG_EQ,
            FatArrow => SyntaxKind::FAT_ARROW,
            LtEq => SyntaxKind::LT_EQ,
            LtLtEq => SyntaxKind::LT_LT_EQ,
            LtLt => SyntaxKind::LT_LT,
            PlusPlus => SyntaxKind::PLUS_PLUS,
            PlusEq => SyntaxKind::PLUS_EQ,
            MinusMinus => SyntaxKind::MINUS_MINUS,
            MinusEq => SyntaxKind::MINUS_EQ,
            StarStarEq => SyntaxKind::STAR_STAR_EQ,
            StarStar => SyntaxKind::STAR_STAR,
            StarEq => SyntaxKind::STAR_EQ,
            SlashEq => SyntaxKind::SLASH_EQ,
            PercentEq => SyntaxKind::PERCENT_EQ,
            AmpAmpEq => SyntaxKind::AMP_AMP_EQ,
            AmpAmp => SyntaxKind::AMP_AMP,
            AmpEq => SyntaxKind::AMP_EQ,
            PipePipeEq => SyntaxKind::PIPE_PIPE_EQ,
            PipePipe => SyntaxKind::PIPE_PIPE,
            PipeEq => SyntaxKind::PIPE_EQ,
            CaretEq => SyntaxKind::CARET_EQ,
            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            Semicolon => SyntaxKind::SEMICOLON,
            Comma => SyntaxKind::COMMA,
            Dot => SyntaxKind::DOT,
            Colon => SyntaxKind::COLON,
            Question => SyntaxKind::QUESTION,
            At => SyntaxKind::AT,
            Tilde => SyntaxKind::TILDE,
            Bang => SyntaxKind::BANG,
            Eq => SyntaxKind::EQ,
            Lt => SyntaxKind::LT,
            Gt => SyntaxKind::GT,
            Plus => SyntaxKind::PLUS,
            Minus => SyntaxKind::MINUS,
            Star => SyntaxKind::STAR,
            Slash => SyntaxKind::SLASH,
            Percent => SyntaxKind::PERCENT,
            Amp => SyntaxKind::AMP,
            Pipe => SyntaxKind::PIPE,
            Caret => SyntaxKind::CARET,
            BreakKw => SyntaxKind::BREAK_KW,
            CaseKw => SyntaxKind::CASE_KW,
            CatchKw => SyntaxKind::CATCH_KW,
            ClassKw => SyntaxKind::CLASS_KW,
            ConstKw => SyntaxKind::CONST_KW,
            ContinueKw => SyntaxKind::CONTINUE_KW,
            DebuggerKw => SyntaxKind::DEBUGGER_KW,
            DefaultKw => SyntaxKind::DEFAULT_KW,
            DeleteKw => SyntaxKind::DELETE_KW,
            DoKw => SyntaxKind::DO_KW,
            ElseKw => SyntaxKind::ELSE_KW,
            EnumKw => SyntaxKind::ENUM_KW,
            ExportKw => SyntaxKind::EXPORT_KW,
            ExtendsKw => SyntaxKind::EXTENDS_KW,
            FalseKw => SyntaxKind::FALSE_KW,
            FinallyKw => SyntaxKind::FINALLY_KW,
            ForKw => SyntaxKind::FOR_KW,
            FunctionKw => SyntaxKind::FUNCTION_KW,
            IfKw => SyntaxKind::IF_KW,
            ImportKw => SyntaxKind::IMPORT_KW,
            InKw => SyntaxKind::IN_KW,
            InstanceofKw => SyntaxKind::INSTANCEOF_KW,
            NewKw => SyntaxKind::NEW_KW,
            NullKw => SyntaxKind::NULL_KW,
            ReturnKw => SyntaxKind::RETURN_KW,
            SuperKw => SyntaxKind::SUPER_KW,
            SwitchKw => SyntaxKind::SWITCH_KW,
            ThisKw => SyntaxKind::THIS_KW,
            ThrowKw => SyntaxKind::THROW_KW,
            TrueKw => SyntaxKind::TRUE_KW,
            TryKw => SyntaxKind::TRY_KW,
            TypeofKw => SyntaxKind::TYPEOF_KW,
            VarKw => SyntaxKind::VAR_KW,
            VoidKw => SyntaxKind::VOID_KW,
            WhileKw => SyntaxKind::WHILE_KW,
            WithKw => SyntaxKind::WITH_KW,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<SyntaxKind> {
        Lexer::new(input)
            .map(|t| t.kind)
            .filter(|k| !k.is_trivia())
            .collect()
    }

    #[test]
    fn test_lex_declaration() {
        let tokens: Vec<_> = Lexer::new("const x = 1;").collect();
        assert_eq!(tokens.len(), 8); // const, ws, x, ws, =, ws, 1, ;
        assert_eq!(tokens[0].kind, SyntaxKind::CONST_KW);
        assert_eq!(tokens[1].kind, SyntaxKind::WHITESPACE);
        assert_eq!(tokens[2].kind, SyntaxKind::IDENT);
        assert_eq!(tokens[4].kind, SyntaxKind::EQ);
        assert_eq!(tokens[6].kind, SyntaxKind::NUMBER);
        assert_eq!(tokens[7].kind, SyntaxKind::SEMICOLON);
    }

    #[test]
    fn test_lex_contextual_words_are_identifiers() {
        assert_eq!(
            kinds("let async await type interface"),
            vec![SyntaxKind::IDENT; 5]
        );
    }

    #[test]
    fn test_lex_greater_than_is_never_joined() {
        assert_eq!(
            kinds("a >>= b"),
            vec![SyntaxKind::IDENT, SyntaxKind::GT, SyntaxKind::GT, SyntaxKind::EQ, SyntaxKind::IDENT]
        );
    }

    #[test]
    fn test_lex_numbers() {
        for input in ["0", "42", "3.14", ".5", "1e10", "2.5E-3", "0xFF", "0o17", "0b1010", "1_000_000", "10n"] {
            assert_eq!(kinds(input), vec![SyntaxKind::NUMBER], "input: {input}");
        }
    }

    #[test]
    fn test_lex_strings() {
        assert_eq!(kinds(r#""a\"b""#), vec![SyntaxKind::STRING]);
        assert_eq!(kinds("'it\\'s'"), vec![SyntaxKind::STRING]);
        assert_eq!(kinds("\"open\nx"), vec![SyntaxKind::ERROR, SyntaxKind::IDENT]);
    }

    #[test]
    fn test_lex_templates() {
        assert_eq!(kinds("`plain`"), vec![SyntaxKind::TEMPLATE_FULL]);
        let tokens = tokenize("`Hello, ${name}!`");
        assert_eq!(tokens[0].kind, SyntaxKind::TEMPLATE_HEAD);
        assert_eq!(tokens[0].text, "`Hello, ${");
        assert_eq!(kinds("`never closed"), vec![SyntaxKind::ERROR]);
    }

    #[test]
    fn test_relex_template_continuation() {
        let source = "`a${b}c${d}e`";
        let mut lexer = Lexer::at(source, 5);
        let middle = lexer.relex_template_continuation(5);
        assert_eq!(middle.kind, SyntaxKind::TEMPLATE_MIDDLE);
        assert_eq!(middle.text, "}c${");
        assert_eq!(lexer.next().map(|t| t.kind), Some(SyntaxKind::IDENT));
        let tail = lexer.relex_template_continuation(10);
        assert_eq!(tail.kind, SyntaxKind::TEMPLATE_TAIL);
        assert_eq!(tail.text, "}e`");
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_lex_comments() {
        let tokens = tokenize("// line\n/* block */ x /* open");
        assert_eq!(tokens[0].kind, SyntaxKind::LINE_COMMENT);
        assert!(tokens[1].has_line_break());
        assert_eq!(tokens[2].kind, SyntaxKind::BLOCK_COMMENT);
        assert_eq!(tokens[4].kind, SyntaxKind::IDENT);
        assert_eq!(tokens.last().map(|t| t.kind), Some(SyntaxKind::ERROR));
    }

    #[test]
    fn test_relex_regex() {
        let source = "x = /[/]+\\//gi.test(y)";
        let mut lexer = Lexer::at(source, 4);
        let regex = lexer.relex_regex(4);
        assert_eq!(regex.kind, SyntaxKind::REGEX);
        assert_eq!(regex.text, "/[/]+\\//gi");
        assert_eq!(lexer.next().map(|t| t.kind), Some(SyntaxKind::DOT));

        let mut lexer = Lexer::at("/open\n", 0);
        assert_eq!(lexer.relex_regex(0).kind, SyntaxKind::ERROR);
    }

    #[test]
    fn test_relex_jsx_text_and_string() {
        let source = "Don't stop {x}";
        let mut lexer = Lexer::at(source, 0);
        let text = lexer.relex_jsx_text(0);
        assert_eq!(text.map(|t| t.text), Some("Don't stop "));
        assert_eq!(lexer.next().map(|t| t.kind), Some(SyntaxKind::L_BRACE));

        let mut lexer = Lexer::at("<a>", 0);
        assert!(lexer.relex_jsx_text(0).is_none());
        assert_eq!(lexer.next().map(|t| t.kind), Some(SyntaxKind::LT));

        let mut lexer = Lexer::at("\"C:\\dir\nnext\" />", 0);
        assert_eq!(lexer.relex_jsx_string(0).kind, SyntaxKind::JSX_STRING);
    }

    #[test]
    fn test_lex_unicode_identifiers() {
        let tokens = tokenize("café über");
        assert_eq!(tokens[0].kind, SyntaxKind::IDENT);
        assert_eq!(tokens[0].text, "café");
        assert_eq!(tokens[2].kind, SyntaxKind::IDENT);
        assert_eq!(tokens[2].text, "über");
    }

    #[test]
    fn test_lex_shebang_and_private_names() {
        let tokens = tokenize("#!/usr/bin/env node\nthis.#count");
        assert_eq!(tokens[0].kind, SyntaxKind::SHEBANG);
        assert_eq!(tokens.last().map(|t| t.kind), Some(SyntaxKind::PRIVATE_NAME));
    }

    #[test]
    fn test_lex_invalid_character() {
        let tokens = tokenize("a \u{0} b");
        assert_eq!(tokens[2].kind, SyntaxKind::ERROR);
        assert_eq!(tokens[4].kind, SyntaxKind::IDENT);
    }
}
