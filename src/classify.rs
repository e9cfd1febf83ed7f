//! Dialect classification
//!
//! A recognized filename extension decides the dialect on its own. Without
//! one, the text is tokenized and sniffed for evidence:
//!
//! ```text
//! markup evidence  ⇒ MarkupEmbedded
//! type evidence    ⇒ TypedSuperset
//! otherwise        ⇒ PlainScript
//! ```
//!
//! Evidence is only ever taken from significant tokens, so words inside
//! strings, comments and template text never count. The walk re-scans
//! regular expressions and template continuations the way the parser does,
//! keeping a `/` or a `` ` `` inside one of them from derailing the stream.

use crate::dialect::Dialect;
use crate::parser::{Lexer, SyntaxKind, Token};
use std::path::Path;
use tracing::trace;

/// Longest return type annotation scanned when looking for `): T {`
const MAX_RETURN_TYPE_TOKENS: usize = 64;

/// Decide the dialect of `text`, using the extension of `filename` when it
/// is recognized
pub fn classify(filename: &str, text: &str) -> Dialect {
    let ext = extension(filename);
    if let Some(dialect) = Dialect::from_extension(&ext) {
        trace!(filename, %dialect, "classified by extension");
        return dialect;
    }
    let dialect = sniff(text);
    trace!(filename, %dialect, "classified by content");
    dialect
}

/// The lowercase extension of `filename`, or an empty string when it has none
pub fn extension(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default()
}

/// Content sniffing for text without a recognized extension
pub fn sniff(text: &str) -> Dialect {
    let tokens = significant_tokens(text);
    if has_markup_evidence(&tokens) {
        Dialect::MarkupEmbedded
    } else if has_type_evidence(&tokens) {
        Dialect::TypedSuperset
    } else {
        Dialect::PlainScript
    }
}

// =============================================================================
// Token walk
// =============================================================================

/// Non-trivia tokens of `text`, with regex literals and template
/// continuations scanned as single tokens
fn significant_tokens(text: &str) -> Vec<Token<'_>> {
    let mut lexer = Lexer::new(text);
    let mut tokens: Vec<Token<'_>> = Vec::new();
    let mut braces = 0usize;
    // Brace depth at which each open template substitution started
    let mut substitutions: Vec<usize> = Vec::new();

    while let Some(mut token) = lexer.next() {
        if token.kind.is_trivia() {
            continue;
        }
        let offset = usize::from(token.offset);
        match token.kind {
            SyntaxKind::L_BRACE => braces += 1,
            SyntaxKind::R_BRACE if substitutions.last() == Some(&braces) => {
                substitutions.pop();
                token = lexer.relex_template_continuation(offset);
            }
            SyntaxKind::R_BRACE => braces = braces.saturating_sub(1),
            SyntaxKind::SLASH | SyntaxKind::SLASH_EQ
                if regex_allowed(tokens.last().map(|t| t.kind)) =>
            {
                token = lexer.relex_regex(offset);
            }
            _ => {}
        }
        if matches!(token.kind, SyntaxKind::TEMPLATE_HEAD | SyntaxKind::TEMPLATE_MIDDLE) {
            substitutions.push(braces);
        }
        tokens.push(token);
    }
    tokens
}

/// Whether a `/` after `prev` starts a regular expression literal
fn regex_allowed(prev: Option<SyntaxKind>) -> bool {
    match prev {
        None => true,
        // `</` closes a tag
        Some(SyntaxKind::LT) => false,
        Some(
            SyntaxKind::R_PAREN
            | SyntaxKind::R_BRACKET
            | SyntaxKind::R_BRACE
            | SyntaxKind::PLUS_PLUS
            | SyntaxKind::MINUS_MINUS,
        ) => false,
        Some(
            SyntaxKind::THIS_KW
            | SyntaxKind::SUPER_KW
            | SyntaxKind::TRUE_KW
            | SyntaxKind::FALSE_KW
            | SyntaxKind::NULL_KW,
        ) => false,
        Some(kind) => kind.is_punct() || kind.is_keyword(),
    }
}

// =============================================================================
// Evidence
// =============================================================================

struct Tokens<'t, 'a> {
    tokens: &'t [Token<'a>],
}

impl<'a> Tokens<'_, 'a> {
    fn kind(&self, idx: usize) -> SyntaxKind {
        self.tokens.get(idx).map(|t| t.kind).unwrap_or(SyntaxKind::EOF)
    }

    fn text(&self, idx: usize) -> &'a str {
        self.tokens.get(idx).map(|t| t.text).unwrap_or("")
    }

    fn is_word(&self, idx: usize, word: &str) -> bool {
        self.kind(idx) == SyntaxKind::IDENT && self.text(idx) == word
    }

    fn prev(&self, idx: usize) -> Option<SyntaxKind> {
        idx.checked_sub(1).map(|i| self.kind(i))
    }
}

/// A tag opened in expression position and closed later on
fn has_markup_evidence(tokens: &[Token<'_>]) -> bool {
    let t = Tokens { tokens };
    let opened = (0..tokens.len()).find(|&i| {
        t.kind(i) == SyntaxKind::LT
            && (t.kind(i + 1) == SyntaxKind::GT || t.kind(i + 1).is_identifier_name())
            && t.prev(i).is_none_or(starts_expression)
    });
    let Some(opened) = opened else {
        return false;
    };
    (opened + 1..tokens.len()).any(|j| {
        matches!(
            (t.kind(j), t.kind(j + 1)),
            (SyntaxKind::LT, SyntaxKind::SLASH) | (SyntaxKind::SLASH, SyntaxKind::GT)
        )
    })
}

/// Tokens after which a `<` opens a tag rather than comparing
fn starts_expression(prev: SyntaxKind) -> bool {
    matches!(
        prev,
        SyntaxKind::L_PAREN
            | SyntaxKind::EQ
            | SyntaxKind::RETURN_KW
            | SyntaxKind::FAT_ARROW
            | SyntaxKind::COMMA
            | SyntaxKind::QUESTION
            | SyntaxKind::COLON
            | SyntaxKind::AMP_AMP
            | SyntaxKind::PIPE_PIPE
            | SyntaxKind::L_BRACE
            | SyntaxKind::L_BRACKET
    )
}

fn has_type_evidence(tokens: &[Token<'_>]) -> bool {
    let t = Tokens { tokens };
    (0..tokens.len()).any(|i| {
        typed_declaration_at(&t, i)
            || annotated_binding_at(&t, i)
            || annotated_parameter_at(&t, i)
            || return_annotation_at(&t, i)
            || (t.is_word(i, "as") && t.kind(i + 1) == SyntaxKind::CONST_KW)
            || (t.is_word(i, "implements") && t.kind(i + 1) == SyntaxKind::IDENT)
    })
}

/// `interface X`, `type X =` or `enum X` at the start of a statement
fn typed_declaration_at(t: &Tokens<'_, '_>, i: usize) -> bool {
    let at_statement_start = match t.prev(i) {
        None => true,
        Some(SyntaxKind::SEMICOLON | SyntaxKind::L_BRACE | SyntaxKind::R_BRACE) => true,
        Some(SyntaxKind::EXPORT_KW) => true,
        Some(SyntaxKind::IDENT) => t.is_word(i - 1, "declare"),
        _ => false,
    };
    if !at_statement_start || t.kind(i + 1) != SyntaxKind::IDENT {
        return false;
    }
    if t.is_word(i, "interface") {
        return true;
    }
    if t.is_word(i, "type") {
        return matches!(t.kind(i + 2), SyntaxKind::EQ | SyntaxKind::LT);
    }
    t.kind(i) == SyntaxKind::ENUM_KW
}

/// `let x:`, `const x:`, `var x:` and the definite `let x!:`
fn annotated_binding_at(t: &Tokens<'_, '_>, i: usize) -> bool {
    let binds = matches!(t.kind(i), SyntaxKind::VAR_KW | SyntaxKind::CONST_KW) || t.is_word(i, "let");
    binds
        && t.kind(i + 1) == SyntaxKind::IDENT
        && (t.kind(i + 2) == SyntaxKind::COLON
            || (t.kind(i + 2) == SyntaxKind::BANG && t.kind(i + 3) == SyntaxKind::COLON))
}

/// `(a: T`, `(a?: T` and `, b?: T`
fn annotated_parameter_at(t: &Tokens<'_, '_>, i: usize) -> bool {
    if t.kind(i + 1) != SyntaxKind::IDENT {
        return false;
    }
    let optional = t.kind(i + 2) == SyntaxKind::QUESTION && t.kind(i + 3) == SyntaxKind::COLON;
    match t.kind(i) {
        SyntaxKind::L_PAREN => optional || t.kind(i + 2) == SyntaxKind::COLON,
        SyntaxKind::COMMA => optional,
        _ => false,
    }
}

/// `): T {` or `): T =>`
fn return_annotation_at(t: &Tokens<'_, '_>, i: usize) -> bool {
    if t.kind(i) != SyntaxKind::R_PAREN || t.kind(i + 1) != SyntaxKind::COLON {
        return false;
    }
    let start = i + 2;
    let mut end = start;
    while end - start < MAX_RETURN_TYPE_TOKENS && is_type_token(t.kind(end)) {
        end += 1;
    }
    end > start
        && t.kind(start).is_identifier_name()
        && matches!(t.kind(end), SyntaxKind::L_BRACE | SyntaxKind::FAT_ARROW)
}

fn is_type_token(kind: SyntaxKind) -> bool {
    kind.is_identifier_name()
        || matches!(
            kind,
            SyntaxKind::DOT
                | SyntaxKind::LT
                | SyntaxKind::GT
                | SyntaxKind::COMMA
                | SyntaxKind::L_BRACKET
                | SyntaxKind::R_BRACKET
                | SyntaxKind::PIPE
                | SyntaxKind::AMP
                | SyntaxKind::STRING
                | SyntaxKind::NUMBER
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("app.js", Dialect::PlainScript)]
    #[case("lib/index.MJS", Dialect::PlainScript)]
    #[case("config.cjs", Dialect::PlainScript)]
    #[case("types.d.ts", Dialect::TypedSuperset)]
    #[case("server.mts", Dialect::TypedSuperset)]
    #[case("Card.TSX", Dialect::MarkupEmbedded)]
    #[case("view.jsx", Dialect::MarkupEmbedded)]
    fn test_extension_is_authoritative(#[case] filename: &str, #[case] expected: Dialect) {
        // Content that would sniff differently is ignored
        assert_eq!(classify(filename, "interface A {} const x = <div></div>;"), expected);
        assert_eq!(classify(filename, ""), expected);
    }

    #[test]
    fn test_extension() {
        assert_eq!(extension("card.tsx"), "tsx");
        assert_eq!(extension("src/Card.TSX"), "tsx");
        assert_eq!(extension("Makefile"), "");
        assert_eq!(extension(".eslintrc"), "");
        assert_eq!(extension("x.unknown"), "unknown");
    }

    #[rstest]
    #[case("const el = <div className=\"a\">hi</div>;")]
    #[case("return <Item />")]
    #[case("render(<><A /></>)")]
    #[case("const list = items.map(i => <li key={i}>{i}</li>);")]
    #[case("const x = cond && <span>yes</span>;")]
    fn test_sniff_markup(#[case] text: &str) {
        assert_eq!(classify("snippet", text), Dialect::MarkupEmbedded);
    }

    #[rstest]
    #[case("interface User { id: number }")]
    #[case("export type Id = string | number;")]
    #[case("enum Color { Red, Green }")]
    #[case("let count: number = 0;")]
    #[case("function add(a: number, b: number) { return a + b; }")]
    #[case("function greet(name?: string) {}")]
    #[case("function now(): Date { return new Date(); }")]
    #[case("const f = (x): Promise<void> => run(x);")]
    #[case("const modes = ['a', 'b'] as const;")]
    #[case("class Store implements Repository {}")]
    fn test_sniff_types(#[case] text: &str) {
        assert_eq!(classify("snippet", text), Dialect::TypedSuperset);
    }

    #[rstest]
    #[case("")]
    #[case("console.log('hello');")]
    #[case("const o = { a: 1, b: 2 };")]
    #[case("const v = ok ? f() : g();")]
    #[case("switch (x) { case f(): { break; } }")]
    #[case("if (a < b && c > d) { go(); }")]
    #[case("// interface Foo {}\nconst s = 'type X = 1';")]
    #[case("const t = `<div>${x}</div>`;")]
    #[case("const r = /<a>/g; const q = a / b;")]
    fn test_sniff_plain(#[case] text: &str) {
        assert_eq!(classify("snippet", text), Dialect::PlainScript);
    }

    #[test]
    fn test_markup_wins_over_types() {
        let text = "interface P { n: string }\nconst C = (p: P) => <b>{p.n}</b>;";
        assert_eq!(sniff(text), Dialect::MarkupEmbedded);
    }

    #[test]
    fn test_unclosed_tag_is_not_evidence() {
        assert_eq!(sniff("x = <number>y;"), Dialect::PlainScript);
    }

    #[test]
    fn test_template_substitutions_are_code() {
        assert_eq!(sniff("const s = `${(() => { let n: number = 1; return n; })()}`;"), Dialect::TypedSuperset);
    }

    #[test]
    fn test_deterministic() {
        let text = "const a = <p>{b}</p>;";
        assert_eq!(classify("a", text), classify("a", text));
    }
}
