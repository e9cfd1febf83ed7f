//! Embedded markup: elements, fragments, attributes and children
//!
//! ```text
//! JsxElement   = '<' JsxName TypeArgs? JsxAttribute* ('/' '>' | '>' JsxChild* JsxClosing)
//!              | '<' '>' JsxChild* '<' '/' '>'
//! JsxAttribute = '{' '...' Expression '}' | JsxName ('=' JsxValue)?
//! JsxValue     = JSX_STRING | '{' Expression '}' | JsxElement
//! JsxChild     = JSX_TEXT | JsxElement | '{' ('...'? Expression)? '}'
//! JsxClosing   = '<' '/' JsxName '>'
//! ```
//!
//! Text and attribute strings are scanned with dedicated relexing since
//! their spelling follows different rules than script tokens. Inside
//! children the closing `>` and `}` are consumed raw so the following
//! whitespace is kept as text.

use super::*;
use super::expressions::{assignment_expr_allow_in, expression_allow_in};
use super::types::type_args;
use crate::parser::errors::RelatedInfo;
use rowan::TextSize;

/// JsxElement
pub(super) fn jsx_element<P: ScriptParser>(p: &mut P, in_children: bool) {
    if !p.enter() {
        return;
    }
    if p.nth_at(1, SyntaxKind::GT) {
        fragment(p, in_children);
    } else {
        element(p, in_children);
    }
    p.exit();
}

fn fragment<P: ScriptParser>(p: &mut P, in_children: bool) {
    let opening = p.current_range();
    p.start_node(SyntaxKind::JSX_FRAGMENT);
    p.start_node(SyntaxKind::JSX_OPENING);
    p.bump(); // <
    p.bump_raw(); // >
    p.finish_node();

    children(p, "");

    p.start_node(SyntaxKind::JSX_CLOSING);
    p.bump(); // <
    p.bump(); // /
    if !p.at(SyntaxKind::GT) && !p.has_failed() {
        let found = found_text(p);
        let range = p.current_range();
        p.error(
            SyntaxError::expected("closing tag for <>", found.as_deref(), range, ErrorCode::E0701)
                .with_related(RelatedInfo::new("fragment opened here", opening)),
        );
    }
    close_angle(p, in_children);
    p.finish_node();
    p.finish_node();
}

fn element<P: ScriptParser>(p: &mut P, in_children: bool) {
    let opening_start = p.current_range().start();
    p.start_node(SyntaxKind::JSX_ELEMENT);
    p.start_node(SyntaxKind::JSX_OPENING);
    p.bump(); // <
    let name = jsx_name(p, "a tag name");
    if p.flags().types && p.at(SyntaxKind::LT) {
        type_args(p);
    }
    attributes(p);

    if p.eat(SyntaxKind::SLASH) {
        close_angle(p, in_children);
        p.finish_node();
        p.finish_node();
        return;
    }
    let opening = TextRange::new(opening_start, p.current_range().end());
    if p.at(SyntaxKind::GT) {
        p.bump_raw();
    } else {
        p.error_expected("'>'", ErrorCode::E0703);
    }
    p.finish_node();

    children(p, &name);
    closing(p, &name, opening, in_children);
    p.finish_node();
}

/// The final `>` of a tag: consumed raw when more children follow
fn close_angle<P: ScriptParser>(p: &mut P, in_children: bool) {
    if !p.at(SyntaxKind::GT) {
        p.error_expected("'>'", ErrorCode::E0702);
    } else if in_children {
        p.bump_raw();
    } else {
        p.bump();
    }
}

fn found_text<P: ScriptParser>(p: &P) -> Option<String> {
    (!p.at_eof()).then(|| p.current_text().to_string())
}

// =============================================================================
// Names
// =============================================================================

/// JsxName = JsxIdentifier (':' JsxIdentifier | ('.' JsxIdentifier)*)
///
/// Returns the name as written, without whitespace, for matching the
/// closing tag.
fn jsx_name<P: ScriptParser>(p: &mut P, what: &str) -> String {
    let mut name = String::new();
    p.start_node(SyntaxKind::JSX_NAME);
    if !jsx_identifier(p, &mut name) {
        p.error_expected(what, ErrorCode::E0703);
    } else if p.at(SyntaxKind::COLON) {
        name.push(':');
        p.bump();
        if !jsx_identifier(p, &mut name) {
            p.error_expected("a name after ':'", ErrorCode::E0703);
        }
    } else {
        while p.at(SyntaxKind::DOT) {
            name.push('.');
            p.bump();
            if !jsx_identifier(p, &mut name) {
                p.error_expected("a member name", ErrorCode::E0703);
                break;
            }
        }
    }
    p.finish_node();
    name
}

/// JsxIdentifier = IdentifierName ('-' IdentifierName?)*  (no spaces around '-')
fn jsx_identifier<P: ScriptParser>(p: &mut P, name: &mut String) -> bool {
    if !p.current().is_identifier_name() {
        return false;
    }
    loop {
        name.push_str(p.current_text());
        let next = p.glued(1);
        let at_dash = matches!(p.current(), SyntaxKind::MINUS | SyntaxKind::MINUS_MINUS);
        let continues = matches!(next, SyntaxKind::MINUS | SyntaxKind::MINUS_MINUS)
            || (at_dash && next.is_identifier_name());
        p.bump();
        if !continues {
            break;
        }
    }
    true
}

// =============================================================================
// Attributes
// =============================================================================

/// JsxAttribute*
fn attributes<P: ScriptParser>(p: &mut P) {
    loop {
        if p.at(SyntaxKind::L_BRACE) {
            p.start_node(SyntaxKind::JSX_SPREAD_ATTR);
            p.bump(); // {
            p.expect(SyntaxKind::DOT_DOT_DOT);
            assignment_expr_allow_in(p);
            p.expect(SyntaxKind::R_BRACE);
            p.finish_node();
        } else if p.current().is_identifier_name() {
            p.start_node(SyntaxKind::JSX_ATTR);
            jsx_name(p, "an attribute name");
            if p.eat(SyntaxKind::EQ) {
                attribute_value(p);
            }
            p.finish_node();
        } else {
            break;
        }
    }
}

/// JsxValue = JSX_STRING | '{' AssignmentExpression '}' | JsxElement
fn attribute_value<P: ScriptParser>(p: &mut P) {
    match p.current() {
        SyntaxKind::STRING | SyntaxKind::ERROR
            if p.current_text().starts_with(['"', '\'']) =>
        {
            p.relex_jsx_string();
            if p.at(SyntaxKind::JSX_STRING) {
                p.bump();
            } else {
                p.error_expected("an attribute value", ErrorCode::E0703);
            }
        }
        SyntaxKind::L_BRACE => expression_container(p, false),
        SyntaxKind::LT => jsx_element(p, false),
        _ => p.error_expected("an attribute value", ErrorCode::E0703),
    }
}

// =============================================================================
// Children
// =============================================================================

/// JsxChild* up to the closing tag of `parent`
fn children<P: ScriptParser>(p: &mut P, parent: &str) {
    loop {
        p.relex_jsx_child_text();
        match p.current() {
            SyntaxKind::LT if p.nth_at(1, SyntaxKind::SLASH) => break,
            SyntaxKind::LT => jsx_element(p, true),
            SyntaxKind::L_BRACE => expression_container(p, true),
            SyntaxKind::EOF => {
                if !p.has_failed() {
                    p.error_expected(&format!("closing tag for <{parent}>"), ErrorCode::E0702);
                }
                break;
            }
            _ => {
                p.error_expected("a child element", ErrorCode::E0702);
                break;
            }
        }
    }
}

/// '{' ('...'? Expression)? '}'
///
/// Empty containers (or comment-only ones) are only allowed as children.
fn expression_container<P: ScriptParser>(p: &mut P, in_children: bool) {
    p.start_node(SyntaxKind::JSX_EXPR_CONTAINER);
    p.bump(); // {
    if p.at(SyntaxKind::R_BRACE) {
        if !in_children {
            p.error_expected("an expression", ErrorCode::E0703);
        }
    } else {
        if in_children {
            p.eat(SyntaxKind::DOT_DOT_DOT);
        }
        expression_allow_in(p);
    }
    if !p.at(SyntaxKind::R_BRACE) {
        p.error_expected("'}'", ErrorCode::E0202);
    } else if in_children {
        p.bump_raw();
    } else {
        p.bump();
    }
    p.finish_node();
}

/// JsxClosing = '<' '/' JsxName '>'
fn closing<P: ScriptParser>(p: &mut P, name: &str, opening: TextRange, in_children: bool) {
    if p.has_failed() {
        return;
    }
    p.start_node(SyntaxKind::JSX_CLOSING);
    p.bump(); // <
    p.bump(); // /
    let start = p.current_range().start();
    let closing_name = if p.current().is_identifier_name() {
        Some(jsx_name(p, "a tag name"))
    } else {
        None
    };
    match closing_name {
        Some(found) if found == name => close_angle(p, in_children),
        Some(found) => {
            let range = TextRange::at(start, TextSize::of(found.as_str()));
            let found = format!("</{found}>");
            mismatched_closing(p, name, Some(&found), range, opening);
        }
        None => {
            let found = found_text(p);
            let range = p.current_range();
            mismatched_closing(p, name, found.as_deref(), range, opening);
        }
    }
    p.finish_node();
}

fn mismatched_closing<P: ScriptParser>(
    p: &mut P,
    name: &str,
    found: Option<&str>,
    range: TextRange,
    opening: TextRange,
) {
    let what = format!("closing tag for <{name}>");
    p.error(
        SyntaxError::expected(&what, found, range, ErrorCode::E0701)
            .with_related(RelatedInfo::new("opening tag here", opening)),
    );
}

#[cfg(test)]
mod tests {
    use crate::parser::{parse, ErrorCode, GrammarFlags, SyntaxKind};

    fn check(source: &str) {
        let parse = parse(source, GrammarFlags::markup());
        assert!(parse.ok(), "{source}: {:?}", parse.errors);
        assert_eq!(parse.syntax().to_string(), source);
    }

    #[test]
    fn test_elements_and_fragments() {
        check("const a = <div className=\"box\" data-id='1' aria-hidden>hello {name}!</div>;");
        check("const b = <><Item key={1} /><Item {...props} /></>;");
        check("const c = <Foo.Bar render={() => <span />}>{/* nothing */}</Foo.Bar>;");
        check("const d = <svg:rect width=\"10\" />;");
        check("const e = <ul>\n  {items.map(item => <li key={item.id}>{item.label}</li>)}\n</ul>;");
    }

    #[test]
    fn test_text_keeps_whitespace_and_entities() {
        check("const t = <p>  a &amp; b -- it's \"quoted\"  </p>;");
    }

    #[test]
    fn test_mismatched_closing_tag() {
        let parse = parse("const x = <div><span></div></span>;", GrammarFlags::markup());
        let error = parse.first_error().expect("error");
        assert_eq!(error.code, ErrorCode::E0701);
        assert_eq!(error.message, "expected closing tag for <span>, found '</div>'");
        assert_eq!(u32::from(error.offset()), 23);
        assert!(error.has_related());
    }

    #[test]
    fn test_unclosed_element() {
        let parse = parse("const x = <div><p>text</p>", GrammarFlags::markup());
        let error = parse.first_error().expect("error");
        assert_eq!(error.code, ErrorCode::E0702);
        assert_eq!(error.message, "expected closing tag for <div>, found end of input");
    }

    #[test]
    fn test_markup_needs_markup_grammar() {
        assert!(!parse("const a = <div />;", GrammarFlags::typed()).ok());
        assert!(!parse("const a = <div />;", GrammarFlags::plain()).ok());
    }

    #[test]
    fn test_generic_component() {
        let parse = parse("const el = <Select<Option> value={v} />;", GrammarFlags::markup());
        assert!(parse.ok(), "{:?}", parse.errors);
        assert!(parse.syntax().descendants().any(|n| n.kind() == SyntaxKind::TYPE_ARGS));
    }
}
