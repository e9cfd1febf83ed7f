//! First-error messages and codes.

use jsnip::parser::{ErrorCode, GrammarFlags, parse};
use rstest::rstest;

fn first_error(input: &str, flags: GrammarFlags) -> (String, ErrorCode, u32) {
    let parse = parse(input, flags);
    let error = parse.first_error().expect("expected a syntax error");
    (error.message.clone(), error.code, u32::from(error.offset()))
}

#[rstest]
#[case(GrammarFlags::typed(), "function f(: number {", "expected a parameter name, found ':'", 11)]
#[case(GrammarFlags::plain(), "interface Foo {}", "expected ';', found 'Foo'", 10)]
#[case(GrammarFlags::plain(), "let x: number = 1;", "expected ';', found ':'", 5)]
#[case(GrammarFlags::typed(), "const a = f(1, 2;", "expected ')', found ';'", 16)]
fn test_error_messages(
    #[case] flags: GrammarFlags,
    #[case] input: &str,
    #[case] message: &str,
    #[case] offset: u32,
) {
    let (actual, _, at) = first_error(input, flags);
    assert_eq!(actual, message);
    assert_eq!(at, offset);
}

#[test]
fn test_return_outside_function() {
    let (message, code, _) = first_error("return 1;", GrammarFlags::plain());
    assert_eq!(message, "'return' outside of a function");
    assert_eq!(code, ErrorCode::E0405);
}

#[test]
fn test_break_outside_loop() {
    let (message, _, _) = first_error("break;", GrammarFlags::plain());
    assert_eq!(message, "'break' outside of a loop or switch");
}

#[test]
fn test_throw_line_break() {
    let (message, code, _) = first_error("throw\nerr;", GrammarFlags::plain());
    assert_eq!(message, "illegal line break after 'throw'");
    assert_eq!(code, ErrorCode::E0402);
}

#[test]
fn test_mismatched_closing_tag() {
    let (message, code, offset) = first_error("<div><span></div>", GrammarFlags::markup());
    assert_eq!(message, "expected closing tag for <span>, found '</div>'");
    assert_eq!(code, ErrorCode::E0701);
    assert_eq!(offset, 13);
}

#[test]
fn test_unterminated_string() {
    let (_, code, offset) = first_error("let s = 'open", GrammarFlags::plain());
    assert_eq!(code, ErrorCode::E0102);
    assert_eq!(offset, 8);
}
