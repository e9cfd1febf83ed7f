//! The CST keeps every byte of the input, whether or not it parses.

use crate::helpers::source_fixtures::{MARKUP_CASES, PLAIN_CASES, TYPED_CASES};
use jsnip::parser::{GrammarFlags, SyntaxKind, parse};
use rstest::rstest;

#[test]
fn test_valid_inputs_round_trip() {
    let cases = PLAIN_CASES.iter().chain(TYPED_CASES).chain(MARKUP_CASES);
    for case in cases {
        let parse = parse(case, GrammarFlags::markup());
        assert_eq!(parse.syntax().to_string(), *case);
        assert_eq!(parse.syntax().kind(), SyntaxKind::SOURCE_FILE);
    }
}

#[rstest]
#[case("function f(: number {")]
#[case("let = ;")]
#[case("const s = 'unterminated\nnext();")]
#[case("<div><span></div>")]
#[case("if (a) {")]
#[case("x = `open ${ y")]
#[case("}}}}")]
#[case("\u{feff}let é = 'ü' +")]
fn test_invalid_inputs_round_trip(#[case] input: &str) {
    let parse = parse(input, GrammarFlags::markup());
    assert!(!parse.ok());
    assert_eq!(parse.errors.len(), 1);
    assert_eq!(parse.syntax().to_string(), input);
}
