//! Grammar coverage per dialect, and the superset relation between them.

use crate::helpers::source_fixtures::{ANGLE_ASSERTION, MARKUP_CASES, PLAIN_CASES, TYPED_CASES};
use jsnip::parser::{GrammarFlags, parse};

fn parses(input: &str, flags: GrammarFlags) -> bool {
    let parse = parse(input, flags);
    if !parse.ok() {
        eprintln!("{input:?}: {:?}", parse.errors);
    }
    parse.ok()
}

#[test]
fn test_plain_cases_parse_in_every_grammar() {
    for case in PLAIN_CASES {
        assert!(parses(case, GrammarFlags::plain()), "plain: {case}");
        assert!(parses(case, GrammarFlags::typed()), "typed: {case}");
        assert!(parses(case, GrammarFlags::markup()), "markup: {case}");
    }
}

#[test]
fn test_typed_cases_need_type_syntax() {
    for case in TYPED_CASES {
        assert!(!parse(case, GrammarFlags::plain()).ok(), "plain accepted: {case}");
        assert!(parses(case, GrammarFlags::typed()), "typed: {case}");
        assert!(parses(case, GrammarFlags::markup()), "markup: {case}");
    }
}

#[test]
fn test_markup_cases_need_markup_grammar() {
    for case in MARKUP_CASES {
        assert!(parses(case, GrammarFlags::markup()), "markup: {case}");
        assert!(!parse(case, GrammarFlags::typed()).ok(), "typed accepted: {case}");
    }
}

#[test]
fn test_angle_assertion_collides_with_markup() {
    assert!(parses(ANGLE_ASSERTION, GrammarFlags::typed()));
    assert!(!parse(ANGLE_ASSERTION, GrammarFlags::markup()).ok());
}
