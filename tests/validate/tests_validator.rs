//! Validator properties that hold across dialects.

use crate::helpers::source_fixtures::{PLAIN_CASES, TYPED_CASES};
use jsnip::{Dialect, Position, ValidationResult, Validator, ValidatorOptions, validate, validate_bytes};
use rstest::rstest;

#[rstest]
#[case(Dialect::PlainScript)]
#[case(Dialect::TypedSuperset)]
#[case(Dialect::MarkupEmbedded)]
fn test_empty_text_is_valid(#[case] dialect: Dialect) {
    assert_eq!(validate("", dialect), ValidationResult::Valid);
}

#[test]
fn test_typed_superset_accepts_plain_scripts() {
    for case in PLAIN_CASES {
        assert_eq!(validate(case, Dialect::PlainScript), ValidationResult::Valid, "{case}");
        assert_eq!(validate(case, Dialect::TypedSuperset), ValidationResult::Valid, "{case}");
    }
}

#[test]
fn test_markup_accepts_typed_text() {
    for case in TYPED_CASES {
        assert!(validate(case, Dialect::MarkupEmbedded).is_valid(), "{case}");
    }
}

#[rstest]
#[case(b"\x00\x01binary".as_slice())]
#[case(b"GIF89a\x01\x00".as_slice())]
#[case(b"\xfe\xff\x00l\x00e\x00t".as_slice())]
#[case(b"let s = '\xe9';".as_slice())]
fn test_binary_input_is_not_text(#[case] bytes: &[u8]) {
    for dialect in Dialect::ALL {
        assert_eq!(validate_bytes(bytes, dialect), ValidationResult::invalid("not text", None));
    }
}

#[test]
fn test_invalid_position_is_one_indexed() {
    let text = "const ok = 1;\n\nfunction broken(a, {\n}";
    let result = validate(text, Dialect::PlainScript);
    assert!(!result.is_valid());
    assert_eq!(result.position().map(|p| p.line), Some(4));
}

#[test]
fn test_never_panics() {
    let inputs = [
        "(", ")", "[", "{", "}", "`", "`${", "/", "/*", "'", "\"", "<", "</", "<>", "=>", "...",
        "a?.", "a?.b?.(", "x => {", "async", "async (", "class", "class {", "@", "#", "#!",
        "import", "export", "new", "new.", "yield", "await", "for (", "for (let", "let [", "let {",
        "<div", "<div attr=", "<div>{", "<a></b>", "type", "type X", "enum", "abstract class",
        "\u{2028}", "\r", "\u{feff}", "😀", "a\u{200d}b", "1..toString()", "0x", "1e", ".5.5",
    ];
    for input in inputs {
        for dialect in Dialect::ALL {
            let first = validate(input, dialect);
            assert_eq!(first, validate(input, dialect), "{input:?}");
        }
    }
}

#[test]
fn test_deep_nesting_is_invalid_not_fatal() {
    let validator = Validator::with_options(ValidatorOptions::default().with_max_depth(64));
    let text = format!("f({}0{});", "[".repeat(200), "]".repeat(200));
    let result = validator.validate(&text, Dialect::TypedSuperset);
    assert_eq!(result.reason(), Some("nesting too deep"));
    assert!(matches!(result.position(), Some(Position { line: 1, .. })));
}

#[rstest]
#[case("x = ", "a + ", "a;")]
#[case("x = a", ".b", ";")]
#[case("x = a", "(b)", ";")]
#[case("x = ", "a || b && ", "c;")]
#[case("const n = value", " as T", ";")]
#[case("let t: T", "[]", ";")]
fn test_long_flat_chains_are_valid(#[case] head: &str, #[case] link: &str, #[case] tail: &str) {
    let text = format!("{head}{}{tail}", link.repeat(200_000));
    assert_eq!(validate(&text, Dialect::TypedSuperset), ValidationResult::Valid);
}

#[rstest]
#[case("new ")]
#[case("a ** ")]
#[case("!")]
fn test_long_right_nesting_is_too_deep(#[case] link: &str) {
    let text = format!("x = {}a;", link.repeat(100_000));
    let result = validate(&text, Dialect::PlainScript);
    assert_eq!(result.reason(), Some("nesting too deep"));
}

#[cfg(feature = "serde")]
#[test]
fn test_result_serializes_with_status_tag() {
    let valid = serde_json::to_value(ValidationResult::Valid).expect("serialize");
    assert_eq!(valid, serde_json::json!({ "status": "valid" }));

    let invalid = ValidationResult::invalid("expected ';', found 'b'", Some(Position::new(2, 7)));
    let json = serde_json::to_value(&invalid).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "status": "invalid",
            "reason": "expected ';', found 'b'",
            "position": { "line": 2, "column": 7 }
        })
    );
}
