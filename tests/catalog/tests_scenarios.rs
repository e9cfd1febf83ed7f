//! End-to-end ingestion scenarios.

use jsnip::samples;
use jsnip::{Catalog, Dialect, Position, ValidationResult};

#[test]
fn test_scenario_plain_script() {
    let mut catalog = Catalog::new();
    let entry = catalog.ingest(
        "greet.js",
        "function greet(name){ return `Hello, ${name}!`; }",
        "greet.js",
    );
    assert_eq!(entry.dialect(), Dialect::PlainScript);
    assert_eq!(entry.result(), &ValidationResult::Valid);
}

#[test]
fn test_scenario_malformed_parameter_list() {
    let mut catalog = Catalog::new();
    let entry = catalog.ingest("bad.ts", "function f(: number {", "bad.ts");
    assert_eq!(entry.dialect(), Dialect::TypedSuperset);
    assert_eq!(
        entry.result(),
        &ValidationResult::invalid("expected a parameter name, found ':'", Some(Position::new(1, 12)))
    );
}

#[test]
fn test_scenario_component() {
    let mut catalog = Catalog::new();
    let entry = catalog.ingest("card.tsx", "<div>{x}</div>", "card.tsx");
    assert_eq!(entry.dialect(), Dialect::MarkupEmbedded);
    assert_eq!(entry.result(), &ValidationResult::Valid);
}

#[test]
fn test_scenario_binary() {
    let mut catalog = Catalog::new();
    let entry = catalog.ingest("x", "\x00\x01binary", "x.unknown");
    assert_eq!(entry.result().reason(), Some("not text"));
    assert_eq!(entry.result().position(), None);
}

#[test]
fn test_samples_ingest_clean() {
    let mut catalog = Catalog::new();
    for sample in samples::ALL {
        let entry = catalog.ingest(sample.filename, sample.text, sample.filename);
        assert_eq!(entry.dialect(), sample.dialect);
        assert!(entry.is_valid(), "{}: {}", sample.filename, entry.result());
    }
    let summary = catalog.summary();
    assert_eq!((summary.total, summary.valid), (3, 3));
    for dialect in Dialect::ALL {
        assert_eq!(summary.dialect_count(dialect), 1);
    }
}
