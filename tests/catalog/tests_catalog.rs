//! Catalog ordering, replacement and revalidation.

use jsnip::{Catalog, Dialect, SharedCatalog, ValidatorOptions};

fn order(catalog: &Catalog) -> Vec<String> {
    catalog.list().map(|e| e.identifier().to_string()).collect()
}

#[test]
fn test_ingest_is_idempotent_in_shape() {
    let mut catalog = Catalog::new();
    let first = catalog.ingest("a", "let a: = 1;", "a.ts").clone();
    let second = catalog.ingest("a", "let a: = 1;", "a.ts").clone();
    assert_eq!(first.dialect(), second.dialect());
    assert_eq!(first.result(), second.result());
    assert_ne!(first.id(), second.id());
    assert_eq!(catalog.len(), 1);
}

#[test]
fn test_reingest_keeps_position() {
    let mut catalog = Catalog::new();
    for name in ["first", "second", "third"] {
        catalog.ingest(name, "ok();", "x.js");
    }
    catalog.ingest("first", "changed(", "x.js");
    assert_eq!(order(&catalog), ["first", "second", "third"]);
    assert!(!catalog.get("first").is_some_and(|e| e.is_valid()));
}

#[test]
fn test_dialect_is_fixed_at_ingestion() {
    let mut catalog = Catalog::new();
    catalog.ingest("snippet", "const x = <b>{y}</b>;", "snippet");
    let entry = catalog.revalidate("snippet").map(|e| (e.dialect(), e.is_valid()));
    assert_eq!(entry, Some((Dialect::MarkupEmbedded, true)));
}

#[test]
fn test_sniffing_without_extension() {
    let mut catalog = Catalog::new();
    let dialects: Vec<Dialect> = [
        ("a", "console.log(1);"),
        ("b", "let n: number = 1;"),
        ("c", "render(<App />, root);"),
    ]
    .iter()
    .map(|(id, text)| catalog.ingest(id, text, id).dialect())
    .collect();
    assert_eq!(
        dialects,
        [Dialect::PlainScript, Dialect::TypedSuperset, Dialect::MarkupEmbedded]
    );
}

#[test]
fn test_evict_then_reingest_appends() {
    let mut catalog = Catalog::new();
    for name in ["a", "b", "c"] {
        catalog.ingest(name, "", "x.js");
    }
    catalog.evict("a");
    catalog.ingest("a", "", "x.js");
    assert_eq!(order(&catalog), ["b", "c", "a"]);
}

#[test]
fn test_options_flow_to_validation() {
    let mut catalog = Catalog::with_options(ValidatorOptions::default().with_hashbang(false));
    let entry = catalog.ingest("cli.js", "#!/usr/bin/env node\nrun();", "cli.js");
    assert!(!entry.is_valid());
    let mut catalog = Catalog::new();
    assert!(catalog.ingest("cli.js", "#!/usr/bin/env node\nrun();", "cli.js").is_valid());
}

#[test]
fn test_shared_catalog_round_trip() {
    let shared = SharedCatalog::from(Catalog::new());
    let writer = shared.clone();
    std::thread::spawn(move || {
        writer.ingest("bg.ts", "export interface A {}", "bg.ts");
    })
    .join()
    .expect("writer thread");
    let entry = shared.get("bg.ts").expect("ingested entry");
    assert_eq!(entry.dialect(), Dialect::TypedSuperset);
    assert!(entry.is_valid());
}
