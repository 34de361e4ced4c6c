//! Integration tests: validate the Overpass fixture in `tests/fixtures/`.
//!
//! The fixture holds places inside Georgia (directly, through a region, and
//! through a cyclic pair of regions), a capital in Armenia, an orphan inside a
//! relation that is tagged `name=Georgia` rather than `int_name=Georgia`, and
//! non-node or non-place primitives carrying wrong names.
#![allow(clippy::expect_used)]

use std::path::PathBuf;

use toponym_core::{
    ContainmentChecker, Dataset, GeorgianToponymRule, MapFile, MapGraph, PrimitiveId, RuleId,
    Severity, ValidationResult, build_graph, validate,
};

fn load(name: &str) -> MapGraph {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    let content = std::fs::read_to_string(&path).expect("fixture file should be readable");
    let file = MapFile::from_json(&content).expect("fixture should parse");
    build_graph(file).expect("fixture should build")
}

fn run() -> ValidationResult {
    let graph = load("caucasus.json");
    let rule = GeorgianToponymRule::official().expect("official dataset");
    validate(&graph, &rule)
}

#[test]
fn fixture_builds_and_counts_dangling_members() {
    let graph = load("caucasus.json");
    assert_eq!(graph.primitive_count(), 16);
    assert_eq!(graph.skipped_members(), 1);
}

#[test]
fn fixture_findings() {
    let result = run();
    let reported: Vec<(PrimitiveId, RuleId, &str)> = result
        .findings()
        .iter()
        .map(|f| (f.location.primitive_id(), f.rule_id, f.value.as_str()))
        .collect();
    assert_eq!(
        reported,
        vec![
            (PrimitiveId::node(103), RuleId::WrongNameEn, "Tiflis"),
            (PrimitiveId::node(104), RuleId::WrongNameKa, "ქუთაისსი"),
            (PrimitiveId::node(104), RuleId::WrongNameEn, "Kutais"),
        ]
    );
    assert!(result.findings().iter().all(|f| f.severity == Severity::Warning));
    assert!(!result.has_errors());
}

#[test]
fn fixture_containment() {
    let graph = load("caucasus.json");
    let dataset = Dataset::official().expect("official dataset");
    let checker = ContainmentChecker::new(dataset.boundary());
    let contained = |id: PrimitiveId| {
        let p = graph.get(id).expect("fixture primitive");
        checker.is_contained(&p)
    };

    assert!(contained(PrimitiveId::node(101)));
    assert!(contained(PrimitiveId::node(102)));
    assert!(contained(PrimitiveId::node(104)));
    assert!(contained(PrimitiveId::way(5001)));
    assert!(!contained(PrimitiveId::node(201)));
    assert!(!contained(PrimitiveId::node(301)));

    let kutaisi = graph.get(PrimitiveId::node(104)).expect("fixture primitive");
    assert_eq!(
        checker.containment_path(&kutaisi),
        Some(vec![
            PrimitiveId::node(104),
            PrimitiveId::relation(1002),
            PrimitiveId::relation(1003),
            PrimitiveId::relation(28699),
        ])
    );
}
