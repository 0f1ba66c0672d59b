//! Contract tests for the example catalog and exact-match resolution
//!
//! These pin the properties the rendering surface relies on: bit-exact
//! output for canonical examples, trim-invariance, and a stable, ordered
//! name enumeration.

use banglacode_playground::{Error, Example, ExampleCatalog, Simulator};

#[test]
fn test_every_example_runs_to_its_stored_output() {
    let catalog = ExampleCatalog::builtin();
    let simulator = Simulator::default();

    for example in catalog.iter() {
        let lines = simulator.run(&example.source);
        assert_eq!(
            lines, example.output,
            "exact-match output mismatch for '{}'",
            example.name
        );
    }
}

#[test]
fn test_exact_match_is_trim_invariant() {
    let catalog = ExampleCatalog::builtin();
    let simulator = Simulator::default();

    for example in catalog.iter() {
        let padded = format!("\n\n   {}\t \n", example.source);
        let lines = simulator.run(&padded);
        assert_eq!(
            lines, example.output,
            "trim-invariance violated for '{}'",
            example.name
        );
    }
}

#[test]
fn test_name_enumeration_is_stable_and_ordered() {
    let catalog = ExampleCatalog::builtin();

    let first = catalog.names();
    let second = catalog.names();
    assert_eq!(first, second);
    assert_eq!(
        first,
        vec![
            "hello.bang",
            "fibonacci.bang",
            "homepage_demo.bang",
            "conditions.bang",
            "classes.bang",
        ]
    );
}

#[test]
fn test_get_by_unknown_name_is_a_contract_failure() {
    let catalog = ExampleCatalog::builtin();
    let err = catalog.get("does_not_exist.bang").unwrap_err();
    assert!(matches!(err, Error::ExampleNotFound { .. }));
}

#[test]
fn test_catalog_outputs_are_never_empty() {
    for example in ExampleCatalog::builtin().iter() {
        assert!(
            !example.output.is_empty(),
            "catalog example '{}' has empty output",
            example.name
        );
    }
}

#[test]
fn test_duplicate_trimmed_sources_resolve_to_first_entry() {
    let catalog = ExampleCatalog::from_entries(vec![
        Example::new("one.bang", "dekho(\"dup\");", vec!["dup".to_string()]),
        Example::new(
            "two.bang",
            "  dekho(\"dup\");  ",
            vec!["never shown".to_string()],
        ),
    ]);

    let simulator = Simulator::new(catalog);
    assert_eq!(simulator.run("dekho(\"dup\");"), vec!["dup"]);
}

#[test]
fn test_catalog_match_beats_pattern_rules() {
    // homepage_demo.bang contains a recognizable loop pattern; the catalog
    // entry must still win and return the stored lines verbatim.
    let simulator = Simulator::default();
    let example = simulator.catalog().get("homepage_demo.bang").unwrap().clone();

    assert_eq!(simulator.run(&example.source), example.output);
}
