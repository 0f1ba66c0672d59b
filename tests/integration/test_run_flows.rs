//! Integration tests for complete playground run flows
//!
//! These exercise the session end-to-end: run trigger, compile delay,
//! output replacement, reset, and the run/edit/run cycle a user goes
//! through in the playground UI.

use std::time::Duration;

use banglacode_playground::{
    build_session, default_config, ExampleCatalog, PlaygroundConfig, PlaygroundSession,
    RunStatus, Simulator,
};

fn instant_session() -> PlaygroundSession {
    let mut config = default_config();
    config.run.compile_delay_ms = 0;
    build_session(ExampleCatalog::builtin(), &config).unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_run_on_default_example_returns_canonical_output() {
    let mut session = build_session(ExampleCatalog::builtin(), &default_config()).unwrap();

    session.run().await;

    let expected = session.catalog().get("hello.bang").unwrap().output.clone();
    assert_eq!(session.output(), expected.as_slice());
    assert!(!session.is_running());
}

#[tokio::test(start_paused = true)]
async fn test_run_waits_for_the_compile_delay() {
    let mut session = build_session(ExampleCatalog::builtin(), &default_config()).unwrap();

    let start = tokio::time::Instant::now();
    session.run().await;

    // The default artificial delay is 600 ms and is unconditional, even
    // for catalog hits.
    assert!(start.elapsed() >= Duration::from_millis(600));
}

#[tokio::test(start_paused = true)]
async fn test_configured_delay_is_applied() {
    let mut config = default_config();
    config.run.compile_delay_ms = 50;
    let mut session = build_session(ExampleCatalog::builtin(), &config).unwrap();

    let start = tokio::time::Instant::now();
    session.run().await;

    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(50));
    assert!(elapsed < Duration::from_millis(600));
}

#[tokio::test]
async fn test_edit_then_run_uses_pattern_simulation() {
    let mut session = instant_session();

    session.set_code(r#"jotokkhon (i < 4) { dekho("Gona: " + i); i = i + 1; }"#);
    session.run().await;

    assert_eq!(session.output(), ["Gona: 0", "Gona: 1", "Gona: 2", "Gona: 3"]);
}

#[tokio::test]
async fn test_flat_prints_run_in_source_order() {
    let mut session = instant_session();

    session.set_code(r#"dekho("a"); dekho("b"); dekho("c");"#);
    session.run().await;

    assert_eq!(session.output(), ["a", "b", "c"]);
}

#[tokio::test]
async fn test_unrecognized_code_gets_the_fallback_diagnostic() {
    let mut session = instant_session();

    session.set_code("totally random text with no recognizable shape");
    session.run().await;
    let first = session.output().to_vec();

    session.set_code("ekdom onno rokom lekha");
    session.run().await;

    // Same 4-line diagnostic regardless of the unrecognized input
    assert_eq!(first.len(), 4);
    assert_eq!(session.output(), first.as_slice());
}

#[tokio::test]
async fn test_run_is_idempotent() {
    let mut session = instant_session();
    session.set_code(r#"dekho("bar bar");"#);

    session.run().await;
    let first = session.output().to_vec();
    session.run().await;

    assert_eq!(session.output(), first.as_slice());
}

#[tokio::test]
async fn test_run_replaces_output_wholesale() {
    let mut session = instant_session();

    session.set_code(r#"dekho("one"); dekho("two");"#);
    session.run().await;
    assert_eq!(session.output().len(), 2);

    session.set_code(r#"dekho("only");"#);
    session.run().await;

    // No lines from the previous run survive
    assert_eq!(session.output(), ["only"]);
}

#[tokio::test]
async fn test_reset_restores_canonical_source_and_clears_output() {
    let mut session = instant_session();

    session.set_code("dekho(\"edited\");");
    session.run().await;
    assert!(!session.output().is_empty());

    session.select_example("classes.bang").unwrap();

    assert_eq!(session.selected_example(), "classes.bang");
    assert!(session.output().is_empty());
    assert_eq!(
        session.code(),
        session.catalog().get("classes.bang").unwrap().source
    );
}

#[tokio::test]
async fn test_completed_run_records_status_and_duration() {
    let mut config = default_config();
    config.run.compile_delay_ms = 25;
    let mut session = build_session(ExampleCatalog::builtin(), &config).unwrap();

    session.run().await;

    let run = session.last_run().unwrap();
    assert_eq!(run.status, RunStatus::Completed);
    assert_eq!(run.duration, Some(Duration::from_millis(25)));
    assert_eq!(run.source, session.code());
}

#[tokio::test]
async fn test_configured_output_limit_caps_loop_synthesis() {
    let mut config = default_config();
    config.run.compile_delay_ms = 0;
    config.run.max_output_lines = Some(3);
    let mut session = build_session(ExampleCatalog::builtin(), &config).unwrap();

    session.set_code(r#"jotokkhon (i < 1000) { dekho("n" + i); i = i + 1; }"#);
    session.run().await;

    assert_eq!(session.output(), ["n0", "n1", "n2"]);
}

#[tokio::test]
async fn test_session_over_custom_catalog() {
    use banglacode_playground::Example;

    let catalog = ExampleCatalog::from_entries(vec![Example::new(
        "custom.bang",
        "dekho(\"custom output\");",
        vec!["custom output".to_string()],
    )]);

    let mut config = default_config();
    config.run.compile_delay_ms = 0;
    config.editor.default_example = "custom.bang".to_string();

    let mut session = build_session(catalog, &config).unwrap();
    session.run().await;

    assert_eq!(session.output(), ["custom output"]);
}

#[tokio::test]
async fn test_simulator_stays_stateless_across_sessions() {
    let simulator = Simulator::default();

    let loop_src = r#"jotokkhon (i < 2) { dekho("x" + i); i = i + 1; }"#;
    let before = simulator.run(loop_src);

    // Interleave unrelated runs, then repeat the original input
    simulator.run("garbage");
    simulator.run(r#"dekho("other");"#);
    let after = simulator.run(loop_src);

    assert_eq!(before, after);
}

#[tokio::test]
async fn test_run_flow_matches_config_struct_shape() {
    // A PlaygroundConfig parsed from user TOML drives the same flow
    let config: PlaygroundConfig = toml::from_str(
        r#"
[run]
compile_delay_ms = 0

[editor]
default_example = "conditions.bang"
"#,
    )
    .unwrap();

    let mut session = build_session(ExampleCatalog::builtin(), &config).unwrap();
    assert_eq!(session.selected_example(), "conditions.bang");

    session.run().await;
    assert_eq!(session.output(), ["Grade: B", "Score: 85"]);
}
