//! Execution Simulation Engine
//!
//! Decides what output lines to display for arbitrary user source text.
//! This is not an interpreter: it resolves the bundled examples exactly and
//! otherwise recognizes a small set of surface patterns, degrading to a
//! fixed diagnostic when nothing matches.
//!
//! The engine is an ordered cascade of recognition rules, each a pure
//! `&str -> Option<Vec<String>>` function. The first rule that yields at
//! least one line wins:
//!
//! 1. Exact catalog match (trimmed equality against canonical sources)
//! 2. Counted `jotokkhon` loop with a templated `dekho` print
//! 3. Flat extraction of literal `dekho("...")` prints
//! 4. Fixed four-line fallback diagnostic
//!
//! No rule ever errors; a malformed or partial match simply contributes
//! nothing and the cascade proceeds.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::ExampleCatalog;

/// Counted-loop header: `jotokkhon ( <ident> < <integer> ) {`
static LOOP_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"jotokkhon\s*\(\s*(\w+)\s*<\s*(\d+)\s*\)\s*\{").unwrap());

/// Templated print call: `dekho("<literal>" + <ident>);`
static TEMPLATED_PRINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"dekho\("([^"]+)"\s*\+\s*(\w+)\);"#).unwrap());

/// Literal print call: `dekho("<literal>");`
static LITERAL_PRINT: Lazy<Regex> = Lazy::new(|| Regex::new(r#"dekho\("([^"]+)"\);"#).unwrap());

/// Diagnostic shown when no rule recognizes the input
const FALLBACK_LINES: [&str; 4] = [
    "Unrecognized code or custom logic.",
    "Note: This playground currently runs in simulation mode.",
    "Try the examples or specific patterns like:",
    r#"jotokkhon (i < 5) { dekho("Count: " + i); i = i + 1; }"#,
];

/// Execution simulator over a fixed example catalog
///
/// Holds no state between calls; `run` is idempotent and safe to invoke
/// repeatedly with different inputs.
#[derive(Debug, Clone)]
pub struct Simulator {
    /// Catalog used for exact-match resolution
    catalog: ExampleCatalog,
    /// Cap on synthesized loop lines (None = unbounded)
    max_output_lines: Option<usize>,
}

impl Simulator {
    /// Create a simulator over the given catalog
    pub fn new(catalog: ExampleCatalog) -> Self {
        Self {
            catalog,
            max_output_lines: None,
        }
    }

    /// Cap the number of lines the loop rule may synthesize
    pub fn with_output_limit(mut self, limit: usize) -> Self {
        self.max_output_lines = Some(limit);
        self
    }

    /// Get the catalog backing exact-match resolution
    pub fn catalog(&self) -> &ExampleCatalog {
        &self.catalog
    }

    /// Simulate a run of the given source text.
    ///
    /// Returns the ordered output lines to display. Never fails: input the
    /// cascade does not recognize produces the fallback diagnostic.
    pub fn run(&self, source: &str) -> Vec<String> {
        if let Some(example) = self.catalog.lookup_by_source(source) {
            debug!("run resolved by exact catalog match: '{}'", example.name);
            return example.output.clone();
        }

        if let Some(lines) = self.counted_loop_rule(source) {
            debug!("run resolved by counted-loop rule ({} lines)", lines.len());
            return lines;
        }

        if let Some(lines) = extract_literal_prints(source) {
            debug!("run resolved by literal-print rule ({} lines)", lines.len());
            return lines;
        }

        debug!("no rule matched; returning fallback diagnostic");
        fallback_lines()
    }

    /// Loop rule with the configured synthesis cap applied
    fn counted_loop_rule(&self, source: &str) -> Option<Vec<String>> {
        let mut lines = synthesize_counted_loop(source)?;
        if let Some(limit) = self.max_output_lines {
            lines.truncate(limit);
        }
        if lines.is_empty() {
            return None;
        }
        Some(lines)
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(ExampleCatalog::builtin())
    }
}

/// Recognize a counted loop whose body prints a prefixed counter.
///
/// Two captures must both be present somewhere in the text: a loop header
/// `jotokkhon (<var> < <bound>) {` and a templated print
/// `dekho("<prefix>" + <var>);`. The print is not required to sit inside
/// the loop body; only the identifier names are checked for equality.
/// When they match, one line `prefix + i` is synthesized for each `i` in
/// `0..bound` (bound exclusive, no separator).
///
/// Yields `None` when either capture is absent, the identifiers differ,
/// the bound does not fit a `u32`, or the bound is zero.
pub fn synthesize_counted_loop(source: &str) -> Option<Vec<String>> {
    let loop_caps = LOOP_HEADER.captures(source)?;
    let print_caps = TEMPLATED_PRINT.captures(source)?;

    let loop_var = &loop_caps[1];
    let printed_var = &print_caps[2];

    // Verify the printed identifier is the loop variable
    if loop_var != printed_var {
        return None;
    }

    let bound: u32 = loop_caps[2].parse().ok()?;
    let prefix = &print_caps[1];

    let lines: Vec<String> = (0..bound).map(|i| format!("{}{}", prefix, i)).collect();
    if lines.is_empty() {
        return None;
    }
    Some(lines)
}

/// Extract every literal print `dekho("...");` in source order.
///
/// Handles sequences of unconditional prints with no variables or control
/// flow, regardless of what other code surrounds them. Yields `None` when
/// no literal print occurs.
pub fn extract_literal_prints(source: &str) -> Option<Vec<String>> {
    let lines: Vec<String> = LITERAL_PRINT
        .captures_iter(source)
        .map(|caps| caps[1].to_string())
        .collect();
    if lines.is_empty() {
        return None;
    }
    Some(lines)
}

/// The fixed diagnostic emitted when no rule matches
pub fn fallback_lines() -> Vec<String> {
    FALLBACK_LINES.iter().map(|line| line.to_string()).collect()
}
