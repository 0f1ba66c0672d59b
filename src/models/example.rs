//! Example Model
//!
//! A named, catalog-defined pairing of canonical source text and the exact
//! output lines the playground displays when that source is run verbatim.
//! Examples are defined at process start and never mutated.

use serde::{Deserialize, Serialize};

/// A named example program with its precomputed expected output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// Unique name shown in the example selector (e.g. "hello.bang")
    pub name: String,

    /// Canonical source text; whitespace is significant for matching
    pub source: String,

    /// Ordered output lines displayed when `source` is matched verbatim.
    /// Never empty for a catalog-defined example.
    pub output: Vec<String>,
}

impl Example {
    /// Create a new example
    pub fn new(
        name: impl Into<String>,
        source: impl Into<String>,
        output: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            output,
        }
    }

    /// Compare user text against the canonical source.
    ///
    /// Both sides are trimmed of leading/trailing whitespace; no other
    /// normalization (whitespace collapsing, comment stripping) is applied.
    pub fn matches_source(&self, text: &str) -> bool {
        self.source.trim() == text.trim()
    }

    /// Number of expected output lines
    pub fn output_line_count(&self) -> usize {
        self.output.len()
    }
}
