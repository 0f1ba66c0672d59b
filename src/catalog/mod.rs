//! Example Catalog
//!
//! Ordered registry of the named example programs available to the
//! playground. The catalog is pure data: it is built once at process start
//! (from the bundled examples or a catalog file) and only answers lookups
//! afterwards.

mod builtin;

use crate::error::{Error, Result};
use crate::models::Example;

/// Ordered, read-only registry of playground examples
#[derive(Debug, Clone)]
pub struct ExampleCatalog {
    /// Examples in authoring order.
    ///
    /// Order matters: `names()` enumerates in this order for the selection
    /// UI, and when two entries share a trimmed source (an authoring error
    /// the catalog does not validate against) the first one wins.
    examples: Vec<Example>,
}

impl ExampleCatalog {
    /// Create the catalog of bundled examples
    pub fn builtin() -> Self {
        Self {
            examples: builtin::builtin_examples(),
        }
    }

    /// Create a catalog from externally supplied entries, preserving order
    pub fn from_entries(entries: Vec<Example>) -> Self {
        Self { examples: entries }
    }

    /// Enumerate example names in catalog order.
    ///
    /// The enumeration is stable for the process lifetime.
    pub fn names(&self) -> Vec<&str> {
        self.examples.iter().map(|ex| ex.name.as_str()).collect()
    }

    /// Look up an example by name.
    ///
    /// Names outside `names()` are a contract violation by the caller and
    /// fail with [`Error::ExampleNotFound`]; the catalog never silently
    /// substitutes a default.
    pub fn get(&self, name: &str) -> Result<&Example> {
        self.examples
            .iter()
            .find(|ex| ex.name == name)
            .ok_or_else(|| Error::ExampleNotFound {
                name: name.to_string(),
            })
    }

    /// Find the example whose canonical source equals the given text.
    ///
    /// Both sides are trimmed of leading/trailing whitespace before
    /// comparison; nothing else is normalized. Returns the first match in
    /// catalog order.
    pub fn lookup_by_source(&self, text: &str) -> Option<&Example> {
        self.examples.iter().find(|ex| ex.matches_source(text))
    }

    /// Iterate over the examples in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Example> {
        self.examples.iter()
    }

    /// Number of examples in the catalog
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// Check if the catalog has no examples
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }
}

impl Default for ExampleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
