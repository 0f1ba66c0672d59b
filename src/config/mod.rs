//! Configuration management for the playground
//!
//! This module provides configuration for the execution simulator and its
//! surrounding session: run behavior (compile delay, output limits) and
//! editor defaults, plus loading of configuration and catalog files from
//! standard locations.

pub mod loader;

pub use loader::{ConfigLoader, LoadOptions};

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::session::{DEFAULT_COMPILE_DELAY_MS, DEFAULT_EXAMPLE};

/// Upper bound for the configurable compile delay
const MAX_COMPILE_DELAY_MS: u64 = 60_000;

/// Main configuration structure for the playground
///
/// Missing sections in a configuration file fall back to their defaults
/// during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlaygroundConfig {
    /// Run behavior configuration
    #[serde(default)]
    pub run: RunConfig,

    /// Editor/session configuration
    #[serde(default)]
    pub editor: EditorConfig,
}

/// Run behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Artificial compile latency in milliseconds
    #[serde(default = "default_compile_delay_ms")]
    pub compile_delay_ms: u64,

    /// Cap on lines the loop rule may synthesize (None = unbounded)
    #[serde(default)]
    pub max_output_lines: Option<usize>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            compile_delay_ms: DEFAULT_COMPILE_DELAY_MS,
            max_output_lines: None,
        }
    }
}

impl RunConfig {
    /// Compile delay as a [`Duration`]
    pub fn compile_delay(&self) -> Duration {
        Duration::from_millis(self.compile_delay_ms)
    }
}

/// Editor/session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Example loaded when a session starts
    #[serde(default = "default_example_name")]
    pub default_example: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_example: DEFAULT_EXAMPLE.to_string(),
        }
    }
}

fn default_compile_delay_ms() -> u64 {
    DEFAULT_COMPILE_DELAY_MS
}

fn default_example_name() -> String {
    DEFAULT_EXAMPLE.to_string()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid compile delay: {0} ms (maximum 60000)")]
    InvalidCompileDelay(u64),

    #[error("Invalid output limit: 0 (must be at least 1 when set)")]
    InvalidOutputLimit,

    #[error("Default example name cannot be empty")]
    EmptyDefaultExample,
}

impl ConfigError {
    /// Configuration field the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::InvalidCompileDelay(_) => "run.compile_delay_ms",
            ConfigError::InvalidOutputLimit => "run.max_output_lines",
            ConfigError::EmptyDefaultExample => "editor.default_example",
        }
    }
}

impl PlaygroundConfig {
    /// Validate all configuration values
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.run.compile_delay_ms > MAX_COMPILE_DELAY_MS {
            return Err(ConfigError::InvalidCompileDelay(self.run.compile_delay_ms));
        }
        if self.run.max_output_lines == Some(0) {
            return Err(ConfigError::InvalidOutputLimit);
        }
        if self.editor.default_example.trim().is_empty() {
            return Err(ConfigError::EmptyDefaultExample);
        }
        Ok(())
    }
}
