//! Run Block Model
//!
//! Represents a single user-triggered simulated run and its replacement
//! output sequence. The output is replaced wholesale when the run
//! completes, never appended to incrementally.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Status of a simulated run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RunStatus {
    /// Run has been created but not started
    #[default]
    Pending,
    /// The artificial compile delay is in flight
    Running,
    /// Output has been delivered
    Completed,
}

/// A single simulated run: submitted source and the lines it produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunBlock {
    /// Unique identifier for the run
    pub id: String,

    /// The source text that was submitted
    pub source: String,

    /// Ordered output lines; empty until the run completes
    pub output: Vec<String>,

    /// When the run was triggered (in local time)
    pub timestamp: DateTime<Local>,

    /// Pending, running, or completed
    pub status: RunStatus,

    /// Simulated compile latency (None if still running)
    pub duration: Option<Duration>,
}

impl RunBlock {
    /// Create a new run block for the given source text
    pub fn new(source: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            source,
            output: Vec::new(),
            timestamp: Local::now(),
            status: RunStatus::Pending,
            duration: None,
        }
    }

    /// Mark the run as started
    pub fn mark_running(&mut self) {
        self.status = RunStatus::Running;
    }

    /// Mark the run as completed
    pub fn mark_completed(&mut self, duration: Duration) {
        self.status = RunStatus::Completed;
        self.duration = Some(duration);
    }

    /// Replace the output wholesale with the computed lines
    pub fn replace_output(&mut self, lines: Vec<String>) {
        self.output = lines;
    }

    /// Check if the run is still in flight
    pub fn is_running(&self) -> bool {
        matches!(self.status, RunStatus::Running)
    }

    /// Check if the run has delivered its output
    pub fn is_completed(&self) -> bool {
        matches!(self.status, RunStatus::Completed)
    }

    /// Get the total number of output lines
    pub fn output_line_count(&self) -> usize {
        self.output.len()
    }

    /// Get the output joined into a single string
    pub fn plain_output(&self) -> String {
        self.output.join("\n")
    }
}

impl Default for RunBlock {
    fn default() -> Self {
        Self::new(String::new())
    }
}
