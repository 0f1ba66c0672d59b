//! Playground Session State
//!
//! Explicit view-state for one playground surface: the selected example,
//! the editable source text, the latest run, and the is-running flag. The
//! session owns the run trigger and the artificial compile delay; the
//! simulator itself stays stateless.

use std::time::Duration;

use crate::catalog::ExampleCatalog;
use crate::config::PlaygroundConfig;
use crate::error::Result;
use crate::models::RunBlock;
use crate::simulator::Simulator;

/// Artificial compile latency applied before delivering results
pub const DEFAULT_COMPILE_DELAY_MS: u64 = 600;

/// Example selected when a session starts
pub const DEFAULT_EXAMPLE: &str = "hello.bang";

/// View-state for one playground editor/output pair
#[derive(Debug)]
pub struct PlaygroundSession {
    /// Simulator used for run requests
    simulator: Simulator,
    /// Name of the currently selected example
    selected_example: String,
    /// Editable source text
    code: String,
    /// Latest run, replaced wholesale on each trigger
    last_run: Option<RunBlock>,
    /// Run trigger is disabled while this is set
    is_running: bool,
    /// Unconditional delay before results are delivered
    compile_delay: Duration,
}

impl PlaygroundSession {
    /// Create a session over the given simulator, starting on the default
    /// example with its canonical source loaded and empty output.
    pub fn new(simulator: Simulator) -> Result<Self> {
        Self::with_start_example(simulator, DEFAULT_EXAMPLE, DEFAULT_COMPILE_DELAY_MS)
    }

    /// Create a session applying configured delay and start example
    pub fn with_config(simulator: Simulator, config: &PlaygroundConfig) -> Result<Self> {
        Self::with_start_example(
            simulator,
            &config.editor.default_example,
            config.run.compile_delay_ms,
        )
    }

    fn with_start_example(simulator: Simulator, example: &str, delay_ms: u64) -> Result<Self> {
        let code = simulator.catalog().get(example)?.source.clone();
        info!("playground session started on example '{}'", example);
        Ok(Self {
            simulator,
            selected_example: example.to_string(),
            code,
            last_run: None,
            is_running: false,
            compile_delay: Duration::from_millis(delay_ms),
        })
    }

    /// Name of the currently selected example
    pub fn selected_example(&self) -> &str {
        &self.selected_example
    }

    /// Current editable source text
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Output lines of the latest run (empty before any run completes)
    pub fn output(&self) -> &[String] {
        self.last_run
            .as_ref()
            .map(|run| run.output.as_slice())
            .unwrap_or(&[])
    }

    /// Latest run block, if any
    pub fn last_run(&self) -> Option<&RunBlock> {
        self.last_run.as_ref()
    }

    /// Whether a run's artificial delay is currently in flight
    pub fn is_running(&self) -> bool {
        self.is_running
    }

    /// Catalog backing the session's simulator
    pub fn catalog(&self) -> &ExampleCatalog {
        self.simulator.catalog()
    }

    /// Handle a reset request: replace the editable text with the named
    /// example's canonical source and clear prior output.
    ///
    /// Fails with [`Error::ExampleNotFound`](crate::error::Error) for names
    /// outside `catalog().names()` — a wiring bug in the caller.
    pub fn select_example(&mut self, name: &str) -> Result<()> {
        let source = self.simulator.catalog().get(name)?.source.clone();
        debug!("reset to example '{}'", name);
        self.selected_example = name.to_string();
        self.code = source;
        self.last_run = None;
        Ok(())
    }

    /// Replace the editable source text with a user edit
    pub fn set_code(&mut self, text: impl Into<String>) {
        self.code = text.into();
    }

    /// Handle a run request for the current editable text.
    ///
    /// Prior output is cleared immediately and the trigger is disabled for
    /// the duration of the artificial compile delay; the delay always
    /// completes (no cancellation path) and the computed lines then replace
    /// the output atomically. A trigger while a run is in flight is
    /// ignored.
    pub async fn run(&mut self) {
        if self.is_running {
            debug!("run trigger ignored: a run is already in flight");
            return;
        }

        self.is_running = true;
        let mut block = RunBlock::new(self.code.clone());
        block.mark_running();
        self.last_run = Some(block);

        // Simulated compilation latency
        tokio::time::sleep(self.compile_delay).await;

        let lines = self.simulator.run(&self.code);
        if let Some(run) = self.last_run.as_mut() {
            run.replace_output(lines);
            run.mark_completed(self.compile_delay);
        }
        self.is_running = false;
        info!(
            "run completed for '{}' ({} lines)",
            self.selected_example,
            self.output().len()
        );
    }
}
