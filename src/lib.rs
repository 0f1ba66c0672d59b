//! BanglaCode Playground - execution simulation for the documentation site
//!
//! This library provides the logic behind the "Run Code" button of the
//! BanglaCode documentation playground: given arbitrary source text typed
//! by a user, decide what output lines to display. It is a best-effort
//! simulator, not an interpreter - canonical examples resolve to their
//! precomputed output, a small set of surface patterns is recognized
//! directly, and everything else degrades to a fixed diagnostic.
//!
//! ## Module Organization
//!
//! ### Core Functionality
//!
//! - [`catalog`] - Ordered registry of named example programs
//! - [`simulator`] - The recognition-rule cascade that produces output lines
//! - [`session`] - View-state: selected example, editable text, run trigger
//! - [`models`] - Data structures (Example, RunBlock)
//! - [`mod@error`] - Error types and Result aliases
//!
//! ### Utilities
//!
//! - [`config`] - Configuration loading, run behavior, catalog files
//!
//! ## Quick Start
//!
//! ```no_run
//! use banglacode_playground::init;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Initialize a session on the default example
//! let mut session = init()?;
//!
//! // Simulate a run of the current editor contents
//! session.run().await;
//! for line in session.output() {
//!     println!("$ {}", line);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Simulation model
//!
//! A run is resolved by the first rule that yields output: exact catalog
//! match, counted-loop synthesis, flat literal-print extraction, then the
//! fallback diagnostic. An artificial compile delay (600 ms by default)
//! precedes result delivery; the run trigger stays disabled for that
//! window and the output list is replaced atomically when it elapses.
//! At most one run is ever in flight.

#[macro_use]
extern crate tracing;

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod simulator;

// Re-exports for core functionality
pub use catalog::ExampleCatalog;
pub use config::{ConfigLoader, PlaygroundConfig};
pub use error::{Error, Result};
pub use models::{Example, RunBlock, RunStatus};
pub use session::PlaygroundSession;
pub use simulator::Simulator;

// Version information
/// The current version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The crate name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// The crate description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Initialize a playground session with default settings
///
/// Performs the following steps:
/// 1. Loads configuration from the default locations, falling back to
///    defaults when no file exists or loading fails
/// 2. Builds the bundled example catalog
/// 3. Wires a simulator and a session starting on the default example
///
/// # Errors
///
/// Returns an error if the configured default example is not present in
/// the catalog.
pub fn init() -> Result<PlaygroundSession> {
    info!("Initializing {} v{}", NAME, VERSION);

    let config = match ConfigLoader::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load configuration: {}. Using defaults", e);
            PlaygroundConfig::default()
        }
    };

    build_session(ExampleCatalog::builtin(), &config)
}

/// Initialize a playground session from a specific configuration file
pub fn init_with_config(config_path: &std::path::Path) -> Result<PlaygroundSession> {
    info!(
        "Initializing {} v{} with config: {}",
        NAME,
        VERSION,
        config_path.display()
    );

    if !config_path.exists() {
        return Err(Error::ConfigLoadFailed {
            path: config_path.to_path_buf(),
            reason: "Configuration file does not exist".to_string(),
        });
    }

    let config = ConfigLoader::load_from_path(config_path)?;
    config
        .validate()
        .map_err(|e| Error::ConfigValidationFailed {
            field: e.field().to_string(),
            reason: e.to_string(),
        })?;

    build_session(ExampleCatalog::builtin(), &config)
}

/// Wire a session over a catalog with the given configuration
pub fn build_session(
    catalog: ExampleCatalog,
    config: &PlaygroundConfig,
) -> Result<PlaygroundSession> {
    let mut simulator = Simulator::new(catalog);
    if let Some(limit) = config.run.max_output_lines {
        simulator = simulator.with_output_limit(limit);
    }
    PlaygroundSession::with_config(simulator, config)
}

/// Install a tracing subscriber reading `RUST_LOG`
///
/// Intended for embedding applications and examples; calling it more than
/// once is harmless (later calls are ignored).
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

/// Get default configuration
///
/// Returns a `PlaygroundConfig` with all default values. Useful for
/// testing or for inspecting the defaults.
///
/// # Examples
///
/// ```
/// use banglacode_playground::default_config;
///
/// let config = default_config();
/// assert_eq!(config.run.compile_delay_ms, 600);
/// ```
pub fn default_config() -> PlaygroundConfig {
    PlaygroundConfig::default()
}
