//! Core data models for the playground
//!
//! This module contains the data structures that represent the domain
//! entities of the execution simulator: catalog examples and the run
//! blocks produced when a user triggers a simulated execution.

pub mod example;
pub mod run_block;

// Re-exports for convenience
pub use example::Example;
pub use run_block::{RunBlock, RunStatus};
