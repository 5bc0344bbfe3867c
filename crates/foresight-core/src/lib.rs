//! # foresight-core
//!
//! Shared vocabulary, value types, repository traits, errors, configuration,
//! tracing and constants for the Foresight predictive intelligence engine.
//!
//! The engines in `foresight-engine` depend only on this crate. Nothing here
//! performs I/O except configuration loading.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;
