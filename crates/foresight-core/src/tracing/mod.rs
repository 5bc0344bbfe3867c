//! `tracing` subscriber setup. The engines only emit events; installing a
//! subscriber is left to whoever embeds them.

pub mod setup;

pub use setup::{init_tracing, init_tracing_with_default, DEFAULT_DIRECTIVE, LOG_ENV_VAR};
