//! Error handling for Foresight.
//! One error enum per fallible subsystem, `thiserror` only.
//! The calculators themselves never fail; only configuration loading and
//! repository access can.

pub mod config_error;
pub mod error_code;
pub mod source_error;

pub use config_error::ConfigError;
pub use error_code::ForesightErrorCode;
pub use source_error::{SourceError, SourceResult};
