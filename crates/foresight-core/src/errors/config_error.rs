//! Configuration loading failures.

use super::error_code::{self, ForesightErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}")]
    FileNotFound { path: String },

    #[error("{path}: invalid TOML: {message}")]
    ParseError { path: String, message: String },

    /// A resolved value is out of range.
    #[error("{field}: {message}")]
    ValidationFailed { field: String, message: String },

    /// An environment variable could not be parsed into its field's type.
    #[error("{field} (environment): {message}")]
    InvalidValue { field: String, message: String },
}

impl ConfigError {
    /// Whether the file was read but is not valid TOML for `ForesightConfig`.
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, Self::ParseError { .. })
    }
}

impl ForesightErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } | Self::ParseError { .. } => error_code::CONFIG_ERROR,
            Self::ValidationFailed { .. } | Self::InvalidValue { .. } => {
                error_code::CONFIG_INVALID
            }
        }
    }
}
