//! Errors raised by external repositories feeding the engine.

use super::error_code::{self, ForesightErrorCode};

/// Failures reported by an evidence, trend, score-matrix or outcome source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("{source_name} unavailable: {message}")]
    Unavailable { source_name: String, message: String },

    #[error("{kind} not found: {id}")]
    NotFound { kind: String, id: String },

    #[error("malformed {kind} record {id}: {message}")]
    Malformed {
        kind: String,
        id: String,
        message: String,
    },
}

impl ForesightErrorCode for SourceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => error_code::SOURCE_UNAVAILABLE,
            Self::NotFound { .. } => error_code::NOT_FOUND,
            Self::Malformed { .. } => error_code::SOURCE_ERROR,
        }
    }
}

pub type SourceResult<T> = Result<T, SourceError>;
