//! Error types for recording sessions and clip writers.

use thiserror::Error;

/// Errors raised while configuring a recording session.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecorderError {
    #[error("invalid recorder configuration: {reason}")]
    InvalidConfiguration { reason: String },
    #[error("recorder config parse error: {0}")]
    ConfigParse(String),
}

impl RecorderError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        RecorderError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// Errors produced by the bundled [`ClipWriter`](crate::writer::ClipWriter) implementations.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("serialize recorded clip: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("write recorded clip: {0}")]
    Io(#[from] std::io::Error),
}
