//! Error types for the service core.

use thiserror::Error;

/// Errors raised while reading configuration or installing process-wide state.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid value for {key}: {reason}")]
    InvalidEnv { key: String, reason: String },

    #[error("Unknown log format: {0} (expected `text` or `json`)")]
    UnknownLogFormat(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
