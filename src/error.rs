//! Error types for smarttime.

use thiserror::Error;

/// Errors that can occur in smarttime operations.
#[derive(Debug, Error)]
pub enum SmarttimeError {
    /// Configuration problem (missing key, bad config file, terminal setup).
    #[error("{0}")]
    Config(String),

    /// Filesystem I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted blob or JSON payload could not be parsed.
    #[error("failed to parse data: {0}")]
    Parse(#[from] serde_json::Error),

    /// A referenced item does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// User input was rejected at the boundary.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation was requested in a state that does not allow it.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// The AI decomposition service failed for any reason.
    #[error("AI service is temporarily unavailable, please try again later")]
    ServiceUnavailable,
}
