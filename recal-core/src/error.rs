//! Error types for the recal ecosystem.

use thiserror::Error;

/// Errors that can occur when building or expanding repeating events.
#[derive(Error, Debug)]
pub enum RecalError {
    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time '{0}'. Expected HH:MM")]
    InvalidTime(String),

    #[error("Repeat interval must be at least 1")]
    InvalidInterval,
}

/// Result type alias for recal operations.
pub type RecalResult<T> = Result<T, RecalError>;
