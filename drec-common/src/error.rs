//! Common error types for DreamRecords

use thiserror::Error;

/// Common result type for DreamRecords operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across DreamRecords crates
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Missing or invalid field in a write request (422-equivalent)
    #[error("{0}")]
    Validation(String),

    /// Backing service unreachable. Read paths degrade to sample data,
    /// write paths surface this as a hard error.
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}
