//! Error types for albumd

use thiserror::Error;

/// Convenience Result type using the albumd Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the storage layer and startup path
#[derive(Error, Debug)]
pub enum Error {
    /// Database connection or query errors (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// File I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Insert collided with an existing primary key
    #[error("Album already exists: {0}")]
    Conflict(String),
}
