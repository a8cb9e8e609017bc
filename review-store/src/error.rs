//! Error types for review storage

use thiserror::Error;

/// Storage error types
#[derive(Error, Debug)]
pub enum Error {
    /// SQLx database error
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// IO error (e.g. creating the database directory)
    #[error("IO error: {0}")]
    Io(String),

    /// Not found error
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for storage operations
pub type Result<T> = std::result::Result<T, Error>;
