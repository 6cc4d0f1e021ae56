//! Error types for statement execution.

use thiserror::Error;

/// Errors produced while executing a compiled statement.
#[derive(Debug, Error)]
pub enum ExecuteError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The statement was compiled for a different dialect.
    #[error("statement was compiled for dialect {actual}, not {expected}")]
    DialectMismatch {
        /// Dialect this sink executes.
        expected: &'static str,
        /// Dialect the statement was compiled for.
        actual: &'static str,
    },
}

/// Result type alias for execution.
pub type Result<T> = std::result::Result<T, ExecuteError>;
