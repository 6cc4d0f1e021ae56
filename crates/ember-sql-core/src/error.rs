//! Error types for statement compilation.

use thiserror::Error;

/// Errors produced while compiling a statement.
///
/// None of these are transient: the same inputs always produce the same
/// outcome, so callers must not retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The target dialect has no native REPLACE semantics.
    #[error("dialect {dialect} does not support REPLACE")]
    UnsupportedOperation {
        /// Name of the rejected dialect.
        dialect: &'static str,
    },

    /// The schema declares no primary key, so REPLACE is undefined.
    #[error("table {table} has no primary key")]
    MissingPrimaryKey {
        /// Table name.
        table: String,
    },

    /// The assignment contains no columns.
    #[error("no columns assigned for table {table}")]
    EmptyAssignment {
        /// Table name.
        table: String,
    },

    /// The assignment references a column absent from the schema.
    #[error("unknown column {column} on table {table}")]
    UnknownColumn {
        /// Table name.
        table: String,
        /// The undeclared column name.
        column: String,
    },
}

impl CompileError {
    /// Returns whether this is a caller-input error, as opposed to a
    /// dialect capability gap.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        !matches!(self, Self::UnsupportedOperation { .. })
    }
}

/// Result type alias for compilation.
pub type Result<T> = std::result::Result<T, CompileError>;
