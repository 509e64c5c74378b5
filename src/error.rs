//! Error types for Cellar
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using CellarError
pub type Result<T> = std::result::Result<T, CellarError>;

/// Unified error type for Cellar operations
#[derive(Debug, Error)]
pub enum CellarError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    #[error("Connection error: {0}")]
    Connection(String),

    // -------------------------------------------------------------------------
    // Store-Side Errors (surfaced verbatim, never retried)
    // -------------------------------------------------------------------------
    #[error("Table not found: {0}")]
    TableNotFound(String),

    #[error("Unknown column family '{family}' in table '{table}'")]
    UnknownFamily { table: String, family: String },

    // -------------------------------------------------------------------------
    // Caller Input Errors (detected locally, before any store call)
    // -------------------------------------------------------------------------
    #[error("Wrong column format: '{0}'")]
    ColumnFormat(String),

    #[error("Invalid table definition: {0}")]
    TableDefinition(String),
}
