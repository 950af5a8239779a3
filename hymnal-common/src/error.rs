//! Common error types for the hymnal crates

use thiserror::Error;

/// Common result type for hymnal operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the hymnal crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON document could not be encoded or decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog file could not be parsed
    #[error("Catalog error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested item not found (tag position, history date, hymn number)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input (empty tag name, bad date, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Loaded document is well-formed but violates the data model
    #[error("Malformed data in {path}: {reason}")]
    Malformed { path: String, reason: String },

    /// Report rendering failed
    #[error("Report error: {0}")]
    Report(String),
}
