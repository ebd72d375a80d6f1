//! Common error types for shelfdiff

use thiserror::Error;

/// Common result type for shelfdiff operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the shelfdiff workspace
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Upstream fetch failure (transport error or non-success status)
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Upstream payload could not be decoded (workbook, JSON shape)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid user input or malformed input sequence
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A label could not be coerced to comparable text.
    ///
    /// The built-in collaborators skip and count such rows at the parse
    /// boundary instead of raising; this variant exists for callers
    /// embedding the engine with their own ingestion.
    #[error("Normalization error: {0}")]
    Normalization(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}
