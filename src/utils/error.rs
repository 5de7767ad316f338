//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Caller-contract violations detected before the tree builder runs
///
/// The aggregation pipeline itself never validates; these are raised by
/// `parser::validate_records` on behalf of the caller.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("Malformed module path (must be absolute): {0:?}")]
    MalformedPath(String),

    #[error("Duplicate module path: {0}")]
    DuplicatePath(String),

    #[error("No module records to aggregate")]
    EmptyInput,
}

/// Errors that can occur during stats parsing
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid stats format: {0}")]
    InvalidFormat(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
