//! Error types for data file loading.

use thiserror::Error;

/// Errors that can occur when loading tuning or enemy data.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// File parsed but holds a value the game cannot use.
    #[error("Invalid value in '{path}': {details}")]
    InvalidValue { path: String, details: String },
}
