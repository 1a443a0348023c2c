//! Error types for the data-loader crate.
//!
//! Uses thiserror to define the error enum, with one variant per failure
//! case and enough context to point at the offending line of the corpus.

use thiserror::Error;

/// Errors that can occur during corpus loading and parsing
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// I/O error occurred while reading the corpus file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in the corpus file couldn't be parsed
    ///
    /// This variant stores context about where the error occurred
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value:?}")]
    InvalidValue { field: String, value: String },

    /// A record has fewer fields than the column layout requires
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },

    /// Corpus validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
