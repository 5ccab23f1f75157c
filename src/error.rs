//! Error types for quote input handling.
//!
//! The pricing core never fails; these errors belong to the boundary that
//! reads and converts input documents.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for quote input processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// General parse error (-3)
    ParseError = -3,
    /// Material catalog is empty (-11)
    NoMaterials = -11,
    /// Required column missing (E100)
    MissingField = 100,
    /// Column value unusable (E101)
    InvalidValue = 101,
}

/// Main error type for quote input handling.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Parse error at line {line}, column {column}: {message}")]
    ParseError {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Missing required field '{field}' in {section}")]
    MissingField { section: String, field: String },

    #[error("Invalid value for '{field}': expected {expected}, got '{value}'")]
    InvalidValue {
        field: String,
        expected: String,
        value: String,
    },

    #[error("Material catalog is empty")]
    NoMaterials,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuoteError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            QuoteError::FileNotFound { .. } => ErrorCode::FileNotFound,
            QuoteError::EmptyFile { .. } => ErrorCode::EmptyFile,
            QuoteError::ParseError { .. } => ErrorCode::ParseError,
            QuoteError::MissingField { .. } => ErrorCode::MissingField,
            QuoteError::InvalidValue { .. } => ErrorCode::InvalidValue,
            QuoteError::NoMaterials => ErrorCode::NoMaterials,
            QuoteError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }

    /// Shorthand for a missing column.
    pub fn missing(section: impl Into<String>, field: impl Into<String>) -> Self {
        QuoteError::MissingField {
            section: section.into(),
            field: field.into(),
        }
    }
}

impl From<serde_json::Error> for QuoteError {
    fn from(err: serde_json::Error) -> Self {
        QuoteError::ParseError {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// Result type alias for quote input operations.
pub type Result<T> = std::result::Result<T, QuoteError>;
