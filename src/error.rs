//! Error types for Tariff
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Tariff operations
pub type TariffResult<T> = Result<T, TariffError>;

/// Main error type for Tariff operations
#[derive(Error, Debug)]
pub enum TariffError {
    /// Range index does not address an existing row
    #[error("range index {index} is out of bounds (table has {len} rows)")]
    RangeIndexOutOfBounds { index: usize, len: usize },

    /// Row is flagged as not deletable (first row, or disabled table)
    #[error("range {index} cannot be deleted")]
    RangeNotDeletable { index: usize },

    /// Attempt to give the open-ended last row an upper bound
    #[error("range {index} is open-ended; its upper bound must stay empty")]
    OpenEndedRange { index: usize },

    /// Value for a numeric field could not be parsed
    #[error("invalid number '{value}' for field '{field}'")]
    InvalidNumber { field: String, value: String },

    /// Unknown range field name
    #[error("unknown range field '{name}' (expected fromValue, toValue, rate or flatAmount)")]
    UnknownField { name: String },

    /// Form field path cannot be resolved against the document
    #[error("invalid field path '{path}': {message}")]
    InvalidFieldPath { path: String, message: String },

    /// Stored form value does not have the expected shape
    #[error("invalid form state at '{path}': {message}")]
    InvalidFormState { path: String, message: String },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
