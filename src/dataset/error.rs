//! Dataset ingestion error types

use thiserror::Error;

/// Errors that can occur while building a dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Top-level JSON value was not an array of rows
    #[error("Expected a JSON array of row objects, found {0}")]
    NotAnArray(String),

    /// A row in the array was not a flat object
    #[error("Row {0} is not an object")]
    RowNotAnObject(usize),

    /// A cell held a nested array or object
    #[error("Row {row}, column '{column}': nested values are not supported")]
    NestedValue { row: usize, column: String },

    /// JSON could not be parsed at all
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// CSV could not be parsed
    #[error("CSV parse error: {0}")]
    CsvError(#[from] csv::Error),

    /// IO error while reading the input
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for dataset operations
pub type Result<T> = std::result::Result<T, DatasetError>;
