//! View construction error types

use thiserror::Error;

/// Errors that can occur while building a `TableView`
#[derive(Debug, Error)]
pub enum ViewError {
    /// Configured default page size is not one of the accepted values
    #[error("Invalid page size {0}; accepted sizes are 10, 20, 25 and 50")]
    InvalidPageSize(usize),
}

/// Result type for view operations
pub type Result<T> = std::result::Result<T, ViewError>;
