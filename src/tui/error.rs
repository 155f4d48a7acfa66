//! TUI adapter error types

use thiserror::Error;

/// Errors that can occur while running the terminal frontend
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal setup, drawing or event polling
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
