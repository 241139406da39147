//! Error types for library_wishlist

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for loading, matching and reporting
#[derive(Debug, Error)]
pub enum LibraryError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Failed to parse JSON response
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// HTTP error status code
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
    /// The BGG collection export does not exist
    #[error("CSV file not found: {}", .0.display())]
    CsvNotFound(PathBuf),
    /// Malformed CSV export
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for library_wishlist operations
pub type Result<T> = std::result::Result<T, LibraryError>;
