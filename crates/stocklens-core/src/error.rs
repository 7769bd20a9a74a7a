// Rust guideline compliant 2026-02-06

//! Error types for the Stocklens core library.

use thiserror::Error;

/// Result type alias for Stocklens operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Stocklens operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited ledger parsing error.
    #[error("Ledger parse error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Threshold configuration rejected by validation.
    #[error("Invalid thresholds: {0}")]
    InvalidThresholds(String),
}
