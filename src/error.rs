//! Error types for aurorawatch.

use thiserror::Error;

/// Errors surfaced to callers.
///
/// Bad or missing readings never show up here; they become
/// `Reading::Missing` during parsing.
#[derive(Debug, Error)]
pub enum Error {
    /// A recency rank past the end of the merged records was requested.
    #[error("Index {index} out of bounds ({len} records available)")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// File I/O failed.
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON export failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
