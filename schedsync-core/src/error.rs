//! Error types for schedsync.

use thiserror::Error;

/// Errors that can occur while loading, reconciling or dispatching events.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid timestamp '{value}' (expected format '{format}')")]
    Timestamp { value: String, format: String },

    #[error("Calendar gateway error: {0}")]
    Gateway(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for schedsync operations.
pub type SyncResult<T> = Result<T, SyncError>;
