//! Core error types for dosetrack-core.
//!
//! All engine failures are synchronous and recoverable by the caller:
//! validation rejects bad input, lookups surface missing ids, and the
//! storage layer reports its own I/O and decoding failures.

use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Core error type for dosetrack-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// `update_entry` referenced an id absent from the journal
    #[error("No journal entry with id {0}")]
    EntryNotFound(Uuid),

    /// Snapshot persistence errors
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Validation errors for user-entered values.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A rating outside its allowed range
    #[error("Rating for '{field}' out of range: {value} (allowed {min}..={max})")]
    RatingOutOfRange {
        field: &'static str,
        value: u8,
        min: u8,
        max: u8,
    },

    /// A boundary date string that is not a calendar date
    #[error("Malformed date '{input}': expected YYYY-MM-DD")]
    MalformedDate { input: String },
}

/// Snapshot-store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read or write the snapshot file
    #[error("Failed to read/write snapshot file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode or decode the snapshot JSON
    #[error("Snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to resolve the data directory
    #[error("Failed to access data directory: {0}")]
    DataDir(String),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
