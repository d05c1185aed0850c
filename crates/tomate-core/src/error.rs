//! Core error types for tomate-core.
//!
//! Nothing here is fatal: invalid input and missing ids are rejected
//! operations, and persistence failures are logged by the caller while the
//! in-memory state stays authoritative for the session.

use std::path::PathBuf;
use thiserror::Error;

use crate::task::TaskId;

/// Core error type for tomate-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A value was rejected before it reached the store.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },

    /// The referenced task does not exist (possibly already deleted).
    #[error("Task not found: {id}")]
    NotFound { id: TaskId },

    /// Snapshot load/save failures.
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

/// Persistence-specific errors.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Failed to read snapshot from {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write snapshot to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot could not be encoded or decoded.
    #[error("Snapshot encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Result type alias for CoreError.
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
