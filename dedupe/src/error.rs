//! Dedupe error types

use crate::types::EntityKind;
use thiserror::Error;

/// Result type for dedupe operations
pub type DedupeResult<T> = Result<T, DedupeError>;

/// Dedupe error types
#[derive(Error, Debug)]
pub enum DedupeError {
    #[error("Invalid merge type selected: {kind}")]
    InvalidEntityKind { kind: String },

    #[error("Failed to fetch {kind} data: {message}")]
    FetchFailed { kind: EntityKind, message: String },

    #[error("Failed to merge {kind} {duplicate_id}: {message}")]
    MergeFailed {
        kind: EntityKind,
        duplicate_id: u64,
        message: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}
