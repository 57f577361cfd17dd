//! Error types for the folder/table tracker.

use crate::tree::{EntryKind, FolderPath};
use thiserror::Error;

/// Tree model errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("Invalid name: a name must contain at least one non-whitespace character")]
    InvalidName,

    #[error("Path not found: {0}")]
    PathNotFound(FolderPath),

    #[error("Duplicate {kind} name: {name:?}")]
    DuplicateName { kind: EntryKind, name: String },
}

/// Storage-related errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to serialize record: {0}")]
    Serialize(String),
}

/// Errors surfaced to the presentation layer
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Session is read-only: the backing store is unavailable")]
    ReadOnly,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
