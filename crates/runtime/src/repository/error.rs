//! Error types raised by repository implementations.

use thiserror::Error;

/// Errors surfaced by save stores and the snapshot service.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("save store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("storage quota exceeded: {needed} bytes needed, limit is {limit}")]
    QuotaExceeded { needed: usize, limit: usize },

    #[error("invalid save data: {0}")]
    InvalidImport(&'static str),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
