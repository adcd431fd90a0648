//! Unified error type surfaced by the runtime API.
//!
//! Routine engine operations never fail; errors only come from opening storage,
//! import/export, and logging setup.
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("failed to prepare log directory")]
    LogDirectory(#[source] std::io::Error),

    #[error("failed to install tracing subscriber")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}
