//! Runtime for the character-progression rules.
//!
//! This crate wires the pure rules in `progression-core` to persistent storage.
//! Consumers embed [`ProgressionEngine`], call its operations in response to
//! learning events, and read the character back for display.
//!
//! Modules are organized by responsibility:
//! - [`engine`] owns the character and sequences every mutation
//! - [`repository`] persists the save record (files, memory)
//! - [`clock`] abstracts wall-clock time for regeneration and timestamps
//! - [`config`] and [`logging`] cover environment-driven setup
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod repository;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{LoggingConfig, RuntimeConfig};
pub use engine::{FileBackedEngine, ProgressionEngine};
pub use error::{Result, RuntimeError};
pub use logging::{LoggingGuard, init_logging};
pub use repository::{
    FileSaveStore, InMemorySaveStore, PersistenceFailure, PersistenceHealth, ProgressStore,
    RepositoryError, SaveRecord, SaveStore, SnapshotService, StorageOp,
};
