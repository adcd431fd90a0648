//! Repository layer for the persisted progression snapshot.
//!
//! - [`SaveStore`]: raw key/value text storage ([`FileSaveStore`], [`InMemorySaveStore`])
//! - [`ProgressStore`]: the best-effort load/save contract the engine uses
//! - [`SnapshotService`]: JSON [`SaveRecord`] under one key, implementing [`ProgressStore`]

mod error;
mod file;
mod memory;
mod record;
mod snapshot;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileSaveStore;
pub use memory::InMemorySaveStore;
pub use record::{
    DEFAULT_STORAGE_KEY, PersistenceFailure, PersistenceHealth, SAVE_FORMAT_VERSION, SaveRecord,
    StorageOp,
};
pub use snapshot::SnapshotService;
pub use traits::{ProgressStore, SaveStore};
