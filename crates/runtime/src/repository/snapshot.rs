//! Snapshot service: the save record on top of a raw [`SaveStore`].
//!
//! Serializes the [`SaveRecord`] as JSON under one fixed key and implements the
//! best-effort [`ProgressStore`] contract the engine relies on.

use std::sync::{Mutex, PoisonError};

use crate::clock::{Clock, SystemClock};
use crate::repository::record::{
    DEFAULT_STORAGE_KEY, ImportedRecord, PersistenceHealth, SaveRecord, StorageOp,
};
use crate::repository::{ProgressStore, RepositoryError, Result, SaveStore};

/// Service persisting the progression snapshot through a [`SaveStore`].
///
/// # Failure policy
///
/// - Read or parse failures during load are logged and replaced by an empty
///   record.
/// - Write failures during save are logged and dropped.
/// - Every outcome updates [`PersistenceHealth`].
pub struct SnapshotService<S, C = SystemClock> {
    store: S,
    clock: C,
    key: String,
    health: Mutex<PersistenceHealth>,
}

impl<S: SaveStore> SnapshotService<S> {
    /// Create a service on the default key using the system clock.
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: SaveStore, C: Clock> SnapshotService<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            key: DEFAULT_STORAGE_KEY.to_string(),
            health: Mutex::new(PersistenceHealth::default()),
        }
    }

    /// Store the record under a different key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying raw store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn read_record(&self) -> Result<Option<SaveRecord>> {
        let Some(raw) = self.store.read(&self.key)? else {
            return Ok(None);
        };
        let record = serde_json::from_str(&raw)?;
        Ok(Some(record))
    }

    fn write_record(&self, record: &SaveRecord) -> Result<()> {
        let json = serde_json::to_string(record)?;
        self.store.write(&self.key, &json)
    }

    fn record_success(&self, op: StorageOp) {
        let now = self.clock.now();
        self.health
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record_success(op, now);
    }

    fn record_failure(&self, op: StorageOp, error: &RepositoryError) {
        let now = self.clock.now();
        self.health
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record_failure(op, error.to_string(), now);
    }
}

impl<S: SaveStore, C: Clock> ProgressStore for SnapshotService<S, C> {
    fn load_snapshot(&self) -> SaveRecord {
        match self.read_record() {
            Ok(Some(record)) => {
                self.record_success(StorageOp::Load);
                record
            }
            Ok(None) => {
                self.record_success(StorageOp::Load);
                SaveRecord::empty(self.clock.now())
            }
            Err(error) => {
                tracing::error!(
                    key = %self.key,
                    %error,
                    "Failed to load save data; continuing without a save"
                );
                self.record_failure(StorageOp::Load, &error);
                SaveRecord::empty(self.clock.now())
            }
        }
    }

    fn save_snapshot(&self, mut record: SaveRecord) {
        record.last_saved = self.clock.now();

        match self.write_record(&record) {
            Ok(()) => {
                tracing::debug!(key = %self.key, "Saved progression snapshot");
                self.record_success(StorageOp::Save);
            }
            Err(error) => {
                tracing::error!(key = %self.key, %error, "Failed to save data");
                self.record_failure(StorageOp::Save, &error);
            }
        }
    }

    fn clear(&self) {
        match self.store.remove(&self.key) {
            Ok(()) => {
                tracing::info!(key = %self.key, "Cleared save data");
                self.record_success(StorageOp::Clear);
            }
            Err(error) => {
                tracing::error!(key = %self.key, %error, "Failed to clear save data");
                self.record_failure(StorageOp::Clear, &error);
            }
        }
    }

    fn export(&self) -> Result<String> {
        let record = self.load_snapshot();
        Ok(serde_json::to_string_pretty(&record)?)
    }

    fn import(&self, data: &str) -> Result<()> {
        let parsed: ImportedRecord = serde_json::from_str(data).map_err(|error| {
            tracing::warn!(%error, "Rejected save import: not a save record");
            RepositoryError::from(error)
        })?;

        let version = parsed
            .version
            .filter(|version| !version.is_empty())
            .ok_or(RepositoryError::InvalidImport("missing version tag"))
            .inspect_err(|_| tracing::warn!("Rejected save import: missing version tag"))?;
        let character = parsed
            .character
            .ok_or(RepositoryError::InvalidImport("missing character"))
            .inspect_err(|_| tracing::warn!("Rejected save import: missing character"))?;

        let now = self.clock.now();
        let record = SaveRecord {
            version,
            character: Some(character),
            last_saved: now,
            last_hp_regen: parsed.last_hp_regen.unwrap_or(now),
        };

        match self.write_record(&record) {
            Ok(()) => {
                tracing::info!(key = %self.key, "Imported save data");
                self.record_success(StorageOp::Import);
                Ok(())
            }
            Err(error) => {
                tracing::error!(key = %self.key, %error, "Failed to import save data");
                self.record_failure(StorageOp::Import, &error);
                Err(error)
            }
        }
    }

    fn health(&self) -> PersistenceHealth {
        self.health
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
