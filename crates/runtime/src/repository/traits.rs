//! Repository contracts for saving and loading the progression snapshot.

use progression_core::{Character, Timestamp};

use super::error::Result;
use super::record::{PersistenceHealth, SaveRecord};

/// Raw text storage addressed by key.
///
/// The persistence backend the snapshot service writes through: a browser-like
/// key/value area, a directory of files, or memory in tests.
pub trait SaveStore: Send + Sync {
    /// Read the value under `key`, `None` if nothing is stored.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value under `key`.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value under `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Check if a value exists
    fn exists(&self, key: &str) -> bool {
        matches!(self.read(key), Ok(Some(_)))
    }
}

/// Persistence capability the progression engine depends on.
///
/// Routine loads and saves are best-effort: they never return errors. A load
/// that cannot read or parse the stored record yields an empty record; a save
/// that cannot be written is dropped. Both are logged and reflected in
/// [`health`](Self::health). Only [`export`](Self::export) and
/// [`import`](Self::import) report failure to the caller.
pub trait ProgressStore {
    /// The stored record, or an empty one.
    fn load_snapshot(&self) -> SaveRecord;

    /// Stamp `last_saved` and write the record.
    fn save_snapshot(&self, record: SaveRecord);

    /// Remove the whole record.
    fn clear(&self);

    /// Pretty-printed JSON of the current record.
    fn export(&self) -> Result<String>;

    /// Validate and store a record previously produced by [`export`](Self::export).
    ///
    /// Rejects payloads without a version tag or a character; nothing is
    /// written on rejection.
    fn import(&self, data: &str) -> Result<()>;

    fn health(&self) -> PersistenceHealth;

    fn load_character(&self) -> Option<Character> {
        self.load_snapshot().character
    }

    fn save_character(&self, character: &Character) {
        let mut record = self.load_snapshot();
        record.character = Some(character.clone());
        self.save_snapshot(record);
    }

    fn last_hp_regen(&self) -> Timestamp {
        self.load_snapshot().last_hp_regen
    }

    fn update_hp_regen_time(&self, at: Timestamp) {
        let mut record = self.load_snapshot();
        record.last_hp_regen = at;
        self.save_snapshot(record);
    }
}

impl<T: ProgressStore + ?Sized> ProgressStore for &T {
    fn load_snapshot(&self) -> SaveRecord {
        (**self).load_snapshot()
    }

    fn save_snapshot(&self, record: SaveRecord) {
        (**self).save_snapshot(record)
    }

    fn clear(&self) {
        (**self).clear()
    }

    fn export(&self) -> Result<String> {
        (**self).export()
    }

    fn import(&self, data: &str) -> Result<()> {
        (**self).import(data)
    }

    fn health(&self) -> PersistenceHealth {
        (**self).health()
    }

    fn load_character(&self) -> Option<Character> {
        (**self).load_character()
    }

    fn save_character(&self, character: &Character) {
        (**self).save_character(character)
    }

    fn last_hp_regen(&self) -> Timestamp {
        (**self).last_hp_regen()
    }

    fn update_hp_regen_time(&self, at: Timestamp) {
        (**self).update_hp_regen_time(at)
    }
}
