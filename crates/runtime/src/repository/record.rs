//! Persisted save record and persistence health reporting.

use std::fmt;

use serde::{Deserialize, Serialize};

use progression_core::{Character, Timestamp};

/// Version tag written into every save. Stored but not interpreted.
pub const SAVE_FORMAT_VERSION: &str = "1.0.0";

/// Storage key the whole record lives under.
pub const DEFAULT_STORAGE_KEY: &str = "rpg-learning-save";

/// The single persisted document.
///
/// ```text
/// { "version": "1.0.0", "character": {...} | null, "lastSaved": 0, "lastHpRegen": 0 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRecord {
    pub version: String,
    pub character: Option<Character>,
    /// Overwritten on every save.
    pub last_saved: Timestamp,
    /// Last time passive HP regeneration was applied.
    pub last_hp_regen: Timestamp,
}

impl SaveRecord {
    /// Record with no character, as returned when nothing (readable) is stored.
    pub fn empty(now: Timestamp) -> Self {
        Self {
            version: SAVE_FORMAT_VERSION.to_string(),
            character: None,
            last_saved: now,
            last_hp_regen: now,
        }
    }
}

/// Loosely-typed record accepted by import; validated before it is written.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ImportedRecord {
    pub version: Option<String>,
    pub character: Option<Character>,
    pub last_hp_regen: Option<Timestamp>,
}

/// Storage operation a failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageOp {
    Load,
    Save,
    Clear,
    Import,
}

impl fmt::Display for StorageOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StorageOp::Load => "load",
            StorageOp::Save => "save",
            StorageOp::Clear => "clear",
            StorageOp::Import => "import",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistenceFailure {
    pub op: StorageOp,
    pub message: String,
    pub at: Timestamp,
}

/// Observable outcome of routine loads and saves.
///
/// Loads and saves never fail towards the caller; this is how a presentation
/// layer finds out that the in-memory state is ahead of storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistenceHealth {
    /// Failures not yet superseded by a successful operation.
    pub consecutive_failures: u32,
    /// A save failed and no save has succeeded since: storage is behind the
    /// in-memory character.
    pub save_pending: bool,
    /// Most recent failure, kept after recovery.
    pub last_failure: Option<PersistenceFailure>,
    pub last_success: Option<Timestamp>,
}

impl PersistenceHealth {
    pub fn is_healthy(&self) -> bool {
        self.consecutive_failures == 0
    }

    /// Only a successful save supersedes a failed save. Otherwise a successful
    /// load supersedes load failures, and a clear or import supersedes any.
    pub(crate) fn record_success(&mut self, op: StorageOp, at: Timestamp) {
        let supersedes = match op {
            StorageOp::Save => true,
            _ if self.save_pending => false,
            StorageOp::Load => self
                .last_failure
                .as_ref()
                .is_none_or(|failure| failure.op == StorageOp::Load),
            StorageOp::Clear | StorageOp::Import => true,
        };
        if supersedes {
            self.consecutive_failures = 0;
            self.save_pending = false;
        }
        self.last_success = Some(at);
    }

    pub(crate) fn record_failure(&mut self, op: StorageOp, message: String, at: Timestamp) {
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);
        if op == StorageOp::Save {
            self.save_pending = true;
        }
        self.last_failure = Some(PersistenceFailure { op, message, at });
    }
}
