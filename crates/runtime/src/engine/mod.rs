//! Progression engine: the sole owner and mutator of the character snapshot.
//!
//! Every operation runs to completion synchronously: read the snapshot, apply
//! a [`transitions`] step, then hand the result to the [`ProgressStore`]. The
//! absence of a character is a normal state; mutations silently do nothing
//! until one is created or loaded.

pub mod transitions;

use progression_core::{Character, StatKey, Timestamp, formulas};

use crate::clock::{self, Clock, SystemClock};
use crate::config::RuntimeConfig;
use crate::error::Result;
use crate::repository::{FileSaveStore, PersistenceHealth, ProgressStore, SnapshotService};

/// Engine persisting to `{save_dir}/{storage_key}.json`.
pub type FileBackedEngine = ProgressionEngine<SnapshotService<FileSaveStore>>;

/// Owns the live [`Character`] and keeps it in step with storage.
pub struct ProgressionEngine<P, C = SystemClock> {
    store: P,
    clock: C,
    character: Option<Character>,
    /// Last regeneration time. Kept in memory so a failed write cannot
    /// replay the same hours.
    last_hp_regen: Timestamp,
    loaded: bool,
}

impl<P: ProgressStore> ProgressionEngine<P> {
    pub fn new(store: P) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl FileBackedEngine {
    /// Build an engine backed by the save directory in `config`.
    ///
    /// Call [`init`](ProgressionEngine::init) afterwards to load the save.
    pub fn open(config: &RuntimeConfig) -> Result<Self> {
        let store = FileSaveStore::new(&config.save_dir)?;
        let snapshots = SnapshotService::new(store).with_key(config.storage_key.clone());
        tracing::debug!(
            save_dir = %config.save_dir.display(),
            key = %config.storage_key,
            "Opened save store"
        );
        Ok(Self::new(snapshots))
    }
}

impl<P: ProgressStore, C: Clock> ProgressionEngine<P, C> {
    pub fn with_clock(store: P, clock: C) -> Self {
        let last_hp_regen = clock.now();
        Self {
            store,
            clock,
            character: None,
            last_hp_regen,
            loaded: false,
        }
    }

    // ===== read-only views =====

    pub fn character(&self) -> Option<&Character> {
        self.character.as_ref()
    }

    pub fn has_character(&self) -> bool {
        self.character.is_some()
    }

    /// Whether [`init`](Self::init) has run, with or without a save.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// `xp / xp_to_next`, 0 without a character.
    pub fn xp_progress(&self) -> f64 {
        self.character.as_ref().map_or(0.0, Character::xp_progress)
    }

    /// `hp / max_hp`, 0 without a character.
    pub fn hp_progress(&self) -> f64 {
        self.character.as_ref().map_or(0.0, Character::hp_progress)
    }

    pub fn is_dead(&self) -> bool {
        self.character.as_ref().is_some_and(Character::is_dead)
    }

    pub fn total_stats(&self) -> i64 {
        self.character.as_ref().map_or(0, Character::total_stats)
    }

    /// When passive regeneration was last applied.
    pub fn last_hp_regen(&self) -> Timestamp {
        self.last_hp_regen
    }

    pub fn persistence_health(&self) -> PersistenceHealth {
        self.store.health()
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    // ===== operations =====

    /// Load the persisted character (if any) and apply pending HP regeneration.
    pub fn init(&mut self) {
        let record = self.store.load_snapshot();
        self.character = record.character;
        self.last_hp_regen = record.last_hp_regen;
        match &self.character {
            Some(character) => tracing::info!(
                name = %character.name,
                level = character.level,
                "Loaded character"
            ),
            None => tracing::info!("No saved character"),
        }

        self.process_hp_regen();
        self.loaded = true;
    }

    /// Replace the snapshot with a fresh level-1 character.
    pub fn create_character(&mut self, name: impl Into<String>) {
        let character = formulas::create_initial_character(name, self.clock.now());
        tracing::info!(name = %character.name, "Created character");
        self.character = Some(character);
        self.save();
    }

    /// Persist the character and regen timestamp. No-op without a character.
    pub fn save(&self) {
        let Some(character) = &self.character else {
            return;
        };

        let mut record = self.store.load_snapshot();
        record.character = Some(character.clone());
        record.last_hp_regen = self.last_hp_regen;
        self.store.save_snapshot(record);
    }

    /// Apply 5% max HP per whole hour since the last regeneration.
    ///
    /// Fires only once a full hour has passed; the regen timestamp then moves
    /// to now, so repeated calls within the same hour change nothing even when
    /// the save fails.
    pub fn process_hp_regen(&mut self) {
        let now = self.clock.now();
        let Some(character) = self.character.as_mut() else {
            return;
        };

        let hours = clock::elapsed_whole_hours(self.last_hp_regen, now);
        if hours < 1 {
            return;
        }

        let restored = transitions::regenerate(character, hours);
        tracing::debug!(hours, restored, hp = character.hp, "Applied HP regeneration");

        self.last_hp_regen = now;
        self.save();
    }

    /// Add XP, levelling up as many times as it pays for. Returns levels gained.
    pub fn add_xp(&mut self, amount: u64) -> u32 {
        self.mutate("add_xp", |character| transitions::gain_xp(character, amount))
            .unwrap_or(0)
    }

    /// Subtract HP; reaching zero applies the death penalty. Returns `true` on death.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.mutate("take_damage", |character| {
            transitions::take_damage(character, amount)
        })
        .unwrap_or(false)
    }

    /// Adjust a stat directly. Negative amounts are applied as-is.
    pub fn add_stat(&mut self, stat: StatKey, amount: i32) {
        self.mutate("add_stat", |character| {
            transitions::add_stat(character, stat, amount)
        });
    }

    pub fn record_battle(&mut self, correct: bool) {
        self.mutate("record_battle", |character| {
            transitions::record_battle(character, correct)
        });
    }

    /// Restore HP, capped at max HP.
    pub fn heal(&mut self, amount: u32) {
        self.mutate("heal", |character| {
            transitions::heal(character, amount);
        });
    }

    /// Run `apply` on the character and persist, or do nothing without one.
    fn mutate<R>(
        &mut self,
        operation: &'static str,
        apply: impl FnOnce(&mut Character) -> R,
    ) -> Option<R> {
        let Some(character) = self.character.as_mut() else {
            tracing::debug!(operation, "No character; ignoring");
            return None;
        };

        let outcome = apply(character);
        self.save();
        Some(outcome)
    }
}
