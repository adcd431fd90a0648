//! The mutable progression snapshot of the single player character.

use super::{Rank, StatMap, Stats};

/// Unix epoch milliseconds.
pub type Timestamp = i64;

/// Per-stat potential tier. Stored with the character but not read by any rule.
pub type PotentialMap = StatMap<Rank>;

/// Progression snapshot.
///
/// Settled-state invariants (held after every engine operation):
/// - `level >= 1`
/// - `xp < xp_to_next`, `xp_to_next == formulas::xp_required(level)`
/// - `hp <= max_hp`, `max_hp == formulas::max_hp(level)`
/// - `rank == formulas::rank_for_level(level)`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Character {
    pub name: String,
    pub level: u32,
    pub xp: u64,
    pub xp_to_next: u64,
    pub hp: u32,
    pub max_hp: u32,
    pub rank: Rank,
    pub stats: Stats,
    pub potential: PotentialMap,
    pub created_at: Timestamp,
    pub total_battles: u64,
    pub total_correct: u64,
}

impl Character {
    /// Progress towards the next level as a fraction in `[0, 1)`.
    pub fn xp_progress(&self) -> f64 {
        if self.xp_to_next == 0 {
            return 0.0;
        }
        self.xp as f64 / self.xp_to_next as f64
    }

    /// Current HP as a fraction of maximum HP.
    pub fn hp_progress(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        f64::from(self.hp) / f64::from(self.max_hp)
    }

    pub fn is_dead(&self) -> bool {
        self.hp == 0
    }

    pub fn total_stats(&self) -> i64 {
        self.stats.total()
    }

    /// Share of recorded battles answered correctly, `None` before the first battle.
    pub fn accuracy(&self) -> Option<f64> {
        (self.total_battles > 0).then(|| self.total_correct as f64 / self.total_battles as f64)
    }
}
