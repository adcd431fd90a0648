//! Level-up stat growth.
//!
//! Each level awards `⌊stat / total × 30⌋` points to every stat, so growth
//! follows the character's existing specialization.

use crate::config::ProgressionConfig;
use crate::state::{StatKey, StatMap, Stats};

/// Stat points awarded by one level-up. Zero awards are omitted from iteration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LevelUpBonus(StatMap<i32>);

impl LevelUpBonus {
    /// Award for a single stat, `None` when nothing is awarded.
    pub fn get(&self, key: StatKey) -> Option<i32> {
        let value = self.0[key];
        (value != 0).then_some(value)
    }

    /// Non-zero awards in canonical stat order.
    pub fn iter(&self) -> impl Iterator<Item = (StatKey, i32)> + '_ {
        self.0
            .iter()
            .filter(|(_, value)| **value != 0)
            .map(|(key, value)| (key, *value))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Total points awarded.
    pub fn total(&self) -> i64 {
        self.0.total()
    }

    /// Add every award to `stats`.
    pub fn apply_to(&self, stats: &mut Stats) {
        for (key, value) in self.iter() {
            stats[key] = stats[key].saturating_add(value);
        }
    }
}

/// Compute the level-up award from the current (pre-award) stat distribution.
///
/// A non-positive pool awards nothing.
pub fn level_up_bonus(stats: &Stats) -> LevelUpBonus {
    let total = stats.total();
    if total <= 0 {
        return LevelUpBonus::default();
    }

    LevelUpBonus(StatMap::from_fn(|key| {
        let value = i64::from(stats[key]);
        if value <= 0 {
            return 0;
        }
        // Positive operands: integer division is the floor.
        let share = value * ProgressionConfig::LEVEL_UP_BONUS_POOL / total;
        i32::try_from(share).unwrap_or(i32::MAX)
    }))
}
