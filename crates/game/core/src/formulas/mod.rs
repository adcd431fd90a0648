//! Formula library.
//!
//! Pure, deterministic functions computing every derived progression value.
//! No state, no I/O, no clock: callers pass timestamps in.
//!
//! - [`curves`]: XP thresholds, max HP, rank
//! - [`growth`]: level-up stat bonus
//! - [`rewards`]: damage, XP and stat rewards per question
//! - [`recovery`]: HP regeneration and the death penalty

pub mod curves;
pub mod growth;
pub mod recovery;
pub mod rewards;

pub use curves::{max_hp, rank_for_level, xp_required};
pub use growth::{LevelUpBonus, level_up_bonus};
pub use recovery::{death_penalty, hp_regen, post_death_hp};
pub use rewards::{damage, stat_reward, xp_reward};

use crate::config::ProgressionConfig;
use crate::state::{Character, PotentialMap, Rank, Stats, Timestamp};

/// Build a fresh level-1 character at full health.
pub fn create_initial_character(name: impl Into<String>, created_at: Timestamp) -> Character {
    let level = ProgressionConfig::STARTING_LEVEL;
    let max_hp = max_hp(level);

    Character {
        name: name.into(),
        level,
        xp: 0,
        xp_to_next: xp_required(level),
        hp: max_hp,
        max_hp,
        rank: rank_for_level(level),
        stats: Stats::uniform(ProgressionConfig::BASE_STAT),
        potential: PotentialMap::uniform(Rank::F),
        created_at,
        total_battles: 0,
        total_correct: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_character() {
        let character = create_initial_character("Al", 1_700_000_000_000);

        assert_eq!(character.name, "Al");
        assert_eq!(character.level, 1);
        assert_eq!(character.xp, 0);
        assert_eq!(character.xp_to_next, 100);
        assert_eq!(character.hp, 100);
        assert_eq!(character.max_hp, 100);
        assert_eq!(character.rank, Rank::F);
        assert_eq!(character.stats, Stats::uniform(10));
        assert_eq!(character.potential, PotentialMap::uniform(Rank::F));
        assert_eq!(character.created_at, 1_700_000_000_000);
        assert_eq!(character.total_battles, 0);
        assert_eq!(character.total_correct, 0);
    }

    #[test]
    fn initial_views() {
        let character = create_initial_character("Al", 0);
        assert_eq!(character.xp_progress(), 0.0);
        assert_eq!(character.hp_progress(), 1.0);
        assert!(!character.is_dead());
        assert_eq!(character.total_stats(), 70);
        assert_eq!(character.accuracy(), None);
    }
}
