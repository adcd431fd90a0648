//! Battle outcomes: damage for a wrong answer, rewards for a right one.
//!
//! Difficulty is expected in `1..=10`; values outside are not rejected.

use crate::config::ProgressionConfig;

/// HP lost when a question of `difficulty` is answered wrong.
pub fn damage(difficulty: u32) -> u32 {
    difficulty.saturating_mul(ProgressionConfig::DAMAGE_PER_DIFFICULTY)
}

/// XP granted for a correct answer; bosses pay five times as much.
pub fn xp_reward(difficulty: u32, is_boss: bool) -> u64 {
    let base = u64::from(difficulty) * ProgressionConfig::XP_PER_DIFFICULTY;
    if is_boss {
        base * ProgressionConfig::BOSS_XP_MULTIPLIER
    } else {
        base
    }
}

/// Stat points granted for a correct answer.
pub fn stat_reward(difficulty: u32, is_boss: bool) -> i32 {
    if is_boss {
        return ProgressionConfig::BOSS_STAT_REWARD;
    }
    match difficulty {
        0..=2 => 1,
        3..=6 => 2,
        _ => 3,
    }
}
