//! Level curves: XP thresholds, max HP and rank.
//!
//! Formulas:
//! - XP_required = ⌊100 × level^1.8⌋
//! - HP_max = ⌊100 × level^1.2⌋
//!
//! Both are evaluated in `f64` and saturate at the target integer bound.

use crate::config::ProgressionConfig;
use crate::state::Rank;

/// Experience needed to advance from `level` to `level + 1`.
pub fn xp_required(level: u32) -> u64 {
    let raw = ProgressionConfig::XP_CURVE_BASE
        * f64::from(level).powf(ProgressionConfig::XP_CURVE_EXPONENT);
    raw.floor() as u64
}

/// Maximum HP at `level`.
pub fn max_hp(level: u32) -> u32 {
    let raw = ProgressionConfig::HP_CURVE_BASE
        * f64::from(level).powf(ProgressionConfig::HP_CURVE_EXPONENT);
    raw.floor() as u32
}

/// Highest tier whose minimum level `level` meets.
pub fn rank_for_level(level: u32) -> Rank {
    Rank::ALL
        .into_iter()
        .rev()
        .find(|rank| level >= rank.min_level())
        .unwrap_or(Rank::F)
}
