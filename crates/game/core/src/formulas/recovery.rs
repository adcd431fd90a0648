//! Passive regeneration and the death penalty.
//!
//! Percentages are applied in integer arithmetic (`value × pct / 100`), which
//! equals the floor of the real-valued product.

use crate::config::ProgressionConfig;

fn percent_of(value: u64, percent: u64) -> u64 {
    value.saturating_mul(percent) / 100
}

/// HP recovered after `hours_passed` whole hours: 5% of max HP per hour.
///
/// Callers truncate fractional hours before calling.
pub fn hp_regen(max_hp: u32, hours_passed: u64) -> u32 {
    let per_hours = u64::from(max_hp).saturating_mul(hours_passed);
    let amount = percent_of(per_hours, ProgressionConfig::HP_REGEN_PERCENT_PER_HOUR);
    u32::try_from(amount).unwrap_or(u32::MAX)
}

/// XP lost on death: 10% of the current XP.
pub fn death_penalty(xp: u64) -> u64 {
    percent_of(xp, ProgressionConfig::DEATH_XP_PENALTY_PERCENT)
}

/// HP a character is left with after death processing.
pub fn post_death_hp(max_hp: u32) -> u32 {
    // Never exceeds max_hp, so the narrowing cannot fail.
    percent_of(u64::from(max_hp), ProgressionConfig::DEATH_HP_RESTORE_PERCENT) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regen_is_five_percent_per_hour() {
        assert_eq!(hp_regen(100, 0), 0);
        assert_eq!(hp_regen(100, 1), 5);
        assert_eq!(hp_regen(100, 2), 10);
        assert_eq!(hp_regen(229, 1), 11);
        assert_eq!(hp_regen(229, 3), 34);
    }

    #[test]
    fn regen_saturates() {
        assert_eq!(hp_regen(u32::MAX, u64::MAX), u32::MAX);
    }

    #[test]
    fn death_penalty_is_ten_percent_floored() {
        assert_eq!(death_penalty(0), 0);
        assert_eq!(death_penalty(9), 0);
        assert_eq!(death_penalty(50), 5);
        assert_eq!(death_penalty(347), 34);
    }

    #[test]
    fn post_death_hp_is_ten_percent_floored() {
        assert_eq!(post_death_hp(100), 10);
        assert_eq!(post_death_hp(229), 22);
        assert_eq!(post_death_hp(5), 0);
    }
}
