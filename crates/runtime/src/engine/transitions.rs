//! State transitions applied by the engine.
//!
//! Each function mutates a [`Character`] in place using the formula library and
//! leaves it in a settled state. None of them touch storage.

use progression_core::formulas::{self, LevelUpBonus};
use progression_core::{Character, ProgressionConfig, StatKey};

/// Add XP and resolve every level-up it pays for. Returns the levels gained.
///
/// At most [`ProgressionConfig::MAX_LEVEL_UPS_PER_GRANT`] level-ups are applied
/// per call; XP beyond that is dropped so that `xp < xp_to_next` still holds.
pub fn gain_xp(character: &mut Character, amount: u64) -> u32 {
    character.xp = character.xp.saturating_add(amount);

    let mut levels_gained = 0;
    while character.xp >= character.xp_to_next {
        if levels_gained >= ProgressionConfig::MAX_LEVEL_UPS_PER_GRANT {
            let discarded = character.xp - character.xp_to_next.saturating_sub(1);
            character.xp = character.xp_to_next.saturating_sub(1);
            tracing::warn!(
                level = character.level,
                levels_gained,
                discarded,
                "Level-up cap reached for a single XP grant; excess XP dropped"
            );
            break;
        }
        level_up(character);
        levels_gained += 1;
    }

    levels_gained
}

/// Advance exactly one level.
///
/// The stat bonus is computed from the distribution before this level's bonus
/// is applied. HP is restored to the new maximum.
pub fn level_up(character: &mut Character) -> LevelUpBonus {
    let bonus = formulas::level_up_bonus(&character.stats);

    character.xp = character.xp.saturating_sub(character.xp_to_next);
    character.level = character.level.saturating_add(1);
    character.xp_to_next = formulas::xp_required(character.level);
    character.max_hp = formulas::max_hp(character.level);
    character.hp = character.max_hp;
    character.rank = formulas::rank_for_level(character.level);
    bonus.apply_to(&mut character.stats);

    tracing::info!(
        name = %character.name,
        level = character.level,
        rank = %character.rank,
        stat_points = bonus.total(),
        "Level up"
    );

    bonus
}

/// Subtract HP, floored at zero; reaching zero runs death processing.
/// Returns `true` if the character died.
pub fn take_damage(character: &mut Character, amount: u32) -> bool {
    character.hp = character.hp.saturating_sub(amount);

    if character.hp == 0 {
        process_death(character);
        return true;
    }
    false
}

/// Death penalty: lose 10% of current XP and come back at 10% of max HP.
/// Level, rank and stats are untouched. Returns the XP lost.
pub fn process_death(character: &mut Character) -> u64 {
    let penalty = formulas::death_penalty(character.xp);
    character.xp = character.xp.saturating_sub(penalty);
    character.hp = formulas::post_death_hp(character.max_hp);

    tracing::info!(
        name = %character.name,
        xp_lost = penalty,
        hp = character.hp,
        "Character died"
    );

    penalty
}

/// Add HP, capped at max HP. Returns the HP actually restored.
pub fn heal(character: &mut Character, amount: u32) -> u32 {
    let before = character.hp;
    character.hp = character.hp.saturating_add(amount).min(character.max_hp);
    character.hp.saturating_sub(before)
}

/// Passive regeneration for `hours` whole elapsed hours. Returns the HP restored.
pub fn regenerate(character: &mut Character, hours: u64) -> u32 {
    let amount = formulas::hp_regen(character.max_hp, hours);
    heal(character, amount)
}

/// Adjust a stat by `amount`. Negative amounts are applied unclamped.
pub fn add_stat(character: &mut Character, stat: StatKey, amount: i32) {
    let value = &mut character.stats[stat];
    *value = value.saturating_add(amount);
}

pub fn record_battle(character: &mut Character, correct: bool) {
    character.total_battles = character.total_battles.saturating_add(1);
    if correct {
        character.total_correct = character.total_correct.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use progression_core::{Rank, Stats, create_initial_character};

    fn fresh() -> Character {
        create_initial_character("Al", 0)
    }

    #[test]
    fn small_grant_does_not_level() {
        let mut character = fresh();
        assert_eq!(gain_xp(&mut character, 99), 0);
        assert_eq!(character.level, 1);
        assert_eq!(character.xp, 99);
    }

    #[test]
    fn exact_threshold_levels_up() {
        let mut character = fresh();
        assert_eq!(gain_xp(&mut character, 100), 1);
        assert_eq!(character.level, 2);
        assert_eq!(character.xp, 0);
        assert_eq!(character.xp_to_next, 348);
    }

    #[test]
    fn grant_of_250_matches_single_level_up() {
        let mut character = fresh();
        assert_eq!(gain_xp(&mut character, 250), 1);

        assert_eq!(character.level, 2);
        assert_eq!(character.xp, 150);
        assert_eq!(character.xp_to_next, formulas::xp_required(2));
        assert_eq!(character.max_hp, 229);
        assert_eq!(character.hp, 229);
        assert_eq!(character.rank, Rank::F);
        assert_eq!(character.stats, Stats::uniform(14));
    }

    #[test]
    fn large_grant_levels_repeatedly() {
        let mut by_grant = fresh();
        let mut by_steps = fresh();

        let amount = 100 + 348 + 722 + 50;
        assert_eq!(gain_xp(&mut by_grant, amount), 3);

        by_steps.xp = amount;
        for _ in 0..3 {
            level_up(&mut by_steps);
        }
        assert_eq!(by_grant, by_steps);
        assert_eq!(by_grant.level, 4);
        assert_eq!(by_grant.xp, 50);
        assert!(by_grant.xp < by_grant.xp_to_next);
    }

    #[test]
    fn level_up_heals_fully_and_updates_rank() {
        let mut character = fresh();
        character.level = 4;
        character.xp_to_next = formulas::xp_required(4);
        character.xp = character.xp_to_next;
        character.hp = 1;

        level_up(&mut character);

        assert_eq!(character.level, 5);
        assert_eq!(character.rank, Rank::E);
        assert_eq!(character.max_hp, formulas::max_hp(5));
        assert_eq!(character.hp, character.max_hp);
    }

    #[test]
    fn level_up_bonus_uses_pre_level_distribution() {
        let mut character = fresh();
        character.stats[StatKey::Int] = 40;
        character.xp = character.xp_to_next;

        let bonus = level_up(&mut character);

        assert_eq!(bonus.get(StatKey::Int), Some(12));
        assert_eq!(character.stats[StatKey::Int], 52);
        assert_eq!(character.stats[StatKey::Wis], 13);
    }

    #[test]
    fn cap_keeps_invariant() {
        let mut character = fresh();
        let gained = gain_xp(&mut character, u64::MAX);

        assert_eq!(gained, ProgressionConfig::MAX_LEVEL_UPS_PER_GRANT);
        assert_eq!(character.level, 1 + ProgressionConfig::MAX_LEVEL_UPS_PER_GRANT);
        assert_eq!(character.xp, character.xp_to_next - 1);
    }

    #[test]
    fn damage_without_death() {
        let mut character = fresh();
        character.xp = 50;

        assert!(!take_damage(&mut character, 30));
        assert_eq!(character.hp, 70);
        assert_eq!(character.xp, 50);
    }

    #[test]
    fn overkill_damage_triggers_death() {
        let mut character = fresh();
        character.xp = 50;

        assert!(take_damage(&mut character, 120));
        assert_eq!(character.hp, 10);
        assert_eq!(character.xp, 45);
        assert_eq!(character.level, 1);
    }

    #[test]
    fn exact_lethal_damage_triggers_death() {
        let mut character = fresh();
        character.xp = 99;

        assert!(take_damage(&mut character, 100));
        assert_eq!(character.hp, 10);
        assert_eq!(character.xp, 90);
    }

    #[test]
    fn death_keeps_level_rank_and_stats() {
        let mut character = fresh();
        gain_xp(&mut character, 100 + 348 + 722 + 1212 + 7);
        let before = character.clone();

        take_damage(&mut character, u32::MAX);

        assert_eq!(character.level, before.level);
        assert_eq!(character.rank, before.rank);
        assert_eq!(character.stats, before.stats);
        assert_eq!(character.max_hp, before.max_hp);
        assert_eq!(character.hp, before.max_hp / 10);
        assert_eq!(character.xp, before.xp - before.xp / 10);
    }

    #[test]
    fn heal_is_capped() {
        let mut character = fresh();
        character.hp = 40;

        assert_eq!(heal(&mut character, 25), 25);
        assert_eq!(character.hp, 65);
        assert_eq!(heal(&mut character, u32::MAX), 35);
        assert_eq!(character.hp, character.max_hp);
    }

    #[test]
    fn regenerate_adds_five_percent_per_hour() {
        let mut character = fresh();
        character.hp = 50;

        assert_eq!(regenerate(&mut character, 2), 10);
        assert_eq!(character.hp, 60);
        assert_eq!(regenerate(&mut character, 100), 40);
        assert_eq!(character.hp, 100);
    }

    #[test]
    fn add_stat_allows_negative_values() {
        let mut character = fresh();

        add_stat(&mut character, StatKey::Per, 3);
        assert_eq!(character.stats[StatKey::Per], 13);

        add_stat(&mut character, StatKey::Cha, -15);
        assert_eq!(character.stats[StatKey::Cha], -5);
    }

    #[test]
    fn battles_are_counted() {
        let mut character = fresh();

        record_battle(&mut character, true);
        record_battle(&mut character, false);
        record_battle(&mut character, true);

        assert_eq!(character.total_battles, 3);
        assert_eq!(character.total_correct, 2);
        assert_eq!(character.accuracy(), Some(2.0 / 3.0));
    }
}
