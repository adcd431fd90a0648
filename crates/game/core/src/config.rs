/// Progression constants and balance parameters.
///
/// Every formula in [`crate::formulas`] reads its coefficients from here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressionConfig;

impl ProgressionConfig {
    // ===== character creation =====
    pub const STARTING_LEVEL: u32 = 1;
    /// Every stat starts here.
    pub const BASE_STAT: i32 = 10;

    // ===== curves =====
    /// XP to next level = BASE × level^EXPONENT
    pub const XP_CURVE_BASE: f64 = 100.0;
    pub const XP_CURVE_EXPONENT: f64 = 1.8;
    /// Max HP = BASE × level^EXPONENT
    pub const HP_CURVE_BASE: f64 = 100.0;
    pub const HP_CURVE_EXPONENT: f64 = 1.2;

    // ===== level-up =====
    /// Stat points distributed per level, proportional to each stat's share.
    pub const LEVEL_UP_BONUS_POOL: i64 = 30;
    /// Upper bound on level-ups resolved from a single XP grant.
    pub const MAX_LEVEL_UPS_PER_GRANT: u32 = 10_000;

    // ===== combat & rewards =====
    pub const DAMAGE_PER_DIFFICULTY: u32 = 10;
    pub const XP_PER_DIFFICULTY: u64 = 20;
    pub const BOSS_XP_MULTIPLIER: u64 = 5;
    pub const BOSS_STAT_REWARD: i32 = 5;

    // ===== recovery & death =====
    pub const HP_REGEN_PERCENT_PER_HOUR: u64 = 5;
    pub const DEATH_XP_PENALTY_PERCENT: u64 = 10;
    /// HP left after death, as a percentage of max HP.
    pub const DEATH_HP_RESTORE_PERCENT: u64 = 10;
}
