//! Deterministic character-progression rules and data types.
//!
//! `progression-core` defines the canonical progression rules (XP curve, HP
//! scaling, level-up growth, death penalty, rank tiers) as pure functions in
//! [`formulas`], and the persisted [`Character`] snapshot they operate on.
//! Mutation sequencing and persistence live in `progression-runtime`.
pub mod config;
pub mod error;
pub mod formulas;
pub mod state;

pub use config::ProgressionConfig;
pub use error::CoreError;
pub use formulas::{LevelUpBonus, create_initial_character};
pub use state::{Character, PotentialMap, Rank, StatKey, StatMap, Stats, Timestamp};
