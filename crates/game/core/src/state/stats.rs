//! The seven learning attributes and the fixed-slot table keyed by them.
//!
//! Stats are stored as signed integers: level-up bonuses only ever add, but
//! external stat awards may carry negative deltas (stat-draining effects).

use core::ops::{Index, IndexMut};
use core::str::FromStr;

use crate::error::CoreError;

/// One of the seven character attributes.
///
/// Displayed and serialized as the upper-case abbreviation (`"INT"`, `"WIS"`, ...).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[strum(serialize_all = "UPPERCASE")]
pub enum StatKey {
    /// Intelligence - logic, mathematics, programming
    Int,
    /// Wisdom - understanding, analysis, decision making
    Wis,
    /// Charisma - communication, expression, leadership
    Cha,
    /// Dexterity - reaction, speed, efficiency
    Dex,
    /// Constitution - stamina, persistence, focus
    Con,
    /// Strength - execution, drive to act
    Str,
    /// Perception - observation, intuition, creativity
    Per,
}

impl StatKey {
    /// All keys in canonical order.
    pub const ALL: [StatKey; 7] = [
        StatKey::Int,
        StatKey::Wis,
        StatKey::Cha,
        StatKey::Dex,
        StatKey::Con,
        StatKey::Str,
        StatKey::Per,
    ];

    /// Human-readable name of the attribute.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "Intelligence",
            Self::Wis => "Wisdom",
            Self::Cha => "Charisma",
            Self::Dex => "Dexterity",
            Self::Con => "Constitution",
            Self::Str => "Strength",
            Self::Per => "Perception",
        }
    }

    /// The learning skills this attribute stands for.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Int => "Logic, mathematics, programming",
            Self::Wis => "Understanding, analysis, decision making",
            Self::Cha => "Communication, expression, leadership",
            Self::Dex => "Reaction, speed, efficiency",
            Self::Con => "Stamina, persistence, focus",
            Self::Str => "Execution, drive to act",
            Self::Per => "Observation, intuition, creativity",
        }
    }
}

impl FromStr for StatKey {
    type Err = CoreError;

    /// Parses the abbreviation, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_ref().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownStat(s.to_owned()))
    }
}

/// A value for every [`StatKey`].
///
/// Used both for the numeric stat pool ([`Stats`]) and for the per-stat
/// potential tiers ([`PotentialMap`](crate::PotentialMap)).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub struct StatMap<T> {
    pub int: T,
    pub wis: T,
    pub cha: T,
    pub dex: T,
    pub con: T,
    pub str: T,
    pub per: T,
}

impl<T> StatMap<T> {
    /// Build a table by evaluating `f` once per key, in canonical order.
    pub fn from_fn(mut f: impl FnMut(StatKey) -> T) -> Self {
        Self {
            int: f(StatKey::Int),
            wis: f(StatKey::Wis),
            cha: f(StatKey::Cha),
            dex: f(StatKey::Dex),
            con: f(StatKey::Con),
            str: f(StatKey::Str),
            per: f(StatKey::Per),
        }
    }

    pub fn get(&self, key: StatKey) -> &T {
        match key {
            StatKey::Int => &self.int,
            StatKey::Wis => &self.wis,
            StatKey::Cha => &self.cha,
            StatKey::Dex => &self.dex,
            StatKey::Con => &self.con,
            StatKey::Str => &self.str,
            StatKey::Per => &self.per,
        }
    }

    pub fn get_mut(&mut self, key: StatKey) -> &mut T {
        match key {
            StatKey::Int => &mut self.int,
            StatKey::Wis => &mut self.wis,
            StatKey::Cha => &mut self.cha,
            StatKey::Dex => &mut self.dex,
            StatKey::Con => &mut self.con,
            StatKey::Str => &mut self.str,
            StatKey::Per => &mut self.per,
        }
    }

    /// Iterate `(key, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (StatKey, &T)> + '_ {
        StatKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}

impl<T: Clone> StatMap<T> {
    /// Every slot set to the same value.
    pub fn uniform(value: T) -> Self {
        Self::from_fn(|_| value.clone())
    }
}

impl<T> Index<StatKey> for StatMap<T> {
    type Output = T;

    fn index(&self, key: StatKey) -> &T {
        self.get(key)
    }
}

impl<T> IndexMut<StatKey> for StatMap<T> {
    fn index_mut(&mut self, key: StatKey) -> &mut T {
        self.get_mut(key)
    }
}

/// The character's attribute pool.
pub type Stats = StatMap<i32>;

impl StatMap<i32> {
    /// Sum of all seven attributes, widened so it cannot overflow.
    pub fn total(&self) -> i64 {
        self.iter().map(|(_, value)| i64::from(*value)).sum()
    }
}
