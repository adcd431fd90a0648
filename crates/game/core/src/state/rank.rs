//! Adventurer rank tiers.

use core::str::FromStr;

use crate::error::CoreError;

/// Overall adventurer prestige, derived solely from level.
///
/// Tiers are ordered `F < E < D < C < B < A < S < UR < EX`. The same scale is
/// reused for per-stat potential.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[strum(serialize_all = "UPPERCASE")]
pub enum Rank {
    #[default]
    F,
    E,
    D,
    C,
    B,
    A,
    S,
    Ur,
    Ex,
}

impl Rank {
    /// All tiers, lowest first.
    pub const ALL: [Rank; 9] = [
        Rank::F,
        Rank::E,
        Rank::D,
        Rank::C,
        Rank::B,
        Rank::A,
        Rank::S,
        Rank::Ur,
        Rank::Ex,
    ];

    /// Minimum character level at which this tier is reached.
    pub const fn min_level(self) -> u32 {
        match self {
            Self::F => 1,
            Self::E => 5,
            Self::D => 15,
            Self::C => 30,
            Self::B => 50,
            Self::A => 80,
            Self::S => 120,
            Self::Ur => 200,
            Self::Ex => 500,
        }
    }

    /// The next tier up, or `None` at EX.
    pub fn next(self) -> Option<Rank> {
        Self::ALL.into_iter().find(|rank| *rank > self)
    }
}

impl FromStr for Rank {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.as_ref().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownRank(s.to_owned()))
    }
}
