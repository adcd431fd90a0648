//! Character data model.
//!
//! - [`stats`]: stat keys and the seven-slot [`StatMap`]
//! - [`rank`]: the nine adventurer tiers
//! - [`character`]: the persisted progression snapshot

pub mod character;
pub mod rank;
pub mod stats;

pub use character::{Character, PotentialMap, Timestamp};
pub use rank::Rank;
pub use stats::{StatKey, StatMap, Stats};
