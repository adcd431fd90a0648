//! Error types for progression-core.
//!
//! The rules themselves are total over their input domains; errors only arise
//! when external text (save files, user input) names a stat or tier that does
//! not exist.

/// Errors surfaced by progression-core parsing helpers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("unknown stat: {0:?}")]
    UnknownStat(String),

    #[error("unknown rank: {0:?}")]
    UnknownRank(String),
}
