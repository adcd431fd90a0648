//! Wall-clock access for timestamps and HP regeneration.
//!
//! The engine and the snapshot service read time through [`Clock`] so tests
//! can drive elapsed hours with a [`ManualClock`].

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use progression_core::Timestamp;

pub const MILLIS_PER_HOUR: i64 = 60 * 60 * 1000;

/// Source of the current time as Unix epoch milliseconds.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Real UTC time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Settable clock for tests and replays. Clones share the same instant.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicI64>,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: Arc::new(AtomicI64::new(start)),
        }
    }

    pub fn set(&self, at: Timestamp) {
        self.now.store(at, Ordering::SeqCst);
    }

    /// Move the clock forward (or backward, for negative deltas).
    pub fn advance(&self, delta: chrono::Duration) {
        self.now
            .fetch_add(delta.num_milliseconds(), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now.load(Ordering::SeqCst)
    }
}

/// Whole hours from `since` to `now`; zero when the clock went backwards.
pub fn elapsed_whole_hours(since: Timestamp, now: Timestamp) -> u64 {
    let elapsed = now.saturating_sub(since);
    if elapsed <= 0 {
        return 0;
    }
    (elapsed / MILLIS_PER_HOUR) as u64
}
