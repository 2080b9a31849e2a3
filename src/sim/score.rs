//! Survival-time score accumulator
//!
//! One score unit per 100ms of alive wall time, accrued from elapsed time
//! rather than tick counts so it stays correct under a variable tick rate.
//! Frozen while paused; the reference timestamp must be reset on resume so
//! the paused interval is never credited.

use crate::consts::SCORE_UNIT_MS;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreAccumulator {
    value: f64,
    last_update: u64,
}

impl ScoreAccumulator {
    pub fn new(now: u64) -> Self {
        Self {
            value: 0.0,
            last_update: now,
        }
    }

    /// Credit the time elapsed since the last update.
    pub fn tick(&mut self, now: u64) -> f64 {
        let delta = now.saturating_sub(self.last_update);
        self.value += delta as f64 / SCORE_UNIT_MS;
        self.last_update = now;
        self.value
    }

    /// Restart accrual from `now`, dropping any interval spent paused.
    pub fn resume(&mut self, now: u64) {
        self.last_update = now;
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}
