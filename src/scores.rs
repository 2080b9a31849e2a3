//! Score store boundary
//!
//! The loop calls `add_score` exactly once per terminal transition, after
//! computing `best = max(prior_best, current)` locally. Store failures are
//! reported to the caller and logged; the in-memory GameOver transition has
//! already happened and is unaffected.

use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use thiserror::Error;

pub type RecordId = u64;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("score store unavailable: {0}")]
    Unavailable(String),
}

/// External persistence for best/last scores.
pub trait ScoreStore: Send + Sync {
    fn add_score(&self, best: i64, last: f64) -> Result<RecordId, StoreError>;
    fn highest_score(&self) -> i64;
    fn last_score(&self) -> i64;
}

/// One persisted run result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreRow {
    pub id: RecordId,
    pub best_score: i64,
    pub last_score: f64,
    pub created_at_ms: u64,
}

/// Append-only in-memory row store; the latest row carries the current
/// best/last pair, mirroring how the real store is queried.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    rows: Mutex<Vec<ScoreRow>>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> Vec<ScoreRow> {
        self.rows.lock().expect("score store poisoned").clone()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn add_score(&self, best: i64, last: f64) -> Result<RecordId, StoreError> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| StoreError::Unavailable("poisoned lock".into()))?;
        let id = rows.len() as RecordId + 1;
        let created_at_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        rows.push(ScoreRow {
            id,
            best_score: best,
            last_score: last,
            created_at_ms,
        });
        log::info!("score saved: best={best}, last={last:.1}");
        Ok(id)
    }

    fn highest_score(&self) -> i64 {
        self.rows
            .lock()
            .expect("score store poisoned")
            .last()
            .map(|row| row.best_score)
            .unwrap_or(0)
    }

    fn last_score(&self) -> i64 {
        self.rows
            .lock()
            .expect("score store poisoned")
            .last()
            .map(|row| row.last_score as i64)
            .unwrap_or(0)
    }
}
