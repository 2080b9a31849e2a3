//! Run state and the snapshot shape published to presentation layers

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::sim::avatar::Avatar;
use crate::sim::config::RunConfig;
use crate::sim::hazard::{Hazard, Spawner};
use crate::sim::score::ScoreAccumulator;

/// Loop controller state machine. `GameOver` is terminal for a run; a new
/// run requires a fresh `GameState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    Idle,
    Running,
    Paused,
    GameOver,
}

/// Complete state of one run. Owned and mutated exclusively by the loop;
/// presentation layers read cloned `Snapshot`s.
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: RunConfig,
    pub phase: GamePhase,
    pub avatar: Avatar,
    pub hazards: Vec<Hazard>,
    pub spawner: Spawner,
    pub score: ScoreAccumulator,
}

impl GameState {
    /// Fresh run: centered avatar, no hazards, zero score, newly drawn
    /// spawn schedule from the seeded RNG.
    pub fn new(config: RunConfig, seed: u64, now: u64) -> Self {
        Self {
            config,
            phase: GamePhase::Idle,
            avatar: Avatar::new(&config, now),
            hazards: Vec::new(),
            spawner: Spawner::new(Pcg32::seed_from_u64(seed), now),
            score: ScoreAccumulator::new(now),
        }
    }

    pub fn start(&mut self, now: u64) {
        debug_assert_eq!(self.phase, GamePhase::Idle);
        self.phase = GamePhase::Running;
        self.score.resume(now);
    }

    pub fn pause(&mut self) {
        if self.phase == GamePhase::Running {
            self.phase = GamePhase::Paused;
        }
    }

    /// Return to `Running`, shifting every timestamp by the paused duration
    /// so no paused time is credited to spawn timers, warning timers, frame
    /// timers, or score.
    pub fn resume(&mut self, now: u64, paused_for_ms: u64) {
        if self.phase != GamePhase::Paused {
            return;
        }
        self.spawner.shift(paused_for_ms);
        self.avatar.animation.shift(paused_for_ms);
        for hazard in &mut self.hazards {
            hazard.warning_started += paused_for_ms;
            hazard.animation.shift(paused_for_ms);
        }
        self.score.resume(now);
        self.phase = GamePhase::Running;
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Atomic view of one tick's outcome for the render/notification sink.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            avatar_y: self.avatar.y,
            avatar_frame: self.avatar.animation.frame(),
            hazards: self
                .hazards
                .iter()
                .map(|h| HazardView {
                    pos: h.pos,
                    frame: h.animation.frame(),
                    warning: h.warning_active,
                })
                .collect(),
            score: self.score.value(),
        }
    }
}

/// Per-hazard render data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HazardView {
    pub pos: Vec2,
    pub frame: usize,
    pub warning: bool,
}

/// Immutable per-tick view for presentation layers. Published at most once
/// per tick; never reflects a mid-tick state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub avatar_y: f32,
    pub avatar_frame: usize,
    pub hazards: Vec<HazardView>,
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        let config = RunConfig::new(1000.0, 2000.0).unwrap();
        GameState::new(config, 99, 0)
    }

    #[test]
    fn fresh_run_is_idle_and_empty() {
        let state = state();
        assert_eq!(state.phase, GamePhase::Idle);
        assert!(state.hazards.is_empty());
        assert_eq!(state.score.value(), 0.0);
    }

    #[test]
    fn resume_shifts_all_timers() {
        let mut state = state();
        state.start(0);
        state.hazards.push(Hazard::new(
            Vec2::new(state.config.width, 10.0),
            state.config.hazard_size,
            500,
        ));
        state.pause();

        // Paused right after the spawn, for 30 seconds.
        state.resume(30_500, 30_000);
        assert!(state.is_running());
        assert_eq!(state.hazards[0].warning_started, 30_500);

        // 999ms of unpaused warning elapsed: still immobile.
        let scroll = state.config.scroll_speed;
        state.hazards[0].update(31_499, scroll);
        assert!(state.hazards[0].warning_active);
        // 1001ms: the grace has run out.
        state.hazards[0].update(31_501, scroll);
        assert!(!state.hazards[0].warning_active);
    }

    #[test]
    fn snapshot_serializes() {
        let state = state();
        let snapshot = state.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"score\":0.0"));
    }
}
