//! Hazard entities and the procedural spawner
//!
//! A hazard spends its first `WARNING_DURATION_MS` in a warning state:
//! visible, immobile, collision-exempt, rendered as a static glyph. The
//! transition to mobile is one-way and happens exactly once. Mobile hazards
//! scroll left at 1.5x the base scroll speed and are pruned once fully past
//! the leading edge.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::sim::animation::FrameTimer;
use crate::sim::collision::Rect;
use crate::sim::config::RunConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hazard {
    pub pos: Vec2,
    pub size: f32,
    pub warning_active: bool,
    pub warning_started: u64,
    pub animation: FrameTimer,
}

impl Hazard {
    pub fn new(pos: Vec2, size: f32, now: u64) -> Self {
        Self {
            pos,
            size,
            warning_active: true,
            warning_started: now,
            animation: FrameTimer::new(now),
        }
    }

    /// One tick: expire the warning once its duration has elapsed, otherwise
    /// move left. The warning never re-arms.
    pub fn update(&mut self, now: u64, scroll_speed: f32) {
        if self.warning_active {
            if now.saturating_sub(self.warning_started) >= WARNING_DURATION_MS {
                self.warning_active = false;
            }
        } else {
            self.pos.x -= scroll_speed * HAZARD_SPEED_MULTIPLIER;
        }
    }

    /// Advance the sprite cycle. Warning-state hazards show a static glyph
    /// and do not animate.
    pub fn animate(&mut self, now: u64) -> usize {
        if self.warning_active {
            return self.animation.frame();
        }
        self.animation.advance(now, HAZARD_FRAME_COUNT)
    }

    /// Fully past the leading edge.
    pub fn is_off_screen(&self) -> bool {
        self.pos.x < -self.size
    }

    /// Bounding box shrunk to `HITBOX_SCALE` of the footprint, centered.
    pub fn hitbox(&self) -> Rect {
        let offset = self.size * (1.0 - HITBOX_SCALE) / 2.0;
        let edge = self.size * HITBOX_SCALE;
        Rect::new(self.pos.x + offset, self.pos.y + offset, edge, edge)
    }
}

/// Owns the spawn schedule and the seeded RNG behind it. Spawning is the
/// only randomized element in the simulation.
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: Pcg32,
    last_spawn: u64,
    next_interval: u64,
}

impl Spawner {
    pub fn new(mut rng: Pcg32, now: u64) -> Self {
        let next_interval = draw_interval(&mut rng);
        Self {
            rng,
            last_spawn: now,
            next_interval,
        }
    }

    /// Spawn a hazard at the right edge with a uniform vertical offset once
    /// the scheduled interval has elapsed, then redraw the schedule.
    pub fn maybe_spawn(&mut self, now: u64, config: &RunConfig) -> Option<Hazard> {
        if now.saturating_sub(self.last_spawn) < self.next_interval {
            return None;
        }
        let y = self.rng.random_range(0.0..=config.hazard_spawn_max_y());
        self.last_spawn = now;
        self.next_interval = draw_interval(&mut self.rng);
        Some(Hazard::new(
            Vec2::new(config.width, y),
            config.hazard_size,
            now,
        ))
    }

    /// Shift the schedule forward after a pause so the paused interval does
    /// not count toward the next spawn.
    pub fn shift(&mut self, delta_ms: u64) {
        self.last_spawn += delta_ms;
    }

    pub fn next_interval(&self) -> u64 {
        self.next_interval
    }
}

fn draw_interval(rng: &mut Pcg32) -> u64 {
    rng.random_range(MIN_SPAWN_INTERVAL_MS..=MAX_SPAWN_INTERVAL_MS)
}
