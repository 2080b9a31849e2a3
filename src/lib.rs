//! Reef Runner - endless-runner arcade simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (avatar physics, hazard spawning, collisions, score)
//! - `clock`: Injectable monotonic time source
//! - `runner`: Dedicated loop thread with pause/resume/stop control
//! - `scores`: Score store boundary (best/last persistence)
//! - `settings`: Read-only feedback flags consulted at collision time

pub mod clock;
pub mod runner;
pub mod scores;
pub mod settings;
pub mod sim;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use runner::GameLoop;
pub use scores::{MemoryScoreStore, ScoreStore};
pub use settings::Settings;

/// Game tuning constants
pub mod consts {
    /// Target tick cadence (~60 Hz)
    pub const TICK_INTERVAL_MS: u64 = 16;

    /// Avatar width/height as a fraction of playfield width
    pub const AVATAR_SIZE_FRACTION: f32 = 0.05;
    /// Floor for the avatar size on very small playfields (pixels)
    pub const MIN_AVATAR_SIZE: f32 = 24.0;
    /// Fixed horizontal render/collision position, fraction of playfield width
    pub const AVATAR_X_FRACTION: f32 = 0.15;
    /// Hazard footprint relative to the avatar size
    pub const HAZARD_SIZE_MULTIPLIER: f32 = 2.0;

    /// Upward velocity applied every tick the thrust input is held,
    /// as a fraction of playfield height (velocity override, not an impulse)
    pub const THRUST_VELOCITY_FRACTION: f32 = 0.02;
    /// Per-tick downward acceleration, fraction of playfield height
    pub const GRAVITY_FRACTION: f32 = 0.003;
    /// Base scroll speed per tick, fraction of playfield width
    pub const SCROLL_SPEED_FRACTION: f32 = 0.005;
    /// Hazards travel faster than the base scroll
    pub const HAZARD_SPEED_MULTIPLIER: f32 = 1.5;

    /// Spawn schedule bounds (interval redrawn uniformly after each spawn)
    pub const MIN_SPAWN_INTERVAL_MS: u64 = 1000;
    pub const MAX_SPAWN_INTERVAL_MS: u64 = 2000;
    /// Grace period during which a fresh hazard is immobile and collision-exempt
    pub const WARNING_DURATION_MS: u64 = 1000;

    /// Sprite frame-cycle interval, measured independently per entity
    pub const FRAME_INTERVAL_MS: u64 = 100;
    /// Avatar sprite sheet length
    pub const AVATAR_FRAME_COUNT: usize = 5;
    /// Hazard sprite sheet length
    pub const HAZARD_FRAME_COUNT: usize = 10;

    /// Hazard hitbox shrink factor (forgives near-misses)
    pub const HITBOX_SCALE: f32 = 0.6;

    /// Score accrues one unit per this many milliseconds of alive time
    pub const SCORE_UNIT_MS: f64 = 100.0;

    /// Bounded wait for the in-flight tick to finish on pause/stop
    pub const PAUSE_ACK_TIMEOUT_MS: u64 = 500;
}
