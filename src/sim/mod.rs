//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes in as an argument, never from the system clock
//! - Seeded RNG only
//! - No rendering, audio, or storage dependencies

pub mod animation;
pub mod avatar;
pub mod collision;
pub mod config;
pub mod hazard;
pub mod score;
pub mod state;
pub mod tick;

pub use animation::FrameTimer;
pub use avatar::Avatar;
pub use collision::{Rect, check_collisions};
pub use config::{ConfigError, RunConfig};
pub use hazard::{Hazard, Spawner};
pub use score::ScoreAccumulator;
pub use state::{GamePhase, GameState, HazardView, Snapshot};
pub use tick::{TickInput, TickOutcome, tick};
