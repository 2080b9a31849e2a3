//! Per-tick simulation step
//!
//! Stage order is fixed and must not be reordered: input sample -> physics
//! integrate -> spawn/advance/prune hazards -> advance animations ->
//! collision check -> score update. Snapshot publication happens in the
//! loop, after the tick returns.

use crate::sim::collision::check_collisions;
use crate::sim::state::{GamePhase, GameState};

/// Input state for a single tick, sampled level-wise before the tick runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Player is pressing/holding the thrust control
    pub thrust: bool,
}

/// What the loop needs to know after a tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickOutcome {
    /// The run entered `GameOver` during this tick. Reported exactly once
    /// per run, even when several hazards overlap simultaneously.
    pub game_over: bool,
}

/// Advance the simulation by one tick at time `now`. No-op unless running.
pub fn tick(state: &mut GameState, input: TickInput, now: u64) -> TickOutcome {
    if !state.is_running() {
        return TickOutcome::default();
    }

    // Physics
    state.avatar.integrate(input.thrust, &state.config);

    // Hazards: spawn, advance, prune
    if let Some(hazard) = state.spawner.maybe_spawn(now, &state.config) {
        log::debug!("hazard spawned at y={:.1}", hazard.pos.y);
        state.hazards.push(hazard);
    }
    let scroll_speed = state.config.scroll_speed;
    for hazard in &mut state.hazards {
        hazard.update(now, scroll_speed);
    }
    state.hazards.retain(|hazard| !hazard.is_off_screen());

    // Animations (warning-state hazards hold their glyph)
    state.avatar.animate(now);
    for hazard in &mut state.hazards {
        hazard.animate(now);
    }

    // Collision: terminal transition, one-way
    let avatar_hitbox = state.avatar.hitbox(&state.config);
    if check_collisions(&avatar_hitbox, &state.hazards) {
        state.phase = GamePhase::GameOver;
        log::info!("collision at y={:.1}, final score {:.1}", state.avatar.y, state.score.value());
        return TickOutcome { game_over: true };
    }

    // Score accrues only while alive
    state.score.tick(now);

    TickOutcome::default()
}
