//! Avatar vertical motion model
//!
//! Single-axis integrator: thrust overrides velocity upward every tick it is
//! held, gravity is added every tick, position is clamped to the playfield
//! with velocity zeroed on clamp. Hitting floor or ceiling is not a loss
//! condition, only a clamp.

use crate::consts::AVATAR_FRAME_COUNT;
use crate::sim::animation::FrameTimer;
use crate::sim::collision::Rect;
use crate::sim::config::RunConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Avatar {
    pub y: f32,
    pub velocity: f32,
    pub animation: FrameTimer,
}

impl Avatar {
    /// Spawn centered vertically, at rest.
    pub fn new(config: &RunConfig, now: u64) -> Self {
        Self {
            y: config.height / 2.0 - config.avatar_size / 2.0,
            velocity: 0.0,
            animation: FrameTimer::new(now),
        }
    }

    /// One tick of physics. Thrust is a per-tick velocity override, not an
    /// accumulating impulse: holding the input re-applies the same upward
    /// velocity each tick before gravity is added.
    pub fn integrate(&mut self, thrust: bool, config: &RunConfig) {
        if thrust {
            self.velocity = config.thrust_velocity;
        }
        self.velocity += config.gravity;
        self.y += self.velocity;

        if self.y < 0.0 {
            self.y = 0.0;
            self.velocity = 0.0;
        }
        let floor = config.avatar_floor();
        if self.y > floor {
            self.y = floor;
            self.velocity = 0.0;
        }
    }

    /// Advance the sprite cycle.
    pub fn animate(&mut self, now: u64) -> usize {
        self.animation.advance(now, AVATAR_FRAME_COUNT)
    }

    /// Full bounding rectangle at the render position.
    pub fn hitbox(&self, config: &RunConfig) -> Rect {
        Rect::new(config.avatar_x, self.y, config.avatar_size, config.avatar_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn config() -> RunConfig {
        RunConfig::new(1000.0, 2000.0).unwrap()
    }

    #[test]
    fn spawns_centered() {
        let config = config();
        let avatar = Avatar::new(&config, 0);
        assert_eq!(avatar.y, 2000.0 / 2.0 - config.avatar_size / 2.0);
        assert_eq!(avatar.velocity, 0.0);
    }

    #[test]
    fn falls_without_input_until_floor_clamp() {
        // Position strictly increases under gravity until the floor clamp,
        // at which point velocity resets to zero.
        let config = config();
        let mut avatar = Avatar::new(&config, 0);
        let mut previous = avatar.y;
        let mut clamped = false;
        for _ in 0..600 {
            avatar.integrate(false, &config);
            if avatar.y >= config.avatar_floor() {
                clamped = true;
                assert_eq!(avatar.y, config.avatar_floor());
                assert_eq!(avatar.velocity, 0.0);
                break;
            }
            assert!(avatar.y > previous, "fall must be strictly monotonic");
            previous = avatar.y;
        }
        assert!(clamped, "avatar never reached the floor");
    }

    #[test]
    fn thrust_overrides_velocity_instead_of_accumulating() {
        let config = config();
        let mut avatar = Avatar::new(&config, 0);
        avatar.integrate(true, &config);
        let single = avatar.velocity;
        // Holding thrust re-applies the same override each tick.
        avatar.integrate(true, &config);
        avatar.integrate(true, &config);
        assert_eq!(avatar.velocity, single);
        assert_eq!(single, config.thrust_velocity + config.gravity);
    }

    #[test]
    fn ceiling_clamp_zeroes_velocity() {
        let config = config();
        let mut avatar = Avatar::new(&config, 0);
        for _ in 0..200 {
            avatar.integrate(true, &config);
        }
        assert_eq!(avatar.y, 0.0);
        assert_eq!(avatar.velocity, 0.0);
    }

    proptest! {
        #[test]
        fn clamp_invariant_holds_for_any_input_sequence(
            inputs in proptest::collection::vec(any::<bool>(), 1..400)
        ) {
            let config = config();
            let mut avatar = Avatar::new(&config, 0);
            for thrust in inputs {
                avatar.integrate(thrust, &config);
                prop_assert!(avatar.y >= 0.0);
                prop_assert!(avatar.y <= config.avatar_floor());
            }
        }
    }
}
