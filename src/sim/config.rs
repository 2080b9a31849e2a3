//! Per-run configuration derived from the playfield size
//!
//! Built once per playfield-size change (surface creation or resize). The
//! loop must not start without a valid config: zero or non-finite dimensions
//! would poison every downstream division and clamp.

use thiserror::Error;

use crate::consts::*;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("playfield dimensions must be positive, got {width}x{height}")]
    NonPositiveDimensions { width: f32, height: f32 },
    #[error("playfield dimensions must be finite, got {width}x{height}")]
    NonFiniteDimensions { width: f32, height: f32 },
    #[error("playfield height {height} cannot fit the {avatar_size} avatar")]
    PlayfieldTooShort { height: f32, avatar_size: f32 },
}

/// Everything the simulation derives from the playfield geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunConfig {
    pub width: f32,
    pub height: f32,
    /// Avatar bounding square edge
    pub avatar_size: f32,
    /// Fixed avatar abscissa (render and collision)
    pub avatar_x: f32,
    /// Hazard bounding square edge (spawn footprint, off-screen test,
    /// and collision base box before the hitbox shrink)
    pub hazard_size: f32,
    /// Base leftward scroll distance per tick
    pub scroll_speed: f32,
    /// Downward velocity added per tick
    pub gravity: f32,
    /// Velocity the thrust input overrides to, per tick it is held
    pub thrust_velocity: f32,
}

impl RunConfig {
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        if !width.is_finite() || !height.is_finite() {
            return Err(ConfigError::NonFiniteDimensions { width, height });
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::NonPositiveDimensions { width, height });
        }

        let avatar_size = (width * AVATAR_SIZE_FRACTION).max(MIN_AVATAR_SIZE);
        // A playfield shorter than the avatar leaves no legal ordinate at
        // all (avatar_floor would go negative).
        if height < avatar_size {
            return Err(ConfigError::PlayfieldTooShort {
                height,
                avatar_size,
            });
        }
        Ok(Self {
            width,
            height,
            avatar_size,
            avatar_x: width * AVATAR_X_FRACTION,
            hazard_size: avatar_size * HAZARD_SIZE_MULTIPLIER,
            scroll_speed: width * SCROLL_SPEED_FRACTION,
            gravity: height * GRAVITY_FRACTION,
            thrust_velocity: -(height * THRUST_VELOCITY_FRACTION),
        })
    }

    /// Highest legal avatar ordinate (floor clamp)
    pub fn avatar_floor(&self) -> f32 {
        self.height - self.avatar_size
    }

    /// Hazard spawn ordinate range upper bound; zero on playfields shorter
    /// than one hazard
    pub fn hazard_spawn_max_y(&self) -> f32 {
        (self.height - self.hazard_size).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_sizes_from_playfield() {
        let config = RunConfig::new(1000.0, 2000.0).unwrap();
        assert_eq!(config.avatar_size, 50.0);
        assert_eq!(config.hazard_size, 100.0);
        assert_eq!(config.avatar_x, 150.0);
        assert_eq!(config.scroll_speed, 5.0);
        assert_eq!(config.gravity, 6.0);
        assert_eq!(config.thrust_velocity, -40.0);
    }

    #[test]
    fn enforces_minimum_avatar_size() {
        let config = RunConfig::new(100.0, 200.0).unwrap();
        assert_eq!(config.avatar_size, MIN_AVATAR_SIZE);
    }

    #[test]
    fn rejects_degenerate_dimensions() {
        assert!(matches!(
            RunConfig::new(0.0, 500.0),
            Err(ConfigError::NonPositiveDimensions { .. })
        ));
        assert!(matches!(
            RunConfig::new(500.0, -1.0),
            Err(ConfigError::NonPositiveDimensions { .. })
        ));
        assert!(matches!(
            RunConfig::new(f32::NAN, 500.0),
            Err(ConfigError::NonFiniteDimensions { .. })
        ));
    }

    #[test]
    fn rejects_playfield_shorter_than_the_avatar() {
        // 100px wide forces the 24px minimum avatar; a 20px-tall field has
        // no legal ordinate and must not produce a negative floor clamp.
        assert_eq!(
            RunConfig::new(100.0, 20.0),
            Err(ConfigError::PlayfieldTooShort {
                height: 20.0,
                avatar_size: MIN_AVATAR_SIZE,
            })
        );

        // The shortest accepted field keeps the floor at exactly zero.
        let config = RunConfig::new(100.0, MIN_AVATAR_SIZE).unwrap();
        assert_eq!(config.avatar_floor(), 0.0);
        let mut avatar = crate::sim::Avatar::new(&config, 0);
        avatar.integrate(false, &config);
        assert_eq!(avatar.y, 0.0);
    }

    #[test]
    fn spawn_range_degrades_to_zero_on_tiny_playfields() {
        let config = RunConfig::new(480.0, 30.0).unwrap();
        assert!(config.hazard_size > config.height);
        assert_eq!(config.hazard_spawn_max_y(), 0.0);
    }
}
