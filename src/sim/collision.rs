//! Axis-aligned collision detection
//!
//! Rectangle intersection uses open boundaries: rectangles that merely touch
//! along an edge do not collide. Hazard hitboxes arrive already shrunk (see
//! `Hazard::hitbox`), and hazards still in their warning state are exempt
//! regardless of geometric overlap.

use glam::Vec2;

use crate::sim::hazard::Hazard;

/// Axis-aligned rectangle, min corner plus size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Open-boundary overlap test: shared edges are not intersections.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x < other.max().x
            && other.min.x < self.max().x
            && self.min.y < other.max().y
            && other.min.y < self.max().y
    }
}

/// Test the avatar hitbox against every mobile hazard. Returns true on the
/// first qualifying overlap; warning-state hazards never qualify.
pub fn check_collisions(avatar_hitbox: &Rect, hazards: &[Hazard]) -> bool {
    hazards
        .iter()
        .any(|hazard| !hazard.warning_active && avatar_hitbox.intersects(&hazard.hitbox()))
}
