//! Gravity-bound kinematic body.
//!
//! The [`RigidBody`] component stores the velocity the movement system
//! integrates each tick. While a command is in flight the action engine is
//! the only writer of velocity; reactors layer knockback on top afterwards,
//! which the design accepts as an explicit override.
//!
//! The `frozen` flag disables all movement integration, useful for entities
//! whose position is controlled externally.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Kinematic body storing velocity and a per-entity gravity scale.
///
/// Gravity itself lives in
/// [`EngineConfig`](crate::resources::engineconfig::EngineConfig); the scale
/// lets projectiles opt out (`0.0`) without a separate body type.
#[derive(Component, Clone, Debug)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vec2,
    /// Multiplier on the world gravity vector. `1.0` = full gravity.
    pub gravity_scale: f32,
    /// When true, the movement system skips this entity entirely.
    pub frozen: bool,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody with zero velocity under full gravity.
    pub fn new() -> Self {
        Self {
            velocity: Vec2::ZERO,
            gravity_scale: 1.0,
            frozen: false,
        }
    }

    /// Create a RigidBody unaffected by gravity (projectiles).
    pub fn without_gravity() -> Self {
        Self {
            velocity: Vec2::ZERO,
            gravity_scale: 0.0,
            frozen: false,
        }
    }

    /// Set horizontal velocity, preserving the vertical component so gravity
    /// integration is never fought by locomotion.
    pub fn set_horizontal(&mut self, vx: f32) {
        self.velocity.x = vx;
    }

    /// Set vertical velocity, preserving the horizontal component.
    pub fn set_vertical(&mut self, vy: f32) {
        self.velocity.y = vy;
    }

    /// Zero the full velocity vector.
    pub fn zero(&mut self) {
        self.velocity = Vec2::ZERO;
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn unfreeze(&mut self) {
        self.frozen = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let rb = RigidBody::new();
        assert_eq!(rb.velocity, Vec2::ZERO);
        assert_eq!(rb.gravity_scale, 1.0);
        assert!(!rb.frozen);
    }

    #[test]
    fn test_without_gravity() {
        let rb = RigidBody::without_gravity();
        assert_eq!(rb.gravity_scale, 0.0);
    }

    #[test]
    fn test_set_horizontal_preserves_vertical() {
        let mut rb = RigidBody::new();
        rb.velocity = Vec2::new(1.0, -7.0);
        rb.set_horizontal(5.0);
        assert_eq!(rb.velocity, Vec2::new(5.0, -7.0));
    }

    #[test]
    fn test_set_vertical_preserves_horizontal() {
        let mut rb = RigidBody::new();
        rb.velocity = Vec2::new(3.0, 0.0);
        rb.set_vertical(10.0);
        assert_eq!(rb.velocity, Vec2::new(3.0, 10.0));
    }

    #[test]
    fn test_freeze_unfreeze() {
        let mut rb = RigidBody::new();
        rb.freeze();
        assert!(rb.frozen);
        rb.unfreeze();
        assert!(!rb.frozen);
    }
}
