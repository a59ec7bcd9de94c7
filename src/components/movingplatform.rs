//! Kinematic moving platform component.
//!
//! A platform oscillates between its origin and `origin + travel` on a
//! cosine ease, driven by world time. Platforms stay solid geometry (no
//! `RigidBody`), so characters resolve against them and the ground probe
//! treats them like any other floor.

use bevy_ecs::prelude::Component;
use glam::Vec2;

#[derive(Component, Debug, Clone)]
pub struct MovingPlatform {
    /// Resting position, one end of the sweep.
    pub origin: Vec2,
    /// Displacement to the far end of the sweep.
    pub travel: Vec2,
    /// Seconds for a full out-and-back cycle.
    pub period: f32,
}

impl MovingPlatform {
    pub fn new(origin: Vec2, travel: Vec2, period: f32) -> Self {
        Self {
            origin,
            travel,
            period,
        }
    }

    /// Position at time `t`. Starts at the origin, reaches the far end at
    /// half a period, returns at a full period. A non-positive period pins
    /// the platform to its origin.
    pub fn position_at(&self, t: f32) -> Vec2 {
        if self.period <= 0.0 {
            return self.origin;
        }
        let phase = std::f32::consts::TAU * t / self.period;
        self.origin + self.travel * (0.5 - 0.5 * phase.cos())
    }
}
