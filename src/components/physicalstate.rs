//! Per-tick physical state snapshot.
//!
//! Recomputed every physics tick by the
//! [`physical_state_sensor`](crate::systems::sensor::physical_state_sensor)
//! system from collision-geometry probes. Consumed by the action engine
//! (jump/wall-jump gating) and the animator (visual state selection).
//! Never persisted.

use bevy_ecs::prelude::Component;
use glam::Vec2;

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct PhysicalState {
    /// True when the ground probe under the feet overlaps solid geometry.
    pub grounded: bool,
    /// True when the wall probe in the facing direction overlaps solid
    /// geometry. Only the facing side is probed.
    pub touching_wall: bool,
    /// Mirror of the body velocity at the time of the probe.
    pub velocity: Vec2,
}
