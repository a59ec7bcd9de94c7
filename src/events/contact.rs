//! Contact event emitted by the collision system.
//!
//! Fired whenever two colliders overlap and at least one side is reactive
//! (trigger geometry or a non-solid group). Reactors subscribe through
//! observers; the engine itself never consumes these.

use bevy_ecs::prelude::*;
use glam::Vec2;

/// Two entities overlapped this tick.
///
/// `normal` points from `b` toward `a` along the axis of least penetration,
/// so a reactor can distinguish a stomp (player above, normal pointing up
/// when the player is `a`) from a side hit.
#[derive(Event, Debug, Clone, Copy)]
pub struct ContactEvent {
    pub a: Entity,
    pub b: Entity,
    pub normal: Vec2,
}
