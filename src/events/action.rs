//! Events the action engine emits while executing commands.
//!
//! All of these are notifications: the engine never waits on a subscriber,
//! and a missing observer is not an error.

use bevy_ecs::prelude::*;

/// The pending queue emptied and nothing is executing anymore.
///
/// Fired once per drain, from the cleanup step of the last command.
/// External turn-control logic uses this to know when it is safe to prompt
/// the command source for the next batch.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueDrainedEvent {
    pub entity: Entity,
}

/// Deferred projectile spawn for a shoot command.
///
/// Fired at a fixed fraction of the command's duration, at most once per
/// command, timed to the muzzle frame of the shoot animation.
#[derive(Event, Debug, Clone, Copy)]
pub struct ShotEvent {
    pub shooter: Entity,
    /// Facing direction at fire time, -1 or +1.
    pub direction: i8,
}

/// An attack or break-object command started; breakables within reach take
/// a hit.
#[derive(Event, Debug, Clone, Copy)]
pub struct AttackEvent {
    pub attacker: Entity,
    /// Facing direction of the strike, -1 or +1.
    pub direction: i8,
}

/// An interact command started. Consumed by game-side logic, not the engine.
#[derive(Event, Debug, Clone, Copy)]
pub struct InteractEvent {
    pub entity: Entity,
}
