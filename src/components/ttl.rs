//! Time-to-live component for automatic entity despawning.
//!
//! Used for short-lived entities the reactors spawn, projectiles mainly.
//! No callback fires on expiry; it is a fire-and-forget mechanism.

use bevy_ecs::prelude::Component;

/// Despawns the entity once `remaining` counts down to zero.
///
/// The countdown respects
/// [`WorldTime::time_scale`](crate::resources::worldtime::WorldTime).
#[derive(Component)]
pub struct Ttl {
    /// Remaining time in seconds before despawn.
    pub remaining: f32,
}

impl Ttl {
    pub fn new(seconds: f32) -> Self {
        Ttl { remaining: seconds }
    }
}
