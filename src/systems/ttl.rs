//! TTL (Time-to-live) system.
//!
//! Decrements TTL timers and despawns entities when their time runs out.
//! Projectiles are the main customer; their lifetime bounds how far a shot
//! travels. The countdown respects
//! [`WorldTime::time_scale`](crate::resources::worldtime::WorldTime) since
//! `delta` is already scaled.

use bevy_ecs::prelude::*;

use crate::components::ttl::Ttl;
use crate::resources::worldtime::WorldTime;

/// Decrements TTL and despawns entities when it reaches zero.
pub fn ttl_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Ttl)>,
    mut commands: Commands,
) {
    let dt = world_time.delta;
    for (entity, mut ttl) in query.iter_mut() {
        ttl.remaining -= dt;
        if ttl.remaining <= 0.0 {
            commands.entity(entity).try_despawn();
        }
    }
}
