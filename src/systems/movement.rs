//! Movement integration.
//!
//! Applies gravity to every unfrozen body and integrates velocity into
//! position. Gravity lives here and only here: the action engine writes
//! horizontal velocity and one-shot impulses but never integrates gravity
//! itself, so a jump's arc is always owned by this system.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::engineconfig::EngineConfig;
use crate::resources::worldtime::WorldTime;

pub fn movement(
    mut query: Query<(&mut MapPosition, &mut RigidBody)>,
    time: Res<WorldTime>,
    config: Res<EngineConfig>,
) {
    let dt = time.delta;
    for (mut position, mut rigidbody) in query.iter_mut() {
        if rigidbody.frozen {
            continue;
        }
        let g = config.gravity * rigidbody.gravity_scale;
        rigidbody.velocity.y += g * dt;
        let delta = rigidbody.velocity * dt;
        position.pos += delta;
    }
}
