//! Physical state sensor.
//!
//! Recomputes each character's [`PhysicalState`] every physics tick from
//! short AABB probes against nearby collision geometry. The probes filter
//! hits against the probing entity itself rather than relying on any
//! layer/group scheme, since world geometry and characters may share one;
//! trigger colliders never satisfy a probe.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::actionqueue::ActionQueue;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::physicalstate::PhysicalState;
use crate::components::rigidbody::RigidBody;

/// Probe thickness in world units.
const PROBE_DEPTH: f32 = 0.2;
/// Fraction of the collider width used by the ground probe, so standing at
/// a ledge edge with a sliver of overlap does not count as grounded.
const GROUND_PROBE_WIDTH: f32 = 0.8;
/// Fraction of the collider height used by the wall probe.
const WALL_PROBE_HEIGHT: f32 = 0.8;

/// Recompute grounded/wall contact and mirror velocity for every character.
///
/// Runs after solid resolution and before the action engine, so gating
/// decisions see this tick's resolved geometry.
pub fn physical_state_sensor(
    mut sensors: Query<(
        Entity,
        &MapPosition,
        &BoxCollider,
        &RigidBody,
        &ActionQueue,
        &mut PhysicalState,
    )>,
    geometry: Query<(Entity, &MapPosition, &BoxCollider)>,
) {
    for (entity, pos, collider, rb, queue, mut state) in sensors.iter_mut() {
        let (min, max) = collider.aabb(pos.pos);
        let width = max.x - min.x;
        let height = max.y - min.y;
        let center_x = (min.x + max.x) * 0.5;
        let center_y = (min.y + max.y) * 0.5;

        // Thin box just under the feet.
        let ground_half_w = width * GROUND_PROBE_WIDTH * 0.5;
        let ground_min = Vec2::new(center_x - ground_half_w, min.y - PROBE_DEPTH);
        let ground_max = Vec2::new(center_x + ground_half_w, min.y);

        // Thin box off the collider edge in the facing direction only.
        let wall_half_h = height * WALL_PROBE_HEIGHT * 0.5;
        let (wall_min_x, wall_max_x) = if queue.facing >= 0 {
            (max.x, max.x + PROBE_DEPTH)
        } else {
            (min.x - PROBE_DEPTH, min.x)
        };
        let wall_min = Vec2::new(wall_min_x, center_y - wall_half_h);
        let wall_max = Vec2::new(wall_max_x, center_y + wall_half_h);

        let mut grounded = false;
        let mut touching_wall = false;
        for (other, other_pos, other_col) in geometry.iter() {
            // Self-collisions must be excluded explicitly; filtering by
            // layer alone proved unreliable when everything shares one.
            if other == entity || other_col.is_trigger {
                continue;
            }
            if !grounded && other_col.overlaps_aabb(other_pos.pos, ground_min, ground_max) {
                grounded = true;
            }
            if !touching_wall && other_col.overlaps_aabb(other_pos.pos, wall_min, wall_max) {
                touching_wall = true;
            }
            if grounded && touching_wall {
                break;
            }
        }

        state.grounded = grounded;
        state.touching_wall = touching_wall;
        state.velocity = rb.velocity;
    }
}
