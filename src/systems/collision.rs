//! Collision detection and solid resolution.
//!
//! Two passes each tick, detection first:
//!
//! 1. **Contacts** — every overlap where at least one side is a trigger,
//!    both sides are dynamic bodies, or a dynamic body meets a breakable
//!    solid, emits a
//!    [`ContactEvent`](crate::events::contact::ContactEvent) with the
//!    contact normal (pointing from `b` toward `a`). Reactors subscribe to
//!    these through observers. Detection runs on the raw penetrating
//!    positions, before resolution separates the pair, so a head bump
//!    against a solid block is observable.
//! 2. **Resolution** — every unfrozen body is pushed out of overlapping
//!    solid (non-trigger, velocity-less) geometry along the axis of least
//!    penetration, and the blocked velocity component is zeroed. This is
//!    what makes the ground hold a character up against gravity.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::boxcollider::BoxCollider;
use crate::components::breakable::Breakable;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::events::contact::ContactEvent;

/// Push a dynamic AABB out of a static AABB. Returns the resolution normal
/// (unit axis pointing from the static box toward the dynamic one), or None
/// when there is no overlap.
fn resolve_penetration(
    dyn_min: Vec2,
    dyn_max: Vec2,
    stat_min: Vec2,
    stat_max: Vec2,
) -> Option<(Vec2, f32)> {
    let overlap_x = (dyn_max.x.min(stat_max.x)) - (dyn_min.x.max(stat_min.x));
    let overlap_y = (dyn_max.y.min(stat_max.y)) - (dyn_min.y.max(stat_min.y));
    if overlap_x <= 0.0 || overlap_y <= 0.0 {
        return None;
    }
    let dyn_center = (dyn_min + dyn_max) * 0.5;
    let stat_center = (stat_min + stat_max) * 0.5;
    if overlap_x < overlap_y {
        let sign = if dyn_center.x >= stat_center.x { 1.0 } else { -1.0 };
        Some((Vec2::new(sign, 0.0), overlap_x))
    } else {
        let sign = if dyn_center.y >= stat_center.y { 1.0 } else { -1.0 };
        Some((Vec2::new(0.0, sign), overlap_y))
    }
}

/// Resolve dynamic bodies against static solid geometry.
///
/// Static solids are entities with a non-trigger `BoxCollider` and no
/// `RigidBody`. Resolution pushes the body out and kills the velocity
/// component pointing into the surface, so landing on the ground zeroes
/// vertical speed and running into a wall zeroes horizontal speed.
pub fn solid_resolution(
    mut bodies: Query<(&mut MapPosition, &mut RigidBody, &BoxCollider)>,
    solids: Query<(&MapPosition, &BoxCollider), Without<RigidBody>>,
) {
    for (mut pos, mut rb, collider) in bodies.iter_mut() {
        if rb.frozen || collider.is_trigger {
            continue;
        }
        for (solid_pos, solid_collider) in solids.iter() {
            if solid_collider.is_trigger {
                continue;
            }
            let (dyn_min, dyn_max) = collider.aabb(pos.pos);
            let (stat_min, stat_max) = solid_collider.aabb(solid_pos.pos);
            if let Some((normal, depth)) =
                resolve_penetration(dyn_min, dyn_max, stat_min, stat_max)
            {
                pos.pos += normal * depth;
                // Kill the velocity component pointing into the surface.
                let into = rb.velocity.dot(normal);
                if into < 0.0 {
                    rb.velocity -= normal * into;
                }
            }
        }
    }
}

/// Detect reactive overlaps and trigger contact events.
///
/// A pair is reactive when at least one collider is a trigger, when both
/// entities carry a `RigidBody` (character vs character contacts, used for
/// stomp detection), or when a body overlaps a breakable solid (head
/// bumps). Plain solid-vs-solid static geometry never reports.
pub fn contact_detector(
    query: Query<(
        Entity,
        &MapPosition,
        &BoxCollider,
        Option<&RigidBody>,
        Option<&Breakable>,
    )>,
    mut commands: Commands,
) {
    let mut pairs: Vec<ContactEvent> = Vec::new();

    for [
        (entity_a, pos_a, col_a, rb_a, brk_a),
        (entity_b, pos_b, col_b, rb_b, brk_b),
    ] in query.iter_combinations()
    {
        let reactive = col_a.is_trigger
            || col_b.is_trigger
            || (rb_a.is_some() && rb_b.is_some())
            || (rb_a.is_some() && brk_b.is_some())
            || (rb_b.is_some() && brk_a.is_some());
        if !reactive {
            continue;
        }
        if !col_a.overlaps(pos_a.pos, col_b, pos_b.pos) {
            continue;
        }
        let (min_a, max_a) = col_a.aabb(pos_a.pos);
        let (min_b, max_b) = col_b.aabb(pos_b.pos);
        let normal = resolve_penetration(min_a, max_a, min_b, max_b)
            .map(|(n, _)| n)
            .unwrap_or(Vec2::ZERO);
        pairs.push(ContactEvent {
            a: entity_a,
            b: entity_b,
            normal,
        });
    }

    for event in pairs {
        commands.trigger(event);
    }
}
