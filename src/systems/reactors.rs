//! Contact reactors.
//!
//! Observers translating collision contacts and engine strike events into
//! gameplay outcomes: hazard damage with knockback, enemy stomps, goal
//! flags, breakable hits, and projectile spawning. Reactors run after the
//! engine's per-tick velocity write, so a knockback impulse planted here
//! survives until the engine's next tick.
//!
//! Entity roles are tagged with [`Group`] names: `"player"`, `"enemy"`,
//! `"hazard"`, `"goal"`, `"bullet"`, `"breakable"`, `"deathzone"`.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, info};

use crate::components::boxcollider::BoxCollider;
use crate::components::breakable::Breakable;
use crate::components::group::Group;
use crate::components::health::Health;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::ttl::Ttl;
use crate::events::action::{AttackEvent, ShotEvent};
use crate::events::contact::ContactEvent;
use crate::resources::engineconfig::EngineConfig;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;

/// Upward bounce applied to the player after a successful stomp.
const STOMP_BOUNCE: f32 = 6.0;
/// Minimum downward contact-normal component for a contact to count as a
/// stomp rather than a side hit.
const STOMP_NORMAL_MIN: f32 = 0.5;
/// Minimum upward contact-normal component for a block contact to count as
/// a hit from below rather than a landing or side brush.
const BUMP_NORMAL_MIN: f32 = 0.5;

/// Orient a contact so the entity matching `name` is first. Returns
/// `(matching, other, normal from other toward matching)`.
fn oriented(
    event: &ContactEvent,
    groups: &Query<&Group>,
    name: &str,
) -> Option<(Entity, Entity, Vec2)> {
    if groups.get(event.a).is_ok_and(|g| g.is(name)) {
        Some((event.a, event.b, event.normal))
    } else if groups.get(event.b).is_ok_and(|g| g.is(name)) {
        Some((event.b, event.a, -event.normal))
    } else {
        None
    }
}

/// Damage `victim` and plant a knockback impulse away from the source.
fn apply_damage(
    victim: Entity,
    normal: Vec2,
    healths: &mut Query<(&mut Health, &mut RigidBody)>,
) {
    let Ok((mut health, mut rb)) = healths.get_mut(victim) else {
        return;
    };
    if !health.take_damage(1) {
        return;
    }
    let dir = if normal.x != 0.0 {
        normal.x.signum()
    } else {
        -rb.velocity.x.signum()
    };
    let force = health.knockback_force;
    rb.velocity = Vec2::new(dir * force, force * 0.5);
    debug!("damage applied, {} hp left", health.current);
}

/// Hazard contacts damage any side carrying health.
pub fn hazard_reactor(
    trigger: On<ContactEvent>,
    groups: Query<&Group>,
    mut healths: Query<(&mut Health, &mut RigidBody)>,
) {
    let event = trigger.event();
    let Some((_, other, normal)) = oriented(event, &groups, "hazard") else {
        return;
    };
    // Normal is reoriented toward the hazard; flip it to push the victim away.
    apply_damage(other, -normal, &mut healths);
}

/// Enemy contacts: stomps from above despawn the enemy and bounce the
/// player, anything else damages the player.
pub fn enemy_reactor(
    trigger: On<ContactEvent>,
    groups: Query<&Group>,
    mut healths: Query<(&mut Health, &mut RigidBody)>,
    mut commands: Commands,
) {
    let event = trigger.event();
    let Some((enemy, other, normal)) = oriented(event, &groups, "enemy") else {
        return;
    };
    if !groups.get(other).is_ok_and(|g| g.is("player")) {
        return;
    }
    // Normal points from the player toward the enemy here; a stomp has the
    // player above, so the normal points down.
    if normal.y < -STOMP_NORMAL_MIN {
        info!("enemy stomped");
        commands.entity(enemy).try_despawn();
        if let Ok((_, mut rb)) = healths.get_mut(other) {
            rb.velocity.y = STOMP_BOUNCE;
        }
    } else {
        apply_damage(other, -normal, &mut healths);
    }
}

/// Goal contacts raise the `goal_reached` world flag.
pub fn goal_reactor(
    trigger: On<ContactEvent>,
    groups: Query<&Group>,
    mut signals: ResMut<WorldSignals>,
) {
    let event = trigger.event();
    let Some((_, other, _)) = oriented(event, &groups, "goal") else {
        return;
    };
    if !groups.get(other).is_ok_and(|g| g.is("player")) {
        return;
    }
    if !signals.has_flag("goal_reached") {
        info!("goal reached");
        signals.set_flag("goal_reached");
    }
}

/// Bullets despawn on any non-trigger contact and pass their hit on to
/// enemies and breakables.
pub fn bullet_reactor(
    trigger: On<ContactEvent>,
    groups: Query<&Group>,
    mut breakables: Query<&mut Breakable>,
    mut commands: Commands,
) {
    let event = trigger.event();
    let Some((bullet, other, _)) = oriented(event, &groups, "bullet") else {
        return;
    };
    // Bullets pass through the shooter and each other.
    if groups.get(other).is_ok_and(|g| g.is("player") || g.is("bullet")) {
        return;
    }
    commands.entity(bullet).try_despawn();
    if groups.get(other).is_ok_and(|g| g.is("enemy")) {
        info!("enemy shot down");
        commands.entity(other).try_despawn();
    } else if let Ok(mut breakable) = breakables.get_mut(other)
        && breakable.hit()
    {
        info!("obstacle shot apart");
        commands.entity(other).try_despawn();
    }
}

/// Breakable blocks take a hit when the player bumps them from below.
pub fn breakable_bump_reactor(
    trigger: On<ContactEvent>,
    groups: Query<&Group>,
    mut breakables: Query<&mut Breakable>,
    mut commands: Commands,
) {
    let event = trigger.event();
    // Orient the pair so the normal points from the other entity toward
    // the block.
    let (block, other, toward_block) = if breakables.contains(event.a) {
        (event.a, event.b, event.normal)
    } else if breakables.contains(event.b) {
        (event.b, event.a, -event.normal)
    } else {
        return;
    };
    if !groups.get(other).is_ok_and(|g| g.is("player")) {
        return;
    }
    // Only an upward contact counts; landing on top or brushing the side
    // leaves the block alone.
    if toward_block.y < BUMP_NORMAL_MIN {
        return;
    }
    let Ok(mut breakable) = breakables.get_mut(block) else {
        return;
    };
    if !breakable.break_from_below {
        return;
    }
    if breakable.hit() {
        info!("block broken from below");
        commands.entity(block).try_despawn();
    } else {
        debug!(
            "block bumped, {}/{} hits",
            breakable.hits, breakable.hits_to_break
        );
    }
}

/// Strike events hit breakables within reach in the strike direction.
pub fn attack_reactor(
    trigger: On<AttackEvent>,
    attackers: Query<(&MapPosition, &BoxCollider)>,
    mut breakables: Query<(Entity, &MapPosition, &BoxCollider, &mut Breakable)>,
    config: Res<EngineConfig>,
    mut commands: Commands,
) {
    let event = trigger.event();
    let Ok((pos, collider)) = attackers.get(event.attacker) else {
        return;
    };
    // Strike volume: a box extending `attack_reach` off the facing edge.
    let (min, max) = collider.aabb(pos.pos);
    let (strike_min_x, strike_max_x) = if event.direction >= 0 {
        (max.x, max.x + config.attack_reach)
    } else {
        (min.x - config.attack_reach, min.x)
    };
    let strike_min = Vec2::new(strike_min_x, min.y);
    let strike_max = Vec2::new(strike_max_x, max.y);

    for (entity, target_pos, target_col, mut breakable) in breakables.iter_mut() {
        if !target_col.overlaps_aabb(target_pos.pos, strike_min, strike_max) {
            continue;
        }
        if breakable.on_attacked() {
            info!("obstacle broken");
            commands.entity(entity).try_despawn();
        } else {
            debug!(
                "obstacle hit, {}/{} hits",
                breakable.hits, breakable.hits_to_break
            );
        }
    }
}

/// Deferred projectile spawn for a shoot command.
pub fn shot_reactor(
    trigger: On<ShotEvent>,
    shooters: Query<(&MapPosition, &BoxCollider)>,
    config: Res<EngineConfig>,
    mut commands: Commands,
) {
    let event = trigger.event();
    let Ok((pos, collider)) = shooters.get(event.shooter) else {
        return;
    };
    let dir = event.direction as f32;
    // Muzzle just off the facing edge, at collider center height.
    let (min, max) = collider.aabb(pos.pos);
    let muzzle = Vec2::new(
        if dir >= 0.0 { max.x + 0.1 } else { min.x - 0.1 },
        (min.y + max.y) * 0.5,
    );
    let mut body = RigidBody::without_gravity();
    body.velocity = Vec2::new(config.bullet_speed * dir, 0.0);
    commands.spawn((
        MapPosition { pos: muzzle },
        body,
        BoxCollider::new(0.2, 0.2).trigger(),
        Ttl::new(config.bullet_lifetime),
        Group::new("bullet"),
    ));
    debug!("bullet spawned at {:?}", muzzle);
}

/// Fall-out-of-world zones kill outright, bypassing invincibility.
pub fn death_zone_reactor(
    trigger: On<ContactEvent>,
    groups: Query<&Group>,
    mut healths: Query<&mut Health>,
) {
    let event = trigger.event();
    let Some((_, other, _)) = oriented(event, &groups, "deathzone") else {
        return;
    };
    let Ok(mut health) = healths.get_mut(other) else {
        return;
    };
    if !health.is_dead() {
        info!("fell out of the world");
        health.current = 0;
    }
}

/// Tick down per-entity invincibility windows.
pub fn invincibility_tick(mut query: Query<&mut Health>, time: Res<WorldTime>) {
    let dt = time.delta;
    for mut health in query.iter_mut() {
        if health.invincibility_timer > 0.0 {
            health.invincibility_timer = (health.invincibility_timer - dt).max(0.0);
        }
    }
}

/// Raise the `player_dead` flag once the player's health is exhausted.
pub fn death_watch(
    query: Query<(&Health, &Group)>,
    mut signals: ResMut<WorldSignals>,
) {
    for (health, group) in query.iter() {
        if group.is("player") && health.is_dead() && !signals.has_flag("player_dead") {
            info!("player died");
            signals.set_flag("player_dead");
        }
    }
}
