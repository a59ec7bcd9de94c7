//! Action execution engine.
//!
//! [`action_engine`] is the fixed-step driver for every character's
//! [`ActionQueue`](crate::components::actionqueue::ActionQueue). Each tick
//! it starts the next pending command when idle, applies the in-flight
//! command's continuous effect, checks its deferred side effect, and on
//! completion runs cleanup and immediately chains into the next command so
//! queued batches drain without idle frame gaps.
//!
//! The engine is the sole writer of body velocity while a command is in
//! flight. Reactors layering knockback on top run after this system.
//!
//! # State machine
//!
//! `Idle -> Executing(command, elapsed) -> Idle`, with the Executing state
//! held in [`ActiveAction`]. Entry applies the command's one-shot impulse
//! exactly once (gated on physical state); every tick applies the hold
//! effect; completion restores the collider profile, clears stance flags,
//! and zeroes horizontal velocity unconditionally.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, warn};

use crate::action::ActionKind;
use crate::components::actionqueue::{ActionQueue, ActiveAction};
use crate::components::animator::Animator;
use crate::components::boxcollider::BoxCollider;
use crate::components::physicalstate::PhysicalState;
use crate::components::rigidbody::RigidBody;
use crate::components::shapeprofile::{ShapeProfile, Stance};
use crate::events::action::{AttackEvent, InteractEvent, QueueDrainedEvent, ShotEvent};
use crate::resources::engineconfig::EngineConfig;
use crate::resources::vocabulary::{ActionVocabulary, EntryEffect, HoldEffect};
use crate::resources::worldtime::WorldTime;

/// Vertical speed band inside which a character counts as jump-ready even
/// when the ground probe missed this frame. A single raycast can miss a
/// single frame; the tolerance band keeps jumps from being swallowed.
pub const VERTICAL_SPEED_TOLERANCE: f32 = 0.1;

/// Drive every action queue by one fixed physics step.
pub fn action_engine(
    mut query: Query<(
        Entity,
        &mut ActionQueue,
        &mut RigidBody,
        &mut BoxCollider,
        &ShapeProfile,
        &PhysicalState,
        &mut Animator,
    )>,
    vocab: Res<ActionVocabulary>,
    config: Res<EngineConfig>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    let dt = time.delta;
    for (entity, mut queue, mut rb, mut collider, profile, phys, mut animator) in
        query.iter_mut()
    {
        // Idle -> Executing when the queue has work.
        if queue.current.is_none() {
            start_next(
                entity,
                &mut queue,
                &mut rb,
                &mut collider,
                profile,
                phys,
                &mut animator,
                &vocab,
                &config,
                &mut commands,
            );
        }

        let Some(mut active) = queue.current else {
            continue;
        };
        let params = *vocab.resolve(active.command.kind);
        let scale = active.command.strength_scale();

        // Continuous effect, reapplied every tick while in flight.
        match params.hold {
            HoldEffect::None => {}
            HoldEffect::Horizontal { speed, dir } => {
                let d = if dir == 0 { queue.facing } else { dir };
                rb.set_horizontal(speed * scale * d as f32);
            }
            HoldEffect::ZeroHorizontal => {
                rb.set_horizontal(0.0);
            }
            HoldEffect::WallSlide { max_fall } => {
                if phys.touching_wall && !phys.grounded {
                    queue.is_wall_sliding = true;
                    if rb.velocity.y < -max_fall {
                        rb.velocity.y = -max_fall;
                    }
                } else {
                    queue.is_wall_sliding = false;
                }
            }
        }

        active.elapsed += dt;

        // Deferred one-shot side effect (projectile spawn), checked every
        // tick including the completion tick so a fire instant landing in
        // the final window is never lost. Fired at most once; never blocks
        // the next dequeue.
        if let Some(fire_at) = active.deferred_at
            && !active.deferred_fired
            && active.elapsed >= fire_at
        {
            active.deferred_fired = true;
            commands.trigger(ShotEvent {
                shooter: entity,
                direction: queue.facing,
            });
        }

        if active.finished() {
            debug!(
                "action {:?} finished after {:.2}s",
                active.command.kind, active.elapsed
            );
            cleanup(&mut queue, &mut rb, &mut collider, profile);
            queue.current = None;
            // Continuous drain: chain straight into the next command. Its
            // hold effect begins next tick; its entry fires now.
            let started = start_next(
                entity,
                &mut queue,
                &mut rb,
                &mut collider,
                profile,
                phys,
                &mut animator,
                &vocab,
                &config,
                &mut commands,
            );
            if !started {
                commands.trigger(QueueDrainedEvent { entity });
            }
        } else {
            queue.current = Some(active);
        }
    }
}

/// Dequeue and start the next command. Returns false when the queue is empty.
#[allow(clippy::too_many_arguments)]
fn start_next(
    entity: Entity,
    queue: &mut ActionQueue,
    rb: &mut RigidBody,
    collider: &mut BoxCollider,
    profile: &ShapeProfile,
    phys: &PhysicalState,
    animator: &mut Animator,
    vocab: &ActionVocabulary,
    config: &EngineConfig,
    commands: &mut Commands,
) -> bool {
    let Some(command) = queue.dequeue() else {
        return false;
    };
    let mut active = ActiveAction::new(command);
    let params = *vocab.resolve(command.kind);
    let scale = command.strength_scale();

    if command.kind == ActionKind::Noop {
        warn!(
            "unrecognized action tag, idling for {:.2}s",
            active.duration
        );
    } else {
        debug!("executing {:?} for {:.2}s", command.kind, active.duration);
    }

    // Direction is the single source of truth for mirroring and for the
    // asymmetric jumps; update it before any entry effect reads it.
    if let Some(dir) = command.kind.direction() {
        queue.facing = dir;
    }

    // Stance-changing commands force the matching collider profile for the
    // duration; cleanup restores the captured normal variant.
    profile.shape(params.stance).apply(collider);
    queue.stance = params.stance;
    queue.is_crouching = params.stance == Stance::Crouch;

    if let Some(state) = params.lock {
        animator.play_one_shot(state, active.duration);
    }

    if params.deferred_shot {
        active.deferred_at = Some(config.shoot_fire_fraction * active.duration);
    }

    apply_entry(entity, &params.entry, scale, queue, rb, phys, commands);

    queue.current = Some(active);
    true
}

/// True when an impulse jump may fire: on the ground, or inside the vertical
/// speed tolerance band that covers single-frame probe misses.
fn jump_ready(phys: &PhysicalState) -> bool {
    phys.grounded || phys.velocity.y.abs() < VERTICAL_SPEED_TOLERANCE
}

/// Apply the command's instantaneous effect exactly once.
///
/// Gated effects whose precondition fails are silently skipped (logged);
/// the command's duration window still runs and the queue always advances.
fn apply_entry(
    entity: Entity,
    entry: &EntryEffect,
    scale: f32,
    queue: &mut ActionQueue,
    rb: &mut RigidBody,
    phys: &PhysicalState,
    commands: &mut Commands,
) {
    match *entry {
        EntryEffect::None => {}
        EntryEffect::Jump { force } => {
            if jump_ready(phys) {
                // Zero existing vertical velocity, then add the force, so
                // the apex is the same no matter what came before.
                rb.set_vertical(force * scale);
            } else {
                debug!("jump skipped: airborne with vertical speed");
            }
        }
        EntryEffect::DirectionalJump { force, dir } => {
            if jump_ready(phys) {
                queue.facing = dir;
                // Re-zero the full vector before the diagonal impulse so the
                // result is deterministic regardless of pre-jump motion.
                rb.zero();
                rb.velocity = Vec2::new(force.x * dir as f32, force.y) * scale;
            } else {
                debug!("directional jump skipped: airborne with vertical speed");
            }
        }
        EntryEffect::WallKick { force } => {
            if phys.touching_wall {
                // Kick away from the wall the character is facing.
                let away = -queue.facing;
                rb.zero();
                rb.velocity = Vec2::new(force.x * away as f32, force.y) * scale;
                queue.facing = away;
            } else {
                debug!("wall jump skipped: no wall contact");
            }
        }
        EntryEffect::AirDash { speed, dir } => {
            if !phys.grounded {
                queue.facing = dir;
                rb.velocity = Vec2::new(speed * scale * dir as f32, 0.0);
            } else {
                debug!("air dash skipped: grounded");
            }
        }
        EntryEffect::Stomp { force } => {
            if !phys.grounded {
                rb.velocity = Vec2::new(0.0, -force * scale);
            } else {
                debug!("ground pound skipped: already grounded");
            }
        }
        EntryEffect::StopMotion => {
            rb.set_horizontal(0.0);
        }
        EntryEffect::Strike => {
            commands.trigger(AttackEvent {
                attacker: entity,
                direction: queue.facing,
            });
        }
        EntryEffect::Interact => {
            commands.trigger(InteractEvent { entity });
        }
    }
}

/// Unconditional state cleanup between commands: restore the captured normal
/// collider profile, reset stance flags, and stop horizontal motion.
/// Vertical velocity is left to gravity.
fn cleanup(
    queue: &mut ActionQueue,
    rb: &mut RigidBody,
    collider: &mut BoxCollider,
    profile: &ShapeProfile,
) {
    profile.normal.apply(collider);
    queue.stance = Stance::Normal;
    queue.is_crouching = false;
    queue.is_wall_sliding = false;
    rb.set_horizontal(0.0);
}
