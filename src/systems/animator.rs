//! Visual state projection and frame advance.
//!
//! Derives one visual state per character per frame from physical state and
//! queue flags, then advances the frame index on the active track's own
//! cadence. Visual state is projected, never commanded: the engine only
//! plants one-shot locks (attack, guard, roll, shoot) and everything else
//! follows from what the body is doing.
//!
//! Priority order, highest first: one-shot lock, wall slide, crouch,
//! airborne jump/fall, run, idle.

use bevy_ecs::prelude::*;

use crate::components::actionqueue::ActionQueue;
use crate::components::animator::{Animator, VisualState};
use crate::components::physicalstate::PhysicalState;
use crate::resources::animationstore::AnimationStore;
use crate::resources::worldtime::WorldTime;

/// Speed below which an axis counts as at rest for state selection.
const REST_SPEED: f32 = 0.1;

pub fn animator(
    mut query: Query<(&mut Animator, &ActionQueue, &PhysicalState)>,
    store: Res<AnimationStore>,
    time: Res<WorldTime>,
) {
    let dt = time.delta;
    for (mut anim, queue, phys) in query.iter_mut() {
        // One-shot locks expire on their own timer, not on track length.
        if let Some((state, remaining)) = anim.lock {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                anim.lock = None;
            } else {
                anim.lock = Some((state, remaining));
            }
        }

        let state = if let Some((locked, _)) = anim.lock {
            locked
        } else if queue.is_wall_sliding {
            VisualState::WallSlide
        } else if queue.is_crouching && phys.grounded {
            VisualState::Crouch
        } else if !phys.grounded && phys.velocity.y.abs() > REST_SPEED {
            if phys.velocity.y > 0.0 {
                VisualState::Jump
            } else {
                VisualState::Fall
            }
        } else if phys.grounded && phys.velocity.x.abs() > REST_SPEED {
            VisualState::Run
        } else {
            VisualState::Idle
        };

        anim.set_state(state);
        anim.flip_x = queue.facing < 0;

        let Some(track) = store.track(anim.state) else {
            continue;
        };
        if track.fps <= 0.0 || track.frame_count <= 1 {
            continue;
        }
        let frame_duration = 1.0 / track.fps;
        anim.frame_timer += dt;
        while anim.frame_timer >= frame_duration {
            anim.frame_timer -= frame_duration;
            if track.looped {
                anim.frame_index = (anim.frame_index + 1) % track.frame_count;
            } else if anim.frame_index + 1 < track.frame_count {
                anim.frame_index += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn run_once(
        queue: ActionQueue,
        phys: PhysicalState,
        anim: Animator,
    ) -> Animator {
        let mut world = World::new();
        world.insert_resource(AnimationStore::default());
        world.insert_resource(WorldTime {
            delta: 1.0 / 60.0,
            ..Default::default()
        });
        let entity = world.spawn((anim, queue, phys)).id();
        let mut schedule = Schedule::default();
        schedule.add_systems(animator);
        schedule.run(&mut world);
        world.get::<Animator>(entity).unwrap().clone()
    }

    #[test]
    fn test_grounded_moving_is_run() {
        let phys = PhysicalState {
            grounded: true,
            velocity: Vec2::new(5.0, 0.0),
            ..Default::default()
        };
        let anim = run_once(ActionQueue::default(), phys, Animator::new());
        assert_eq!(anim.state, VisualState::Run);
    }

    #[test]
    fn test_airborne_rising_is_jump_falling_is_fall() {
        let rising = PhysicalState {
            grounded: false,
            velocity: Vec2::new(0.0, 4.0),
            ..Default::default()
        };
        let falling = PhysicalState {
            grounded: false,
            velocity: Vec2::new(0.0, -4.0),
            ..Default::default()
        };
        let up = run_once(ActionQueue::default(), rising, Animator::new());
        let down = run_once(ActionQueue::default(), falling, Animator::new());
        assert_eq!(up.state, VisualState::Jump);
        assert_eq!(down.state, VisualState::Fall);
    }

    #[test]
    fn test_lock_wins_over_motion() {
        let phys = PhysicalState {
            grounded: true,
            velocity: Vec2::new(9.0, 0.0),
            ..Default::default()
        };
        let mut anim = Animator::new();
        anim.play_one_shot(VisualState::Attack, 0.4);
        let anim = run_once(ActionQueue::default(), phys, anim);
        assert_eq!(anim.state, VisualState::Attack);
    }

    #[test]
    fn test_lock_expires() {
        let phys = PhysicalState {
            grounded: true,
            ..Default::default()
        };
        let mut anim = Animator::new();
        anim.play_one_shot(VisualState::Shoot, 0.001);
        let anim = run_once(ActionQueue::default(), phys, anim);
        assert!(anim.lock.is_none());
        assert_eq!(anim.state, VisualState::Idle);
    }

    #[test]
    fn test_wall_slide_beats_fall() {
        let phys = PhysicalState {
            grounded: false,
            touching_wall: true,
            velocity: Vec2::new(0.0, -2.0),
        };
        let mut queue = ActionQueue::new();
        queue.is_wall_sliding = true;
        let anim = run_once(queue, phys, Animator::new());
        assert_eq!(anim.state, VisualState::WallSlide);
    }

    #[test]
    fn test_facing_left_flips() {
        let mut queue = ActionQueue::new();
        queue.facing = -1;
        let anim = run_once(queue, PhysicalState::default(), Animator::new());
        assert!(anim.flip_x);
    }
}
