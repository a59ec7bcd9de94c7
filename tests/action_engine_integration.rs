//! Integration tests for the action execution engine: queue ordering,
//! duration clamping, impulse gating, stance profiles, and drain signaling.

use bevy_ecs::prelude::*;
use glam::Vec2;

use actionforge::action::WireCommand;
use actionforge::components::actionqueue::ActionQueue;
use actionforge::components::animator::Animator;
use actionforge::components::boxcollider::BoxCollider;
use actionforge::components::group::Group;
use actionforge::components::mapposition::MapPosition;
use actionforge::components::physicalstate::PhysicalState;
use actionforge::components::rigidbody::RigidBody;
use actionforge::components::shapeprofile::ShapeProfile;
use actionforge::events::action::QueueDrainedEvent;
use actionforge::resources::animationstore::AnimationStore;
use actionforge::resources::commandsource::{CommandSource, CommandSubmitter};
use actionforge::resources::engineconfig::EngineConfig;
use actionforge::resources::vocabulary::ActionVocabulary;
use actionforge::resources::worldsignals::WorldSignals;
use actionforge::resources::worldtime::WorldTime;
use actionforge::systems::action::action_engine;
use actionforge::systems::animator::animator;
use actionforge::systems::collision::{contact_detector, solid_resolution};
use actionforge::systems::intake::command_intake;
use actionforge::systems::movement::movement;
use actionforge::systems::sensor::physical_state_sensor;
use actionforge::systems::time::update_world_time;
use actionforge::systems::ttl::ttl_system;

const DT: f32 = 1.0 / 60.0;
const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// World with default tuning, a drain counter, and the command channel.
fn make_world() -> (World, CommandSubmitter) {
    let mut world = World::new();
    let (source, submitter) = CommandSource::channel();
    world.insert_resource(WorldTime::default());
    world.insert_resource(WorldSignals::default());
    world.insert_resource(EngineConfig::new());
    world.insert_resource(ActionVocabulary::default());
    world.insert_resource(AnimationStore::default());
    world.insert_resource(source);
    world.add_observer(
        |_: On<QueueDrainedEvent>, mut signals: ResMut<WorldSignals>| {
            let n = signals.get_integer("drained").unwrap_or(0);
            signals.set_integer("drained", n + 1);
        },
    );
    (world, submitter)
}

fn full_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            command_intake,
            physical_state_sensor,
            action_engine,
            movement,
            contact_detector,
            solid_resolution,
            animator,
            ttl_system,
        )
            .chain(),
    );
    schedule
}

/// Schedule stopping right after the engine, for exact-velocity assertions
/// before gravity integration touches the body.
fn engine_only_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((command_intake, physical_state_sensor, action_engine).chain());
    schedule
}

fn tick(world: &mut World, schedule: &mut Schedule) {
    update_world_time(world, DT);
    schedule.run(world);
}

fn tick_for(world: &mut World, schedule: &mut Schedule, seconds: f32) {
    let ticks = (seconds / DT).round() as u32;
    for _ in 0..ticks {
        tick(world, schedule);
    }
}

/// Floor with its top surface at y = 0.
fn spawn_floor(world: &mut World) {
    world.spawn((
        MapPosition::new(0.0, -0.5),
        BoxCollider::new(100.0, 1.0),
        Group::new("solid"),
    ));
}

/// Player standing on the floor, feet at y = 0.
fn spawn_player(world: &mut World) -> Entity {
    let collider = BoxCollider::new(0.8, 1.6);
    world
        .spawn((
            MapPosition::new(0.0, 0.8),
            RigidBody::new(),
            collider,
            ShapeProfile::capture(&collider),
            ActionQueue::new(),
            PhysicalState::default(),
            Animator::new(),
            Group::new("player"),
        ))
        .id()
}

fn wire(action: &str, duration: f32) -> WireCommand {
    WireCommand {
        action: action.to_string(),
        duration,
        strength: None,
    }
}

fn drained_count(world: &World) -> i32 {
    world
        .resource::<WorldSignals>()
        .get_integer("drained")
        .unwrap_or(0)
}

fn velocity(world: &World, entity: Entity) -> Vec2 {
    world.get::<RigidBody>(entity).unwrap().velocity
}

#[test]
fn batches_execute_in_fifo_order_across_submissions() {
    let (mut world, submitter) = make_world();
    spawn_floor(&mut world);
    let player = spawn_player(&mut world);
    let mut schedule = full_schedule();

    submitter
        .submit_batch(vec![wire("WALK_RIGHT", 0.3), wire("WALK_LEFT", 0.3)])
        .unwrap();
    submitter.submit_batch(vec![wire("STOP", 0.3)]).unwrap();

    tick(&mut world, &mut schedule);
    assert!(approx_eq(velocity(&world, player).x, 5.0));

    // Second command of the first batch.
    tick_for(&mut world, &mut schedule, 0.3);
    assert!(approx_eq(velocity(&world, player).x, -5.0));

    // Second batch appended behind the first, never ahead of it.
    tick_for(&mut world, &mut schedule, 0.3);
    assert!(approx_eq(velocity(&world, player).x, 0.0));
    assert_eq!(drained_count(&world), 0);

    tick_for(&mut world, &mut schedule, 0.4);
    assert_eq!(drained_count(&world), 1);
}

#[test]
fn walk_right_holds_speed_then_cleanup_zeroes_it() {
    let (mut world, submitter) = make_world();
    spawn_floor(&mut world);
    let player = spawn_player(&mut world);
    let mut schedule = full_schedule();

    submitter.submit_batch(vec![wire("WALK_RIGHT", 2.0)]).unwrap();

    tick_for(&mut world, &mut schedule, 1.0);
    assert!(approx_eq(velocity(&world, player).x, 5.0));
    assert_eq!(drained_count(&world), 0);

    tick_for(&mut world, &mut schedule, 1.2);
    assert!(approx_eq(velocity(&world, player).x, 0.0));
    assert_eq!(drained_count(&world), 1);

    // Drained fires once per drain, not once per idle tick.
    tick_for(&mut world, &mut schedule, 0.5);
    assert_eq!(drained_count(&world), 1);

    // Roughly 2 seconds at walk speed.
    let pos = world.get::<MapPosition>(player).unwrap().pos;
    assert!(pos.x > 9.0 && pos.x < 11.0, "walked to {}", pos.x);
}

#[test]
fn zero_duration_command_is_clamped_to_minimum_window() {
    let (mut world, submitter) = make_world();
    spawn_floor(&mut world);
    let player = spawn_player(&mut world);
    let mut schedule = full_schedule();

    submitter.submit_batch(vec![wire("STOP", 0.0)]).unwrap();

    tick(&mut world, &mut schedule);
    {
        let queue = world.get::<ActionQueue>(player).unwrap();
        assert!(queue.is_executing(), "clamped command must hold the slot");
    }

    // The 0.1 s minimum window expires within seven 60 Hz ticks.
    tick_for(&mut world, &mut schedule, 0.12);
    assert_eq!(drained_count(&world), 1);
}

#[test]
fn jump_impulse_applies_only_when_grounded() {
    let (mut world, submitter) = make_world();
    spawn_floor(&mut world);
    let player = spawn_player(&mut world);
    let mut schedule = full_schedule();

    // Settle on the floor first.
    tick_for(&mut world, &mut schedule, 0.1);

    submitter.submit_batch(vec![wire("JUMP", 0.5)]).unwrap();
    tick(&mut world, &mut schedule);
    assert!(
        velocity(&world, player).y > 5.0,
        "grounded jump must launch upward"
    );
}

#[test]
fn jump_impulse_skipped_while_airborne() {
    let (mut world, submitter) = make_world();
    // No floor: the player free-falls.
    let player = spawn_player(&mut world);
    let mut schedule = full_schedule();

    tick_for(&mut world, &mut schedule, 0.5);
    let falling = velocity(&world, player).y;
    assert!(falling < -1.0);

    submitter.submit_batch(vec![wire("JUMP", 0.5)]).unwrap();
    tick(&mut world, &mut schedule);
    // Still falling; the window ran but the impulse was gated off.
    assert!(velocity(&world, player).y < falling + 1.0);
    {
        let queue = world.get::<ActionQueue>(player).unwrap();
        assert!(queue.is_executing());
    }
}

#[test]
fn directional_jump_velocity_is_exactly_the_tabulated_vector() {
    let (mut world, submitter) = make_world();
    spawn_floor(&mut world);
    let player = spawn_player(&mut world);

    // Settle with the full pipeline, then step only up to the engine so the
    // assertion sees the impulse before gravity integration.
    let mut full = full_schedule();
    tick_for(&mut world, &mut full, 0.1);
    // Plant prior motion the impulse must erase.
    world.get_mut::<RigidBody>(player).unwrap().velocity = Vec2::new(-3.0, 0.0);

    submitter
        .submit_batch(vec![wire("JUMP_RIGHT_LONG", 1.0)])
        .unwrap();
    let mut engine = engine_only_schedule();
    tick(&mut world, &mut engine);

    let expected = EngineConfig::new().jump_long_force;
    assert_eq!(velocity(&world, player), Vec2::new(expected.x, expected.y));
    assert_eq!(world.get::<ActionQueue>(player).unwrap().facing, 1);
}

#[test]
fn jump_then_run_waits_for_the_jump_window() {
    let (mut world, submitter) = make_world();
    spawn_floor(&mut world);
    let player = spawn_player(&mut world);
    let mut schedule = full_schedule();

    tick_for(&mut world, &mut schedule, 0.1);
    submitter
        .submit_batch(vec![wire("JUMP", 0.8), wire("RUN_RIGHT", 3.0)])
        .unwrap();

    // Mid-jump: no horizontal drive yet.
    tick_for(&mut world, &mut schedule, 0.4);
    assert!(approx_eq(velocity(&world, player).x, 0.0));
    assert!(world.get::<ActionQueue>(player).unwrap().is_executing());

    // Past the jump window: the run drives immediately, no idle gap.
    tick_for(&mut world, &mut schedule, 0.6);
    assert!(approx_eq(velocity(&world, player).x, 9.0));
    assert_eq!(drained_count(&world), 0);
}

#[test]
fn slide_swaps_collider_and_cleanup_restores_it() {
    let (mut world, submitter) = make_world();
    spawn_floor(&mut world);
    let player = spawn_player(&mut world);
    let mut schedule = full_schedule();

    let normal_size = world.get::<BoxCollider>(player).unwrap().size;

    submitter
        .submit_batch(vec![wire("SLIDE_RIGHT", 0.5), wire("WAIT", 0.3)])
        .unwrap();

    tick_for(&mut world, &mut schedule, 0.2);
    {
        let collider = world.get::<BoxCollider>(player).unwrap();
        assert!(approx_eq(collider.size.y, normal_size.y * 0.5));
        assert!(approx_eq(velocity(&world, player).x, 8.0));
    }

    // Past the slide: the wait runs with the normal profile back in place.
    tick_for(&mut world, &mut schedule, 0.4);
    {
        let collider = world.get::<BoxCollider>(player).unwrap();
        assert_eq!(collider.size, normal_size);
        assert!(approx_eq(velocity(&world, player).x, 0.0));
    }
}

#[test]
fn crouch_sets_and_clears_the_crouch_flag() {
    let (mut world, submitter) = make_world();
    spawn_floor(&mut world);
    let player = spawn_player(&mut world);
    let mut schedule = full_schedule();

    submitter.submit_batch(vec![wire("CROUCH", 0.4)]).unwrap();

    tick_for(&mut world, &mut schedule, 0.2);
    assert!(world.get::<ActionQueue>(player).unwrap().is_crouching);

    tick_for(&mut world, &mut schedule, 0.4);
    let queue = world.get::<ActionQueue>(player).unwrap();
    assert!(!queue.is_crouching);
    assert_eq!(drained_count(&world), 1);
}

#[test]
fn unknown_tag_runs_as_a_noop_window() {
    let (mut world, submitter) = make_world();
    spawn_floor(&mut world);
    let player = spawn_player(&mut world);
    let mut schedule = full_schedule();

    tick_for(&mut world, &mut schedule, 0.1);
    submitter.submit_batch(vec![wire("DANCE", 0.5)]).unwrap();

    tick_for(&mut world, &mut schedule, 0.3);
    assert!(approx_eq(velocity(&world, player).x, 0.0));
    assert!(world.get::<ActionQueue>(player).unwrap().is_executing());

    tick_for(&mut world, &mut schedule, 0.3);
    assert_eq!(drained_count(&world), 1);
}

#[test]
fn wall_jump_kicks_away_from_the_wall_and_flips_facing() {
    let (mut world, submitter) = make_world();
    spawn_floor(&mut world);
    // Wall just right of the player, within probe range.
    world.spawn((
        MapPosition::new(0.55, 2.0),
        BoxCollider::new(0.3, 6.0),
        Group::new("solid"),
    ));
    let player = spawn_player(&mut world);
    let mut full = full_schedule();
    tick_for(&mut world, &mut full, 0.1);

    submitter.submit_batch(vec![wire("WALL_JUMP", 0.5)]).unwrap();
    let mut engine = engine_only_schedule();
    tick(&mut world, &mut engine);

    let kick = EngineConfig::new().wall_kick_force;
    assert_eq!(velocity(&world, player), Vec2::new(-kick.x, kick.y));
    assert_eq!(world.get::<ActionQueue>(player).unwrap().facing, -1);
}

#[test]
fn wall_jump_without_wall_contact_is_skipped() {
    let (mut world, submitter) = make_world();
    spawn_floor(&mut world);
    let player = spawn_player(&mut world);
    let mut full = full_schedule();
    tick_for(&mut world, &mut full, 0.1);

    submitter.submit_batch(vec![wire("WALL_JUMP", 0.5)]).unwrap();
    let mut engine = engine_only_schedule();
    tick(&mut world, &mut engine);

    assert!(approx_eq(velocity(&world, player).x, 0.0));
    assert_eq!(world.get::<ActionQueue>(player).unwrap().facing, 1);
}

#[test]
fn strength_scales_horizontal_speed() {
    let (mut world, submitter) = make_world();
    spawn_floor(&mut world);
    let player = spawn_player(&mut world);
    let mut schedule = full_schedule();

    submitter
        .submit_batch(vec![WireCommand {
            action: "RUN_RIGHT".to_string(),
            duration: 0.5,
            strength: Some(0.5),
        }])
        .unwrap();

    tick_for(&mut world, &mut schedule, 0.2);
    assert!(approx_eq(velocity(&world, player).x, 4.5));
}

#[test]
fn dodge_roll_follows_current_facing() {
    let (mut world, submitter) = make_world();
    spawn_floor(&mut world);
    let player = spawn_player(&mut world);
    let mut schedule = full_schedule();

    // Face left first, then roll with no direction of its own.
    submitter
        .submit_batch(vec![wire("WALK_LEFT", 0.3), wire("DODGE_ROLL", 0.4)])
        .unwrap();

    tick_for(&mut world, &mut schedule, 0.5);
    assert!(approx_eq(velocity(&world, player).x, -6.0));
}
