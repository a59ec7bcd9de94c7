//! Actionforge main entry point.
//!
//! A headless 2D platformer action engine:
//! - **bevy_ecs** for entity-component-system architecture
//! - **crossbeam-channel** for the external command source bridge
//! - **serde_json** for the wire command format
//!
//! This executable runs a scripted demo level: it loads a JSON script of
//! command batches, submits them one at a time as the player's queue drains,
//! and steps the simulation at a fixed tick rate until the script is
//! exhausted, the goal is reached, or the player dies.
//!
//! # Script Format
//!
//! A JSON array of batches, each batch an ordered array of wire commands:
//!
//! ```json
//! [
//!   [{"action": "WALK_RIGHT", "duration": 2.0}],
//!   [{"action": "JUMP", "duration": 0.8}, {"action": "RUN_RIGHT", "duration": 3.0}]
//! ]
//! ```
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --script demo.json
//! ```

mod action;
mod components;
mod events;
mod resources;
mod systems;

use crate::action::WireCommand;
use crate::components::actionqueue::ActionQueue;
use crate::components::animator::Animator;
use crate::components::boxcollider::BoxCollider;
use crate::components::breakable::Breakable;
use crate::components::group::Group;
use crate::components::health::Health;
use crate::components::mapposition::MapPosition;
use crate::components::movingplatform::MovingPlatform;
use crate::components::physicalstate::PhysicalState;
use crate::components::rigidbody::RigidBody;
use crate::components::shapeprofile::ShapeProfile;
use crate::events::action::QueueDrainedEvent;
use crate::resources::animationstore::AnimationStore;
use crate::resources::commandsource::{CommandSource, CommandSubmitter};
use crate::resources::engineconfig::EngineConfig;
use crate::resources::vocabulary::ActionVocabulary;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;
use crate::systems::action::action_engine;
use crate::systems::animator::animator;
use crate::systems::collision::{contact_detector, solid_resolution};
use crate::systems::intake::command_intake;
use crate::systems::movement::movement;
use crate::systems::platform::moving_platforms;
use crate::systems::reactors::{
    attack_reactor, breakable_bump_reactor, bullet_reactor, death_watch, death_zone_reactor,
    enemy_reactor, goal_reactor, hazard_reactor, invincibility_tick, shot_reactor,
};
use crate::systems::sensor::physical_state_sensor;
use crate::systems::time::update_world_time;
use crate::systems::ttl::ttl_system;
use bevy_ecs::prelude::*;
use clap::Parser;
use glam::Vec2;
use std::path::PathBuf;

/// Actionforge demo runner
#[derive(Parser)]
#[command(version, about = "Headless action execution engine demo")]
struct Cli {
    /// JSON script of command batches. Omit to run the built-in demo script.
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// INI file with motion tuning overrides.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Simulation ticks per second.
    #[arg(long, default_value_t = 60)]
    tick_rate: u32,

    /// Safety cap on total ticks.
    #[arg(long, default_value_t = 36000)]
    max_ticks: u64,
}

/// Batches for the built-in demo: walk to the wall, jump it, reach the goal.
fn builtin_script() -> Vec<Vec<WireCommand>> {
    let cmd = |action: &str, duration: f32| WireCommand {
        action: action.to_string(),
        duration,
        strength: None,
    };
    vec![
        vec![cmd("WALK_RIGHT", 1.5), cmd("JUMP", 0.8)],
        vec![cmd("RUN_RIGHT", 2.0), cmd("JUMP_RIGHT_MEDIUM", 1.0)],
        vec![cmd("WAIT", 0.5), cmd("WALK_RIGHT", 2.0)],
    ]
}

fn load_script(path: &PathBuf) -> Result<Vec<Vec<WireCommand>>, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read script {}: {}", path.display(), e))?;
    serde_json::from_str(&text)
        .map_err(|e| format!("cannot parse script {}: {}", path.display(), e))
}

/// Spawn the demo level: a floor, a wall, a hazard pit cover, an enemy, a
/// breakable block, and the goal marker.
fn spawn_level(world: &mut World) {
    // Floor spanning the play area.
    world.spawn((
        MapPosition::new(10.0, -0.5),
        BoxCollider::new(40.0, 1.0),
        Group::new("solid"),
    ));
    // A wall to jump over.
    world.spawn((
        MapPosition::new(8.0, 1.0),
        BoxCollider::new(1.0, 2.0),
        Group::new("solid"),
    ));
    // Spikes.
    world.spawn((
        MapPosition::new(12.0, 0.25),
        BoxCollider::new(1.0, 0.5).trigger(),
        Group::new("hazard"),
    ));
    // A patrolling enemy, stationary in the demo.
    world.spawn((
        MapPosition::new(15.0, 0.5),
        BoxCollider::new(0.8, 1.0),
        RigidBody::new(),
        Group::new("enemy"),
    ));
    // A breakable block.
    world.spawn((
        MapPosition::new(17.0, 0.5),
        BoxCollider::new(1.0, 1.0),
        Breakable::new(2),
        Group::new("breakable"),
    ));
    // A platform sweeping up and down over the pit.
    world.spawn((
        MapPosition::new(12.0, 2.0),
        BoxCollider::new(2.0, 0.4),
        MovingPlatform::new(Vec2::new(12.0, 2.0), Vec2::new(0.0, 2.0), 4.0),
        Group::new("solid"),
    ));
    // The goal marker.
    world.spawn((
        MapPosition::new(20.0, 1.0),
        BoxCollider::new(0.5, 2.0).trigger(),
        Group::new("goal"),
    ));
    // Kill zone far below the level, catching anything that falls off.
    world.spawn((
        MapPosition::new(10.0, -8.0),
        BoxCollider::new(200.0, 2.0).trigger(),
        Group::new("deathzone"),
    ));
}

fn spawn_player(world: &mut World) {
    let collider = BoxCollider::new(0.8, 1.6);
    world.spawn((
        MapPosition::new(0.0, 0.8),
        RigidBody::new(),
        collider,
        ShapeProfile::capture(&collider),
        ActionQueue::new(),
        PhysicalState::default(),
        Animator::new(),
        Health::new(3),
        Group::new("player"),
    ));
}

fn submit_next(
    script: &mut std::vec::IntoIter<Vec<WireCommand>>,
    submitter: &CommandSubmitter,
) -> bool {
    match script.next() {
        Some(batch) => {
            if let Err(e) = submitter.submit_batch(batch) {
                log::error!("{}", e);
                return false;
            }
            true
        }
        None => false,
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let script = match &cli.script {
        Some(path) => match load_script(path) {
            Ok(batches) => batches,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => builtin_script(),
    };
    log::info!("script loaded, {} batches", script.len());

    let mut config = match &cli.config {
        Some(path) => EngineConfig::with_path(path),
        None => EngineConfig::new(),
    };
    if cli.config.is_some() {
        if let Err(e) = config.load_from_file() {
            log::warn!("{}, using defaults", e);
        }
    }

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    let (source, submitter) = CommandSource::channel();
    world.insert_resource(WorldTime::default());
    world.insert_resource(WorldSignals::default());
    world.insert_resource(ActionVocabulary::from_config(&config));
    world.insert_resource(AnimationStore::default());
    world.insert_resource(config);
    world.insert_resource(source);

    world.add_observer(hazard_reactor);
    world.add_observer(enemy_reactor);
    world.add_observer(goal_reactor);
    world.add_observer(bullet_reactor);
    world.add_observer(breakable_bump_reactor);
    world.add_observer(attack_reactor);
    world.add_observer(shot_reactor);
    world.add_observer(death_zone_reactor);
    world.add_observer(
        |_: On<QueueDrainedEvent>, mut signals: ResMut<WorldSignals>| {
            signals.set_flag("queue_drained");
        },
    );

    spawn_level(&mut world);
    spawn_player(&mut world);

    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            command_intake,
            physical_state_sensor,
            action_engine,
            movement,
            moving_platforms,
            contact_detector,
            solid_resolution,
            invincibility_tick,
            death_watch,
            animator,
            ttl_system,
        )
            .chain(),
    );

    // --------------- Fixed-tick loop ---------------
    let dt = 1.0 / cli.tick_rate.max(1) as f32;
    let mut script_iter = script.into_iter();
    submit_next(&mut script_iter, &submitter);

    for _ in 0..cli.max_ticks {
        update_world_time(&mut world, dt);
        schedule.run(&mut world);

        let mut signals = world.resource_mut::<WorldSignals>();
        if signals.has_flag("goal_reached") {
            log::info!("run over: goal reached");
            break;
        }
        if signals.has_flag("player_dead") {
            log::info!("run over: player died");
            break;
        }
        if signals.has_flag("queue_drained") {
            signals.clear_flag("queue_drained");
            if !submit_next(&mut script_iter, &submitter) {
                log::info!("run over: script exhausted");
                break;
            }
        }
    }

    let time = world.resource::<WorldTime>();
    log::info!(
        "simulation ended at t={:.2}s after {} ticks",
        time.elapsed,
        time.frame_count
    );
}
