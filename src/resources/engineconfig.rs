//! Engine tuning configuration resource.
//!
//! Motion tuning loaded from an INI configuration file. Provides defaults
//! for safe startup; missing keys keep their default values. The vocabulary
//! table is built from these numbers once at startup and is immutable at
//! runtime.
//!
//! # Configuration File Format
//!
//! ```ini
//! [movement]
//! creep_speed = 2.0
//! walk_speed = 5.0
//! run_speed = 9.0
//! dash_speed = 14.0
//! step_speed = 2.0
//! slide_speed = 8.0
//! crawl_speed = 1.5
//! roll_speed = 6.0
//!
//! [jump]
//! hop_force = 5.0
//! jump_force = 10.0
//! high_jump_force = 15.0
//! short_x = 4.0
//! short_y = 6.0
//! medium_x = 7.0
//! medium_y = 9.0
//! long_x = 10.0
//! long_y = 11.0
//! wall_kick_x = 7.0
//! wall_kick_y = 9.0
//!
//! [physics]
//! gravity = -25.0
//! wall_slide_max_fall = 2.0
//! air_dash_speed = 12.0
//! stomp_force = 20.0
//!
//! [combat]
//! bullet_speed = 10.0
//! bullet_lifetime = 2.0
//! attack_reach = 1.2
//! shoot_fire_fraction = 0.3
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use glam::Vec2;
use log::info;
use std::path::PathBuf;

const DEFAULT_CONFIG_PATH: &str = "./engine.ini";

/// Engine tuning resource: speeds, impulse magnitudes, physics constants.
#[derive(Resource, Debug, Clone)]
pub struct EngineConfig {
    // [movement]
    pub creep_speed: f32,
    pub walk_speed: f32,
    pub run_speed: f32,
    pub dash_speed: f32,
    pub step_speed: f32,
    pub slide_speed: f32,
    pub crawl_speed: f32,
    pub roll_speed: f32,
    // [jump]
    pub hop_force: f32,
    pub jump_force: f32,
    pub high_jump_force: f32,
    pub jump_short_force: Vec2,
    pub jump_medium_force: Vec2,
    pub jump_long_force: Vec2,
    pub wall_kick_force: Vec2,
    // [physics]
    pub gravity: f32,
    pub wall_slide_max_fall: f32,
    pub air_dash_speed: f32,
    pub stomp_force: f32,
    // [combat]
    pub bullet_speed: f32,
    pub bullet_lifetime: f32,
    pub attack_reach: f32,
    /// Fraction of a shoot command's duration after which the projectile
    /// spawns, timed to the muzzle frame of the shoot animation.
    pub shoot_fire_fraction: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineConfig {
    /// Create a configuration with the reference tuning values.
    pub fn new() -> Self {
        Self {
            creep_speed: 2.0,
            walk_speed: 5.0,
            run_speed: 9.0,
            dash_speed: 14.0,
            step_speed: 2.0,
            slide_speed: 8.0,
            crawl_speed: 1.5,
            roll_speed: 6.0,
            hop_force: 5.0,
            jump_force: 10.0,
            high_jump_force: 15.0,
            jump_short_force: Vec2::new(4.0, 6.0),
            jump_medium_force: Vec2::new(7.0, 9.0),
            jump_long_force: Vec2::new(10.0, 11.0),
            wall_kick_force: Vec2::new(7.0, 9.0),
            gravity: -25.0,
            wall_slide_max_fall: 2.0,
            air_dash_speed: 12.0,
            stomp_force: 20.0,
            bullet_speed: 10.0,
            bullet_lifetime: 2.0,
            attack_reach: 1.2,
            shoot_fire_fraction: 0.3,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. Returns an
    /// error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        let getf = |section: &str, key: &str, target: &mut f32| {
            if let Some(v) = config.getfloat(section, key).ok().flatten() {
                *target = v as f32;
            }
        };

        getf("movement", "creep_speed", &mut self.creep_speed);
        getf("movement", "walk_speed", &mut self.walk_speed);
        getf("movement", "run_speed", &mut self.run_speed);
        getf("movement", "dash_speed", &mut self.dash_speed);
        getf("movement", "step_speed", &mut self.step_speed);
        getf("movement", "slide_speed", &mut self.slide_speed);
        getf("movement", "crawl_speed", &mut self.crawl_speed);
        getf("movement", "roll_speed", &mut self.roll_speed);

        getf("jump", "hop_force", &mut self.hop_force);
        getf("jump", "jump_force", &mut self.jump_force);
        getf("jump", "high_jump_force", &mut self.high_jump_force);
        getf("jump", "short_x", &mut self.jump_short_force.x);
        getf("jump", "short_y", &mut self.jump_short_force.y);
        getf("jump", "medium_x", &mut self.jump_medium_force.x);
        getf("jump", "medium_y", &mut self.jump_medium_force.y);
        getf("jump", "long_x", &mut self.jump_long_force.x);
        getf("jump", "long_y", &mut self.jump_long_force.y);
        getf("jump", "wall_kick_x", &mut self.wall_kick_force.x);
        getf("jump", "wall_kick_y", &mut self.wall_kick_force.y);

        getf("physics", "gravity", &mut self.gravity);
        getf("physics", "wall_slide_max_fall", &mut self.wall_slide_max_fall);
        getf("physics", "air_dash_speed", &mut self.air_dash_speed);
        getf("physics", "stomp_force", &mut self.stomp_force);

        getf("combat", "bullet_speed", &mut self.bullet_speed);
        getf("combat", "bullet_lifetime", &mut self.bullet_lifetime);
        getf("combat", "attack_reach", &mut self.attack_reach);
        getf("combat", "shoot_fire_fraction", &mut self.shoot_fire_fraction);

        info!("Engine config loaded from {:?}", self.config_path);
        Ok(())
    }
}
