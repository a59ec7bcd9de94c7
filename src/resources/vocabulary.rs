//! Action vocabulary: the total map from action kinds to motion parameters.
//!
//! Built once from [`EngineConfig`](super::engineconfig::EngineConfig) and
//! immutable afterwards. Resolution is total over the closed
//! [`ActionKind`](crate::action::ActionKind) set: the table is constructed by
//! an exhaustive match, so a missing entry is a compile-time impossibility,
//! and `Noop` resolves to an empty record.

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use rustc_hash::FxHashMap;

use crate::action::ActionKind;
use crate::components::animator::VisualState;
use crate::components::shapeprofile::Stance;
use crate::resources::engineconfig::EngineConfig;

/// One-shot effect applied exactly once on entry to execution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryEffect {
    None,
    /// Vertical jump: zero vy, then set vy to `force`. Gated on ground
    /// contact or near-zero vertical speed.
    Jump { force: f32 },
    /// Directional jump: set facing to `dir`, zero the whole velocity, then
    /// set velocity to `force * (dir, 1)` exactly. Same gate as `Jump`.
    DirectionalJump { force: Vec2, dir: i8 },
    /// Kick away from the current facing and flip it. Gated on wall contact.
    WallKick { force: Vec2 },
    /// Horizontal burst in `dir` with vertical motion cancelled. Gated on
    /// being airborne.
    AirDash { speed: f32, dir: i8 },
    /// Straight-down slam. Gated on being airborne.
    Stomp { force: f32 },
    /// Cancel horizontal motion immediately.
    StopMotion,
    /// Strike breakables within reach (attack / break-object).
    Strike,
    /// Raise an interaction notification for game-side logic.
    Interact,
}

/// Effect reapplied every tick while the command is in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoldEffect {
    None,
    /// Set horizontal velocity to `speed * dir`, preserving vertical
    /// velocity; gravity integration stays with the movement system.
    Horizontal { speed: f32, dir: i8 },
    /// Hold horizontal velocity at zero (wait, crouch, guard).
    ZeroHorizontal,
    /// Cap fall speed while pressed against a wall and airborne.
    WallSlide { max_fall: f32 },
}

/// Everything the engine needs to execute one action kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionParams {
    pub entry: EntryEffect,
    pub hold: HoldEffect,
    /// Collider variant forced for the command's duration.
    pub stance: Stance,
    /// One-shot animation state locked for the command's duration.
    pub lock: Option<VisualState>,
    /// Schedules the deferred projectile spawn (shoot).
    pub deferred_shot: bool,
}

impl MotionParams {
    const EMPTY: MotionParams = MotionParams {
        entry: EntryEffect::None,
        hold: HoldEffect::None,
        stance: Stance::Normal,
        lock: None,
        deferred_shot: false,
    };

    fn simple(entry: EntryEffect, hold: HoldEffect) -> Self {
        Self {
            entry,
            hold,
            stance: Stance::Normal,
            lock: None,
            deferred_shot: false,
        }
    }

    fn with_stance(mut self, stance: Stance) -> Self {
        self.stance = stance;
        self
    }

    fn with_lock(mut self, state: VisualState) -> Self {
        self.lock = Some(state);
        self
    }

    fn with_deferred_shot(mut self) -> Self {
        self.deferred_shot = true;
        self
    }
}

/// Central registry mapping every action kind to its motion parameters.
#[derive(Resource, Debug)]
pub struct ActionVocabulary {
    params: FxHashMap<ActionKind, MotionParams>,
}

impl ActionVocabulary {
    /// Build the full table from tuning values. Covers every kind in
    /// [`ActionKind::ALL`] by exhaustive match.
    pub fn from_config(cfg: &EngineConfig) -> Self {
        use ActionKind::*;
        use EntryEffect as E;
        use HoldEffect as H;

        let horizontal = |speed: f32, dir: i8| {
            MotionParams::simple(E::None, H::Horizontal { speed, dir })
        };
        let vertical_jump =
            |force: f32| MotionParams::simple(E::Jump { force }, H::None);
        let dir_jump = |force: Vec2, dir: i8| {
            MotionParams::simple(E::DirectionalJump { force, dir }, H::None)
        };

        let mut params = FxHashMap::default();
        for kind in ActionKind::ALL {
            let entry = match kind {
                Wait => MotionParams::simple(E::None, H::ZeroHorizontal),
                Stop => MotionParams::simple(E::StopMotion, H::None),
                Fall => MotionParams::simple(E::None, H::None),

                CreepLeft => horizontal(cfg.creep_speed, -1),
                CreepRight => horizontal(cfg.creep_speed, 1),
                WalkLeft => horizontal(cfg.walk_speed, -1),
                WalkRight => horizontal(cfg.walk_speed, 1),
                RunLeft => horizontal(cfg.run_speed, -1),
                RunRight => horizontal(cfg.run_speed, 1),
                DashLeft => horizontal(cfg.dash_speed, -1),
                DashRight => horizontal(cfg.dash_speed, 1),
                StepLeft => horizontal(cfg.step_speed, -1),
                StepRight => horizontal(cfg.step_speed, 1),

                Hop => vertical_jump(cfg.hop_force),
                Jump => vertical_jump(cfg.jump_force),
                HighJump => vertical_jump(cfg.high_jump_force),

                JumpLeftShort => dir_jump(cfg.jump_short_force, -1),
                JumpLeftMedium => dir_jump(cfg.jump_medium_force, -1),
                JumpLeftLong => dir_jump(cfg.jump_long_force, -1),
                JumpRightShort => dir_jump(cfg.jump_short_force, 1),
                JumpRightMedium => dir_jump(cfg.jump_medium_force, 1),
                JumpRightLong => dir_jump(cfg.jump_long_force, 1),

                WallJump => MotionParams::simple(
                    E::WallKick {
                        force: cfg.wall_kick_force,
                    },
                    H::None,
                ),
                WallSlide => MotionParams::simple(
                    E::None,
                    H::WallSlide {
                        max_fall: cfg.wall_slide_max_fall,
                    },
                ),
                AirDashLeft => MotionParams::simple(
                    E::AirDash {
                        speed: cfg.air_dash_speed,
                        dir: -1,
                    },
                    H::None,
                )
                .with_lock(VisualState::AirDash),
                AirDashRight => MotionParams::simple(
                    E::AirDash {
                        speed: cfg.air_dash_speed,
                        dir: 1,
                    },
                    H::None,
                )
                .with_lock(VisualState::AirDash),
                GroundPound => MotionParams::simple(
                    E::Stomp {
                        force: cfg.stomp_force,
                    },
                    H::None,
                ),

                Crouch => MotionParams::simple(E::None, H::ZeroHorizontal)
                    .with_stance(Stance::Crouch),
                CrawlLeft => horizontal(cfg.crawl_speed, -1).with_stance(Stance::Crouch),
                CrawlRight => horizontal(cfg.crawl_speed, 1).with_stance(Stance::Crouch),
                SlideLeft => horizontal(cfg.slide_speed, -1).with_stance(Stance::Slide),
                SlideRight => horizontal(cfg.slide_speed, 1).with_stance(Stance::Slide),

                Attack => MotionParams::simple(E::Strike, H::ZeroHorizontal)
                    .with_lock(VisualState::Attack),
                Shoot => MotionParams::simple(E::None, H::ZeroHorizontal)
                    .with_lock(VisualState::Shoot)
                    .with_deferred_shot(),
                Guard => MotionParams::simple(E::None, H::ZeroHorizontal)
                    .with_lock(VisualState::Guard),
                DodgeRoll => MotionParams::simple(
                    E::None,
                    H::Horizontal {
                        speed: cfg.roll_speed,
                        dir: 0, // rolls in the current facing direction
                    },
                )
                .with_lock(VisualState::Roll),
                Interact => MotionParams::simple(E::Interact, H::ZeroHorizontal),
                BreakObject => MotionParams::simple(E::Strike, H::ZeroHorizontal)
                    .with_lock(VisualState::Attack),

                Noop => MotionParams::EMPTY,
            };
            params.insert(kind, entry);
        }
        Self { params }
    }

    /// Resolve a kind into its motion parameters. Total over the closed set;
    /// `Noop` (and therefore any unrecognized external tag) resolves to the
    /// empty record.
    pub fn resolve(&self, kind: ActionKind) -> &MotionParams {
        self.params.get(&kind).unwrap_or(&MotionParams::EMPTY)
    }
}

impl Default for ActionVocabulary {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}
