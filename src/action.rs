//! Action commands and the closed action vocabulary tags.
//!
//! The command source (an LLM bridge, a script, a test) speaks in wire
//! commands: an uppercase string tag plus a duration and an optional strength.
//! Tags are resolved into the closed [`ActionKind`] enum exactly once at the
//! boundary, so everything downstream dispatches exhaustively. Unknown tags
//! become [`ActionKind::Noop`] and execute as a do-nothing wait window.

use serde::{Deserialize, Serialize};

/// Minimum effective duration for any command, in seconds.
///
/// Commands arrive with `duration <= 0` often enough (instant jumps, stops)
/// that the engine clamps instead of rejecting. The clamp guarantees every
/// command holds the "in flight" slot for at least one tick.
pub const MIN_ACTION_DURATION: f32 = 0.1;

/// Closed set of action tags the engine understands.
///
/// Every variant resolves to exactly one motion-parameter record in the
/// [`ActionVocabulary`](crate::resources::vocabulary::ActionVocabulary).
/// `Noop` is the single fallback for tags outside the closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    // Control
    Wait,
    Stop,
    Fall,
    // Horizontal locomotion, four speed tiers x two directions
    CreepLeft,
    CreepRight,
    WalkLeft,
    WalkRight,
    RunLeft,
    RunRight,
    DashLeft,
    DashRight,
    // Precision step
    StepLeft,
    StepRight,
    // Vertical jumps
    Hop,
    Jump,
    HighJump,
    // Directional jumps, three distance tiers x two directions
    JumpLeftShort,
    JumpLeftMedium,
    JumpLeftLong,
    JumpRightShort,
    JumpRightMedium,
    JumpRightLong,
    // Advanced mobility
    WallJump,
    WallSlide,
    AirDashLeft,
    AirDashRight,
    GroundPound,
    // Stance
    Crouch,
    CrawlLeft,
    CrawlRight,
    SlideLeft,
    SlideRight,
    // Combat
    Attack,
    Shoot,
    Guard,
    DodgeRoll,
    Interact,
    BreakObject,
    // Fallback for tags outside the closed set
    Noop,
}

impl ActionKind {
    /// Every real tag in the closed set, `Noop` excluded.
    ///
    /// Used to assert vocabulary totality and to build the parameter table.
    pub const ALL: [ActionKind; 38] = [
        ActionKind::Wait,
        ActionKind::Stop,
        ActionKind::Fall,
        ActionKind::CreepLeft,
        ActionKind::CreepRight,
        ActionKind::WalkLeft,
        ActionKind::WalkRight,
        ActionKind::RunLeft,
        ActionKind::RunRight,
        ActionKind::DashLeft,
        ActionKind::DashRight,
        ActionKind::StepLeft,
        ActionKind::StepRight,
        ActionKind::Hop,
        ActionKind::Jump,
        ActionKind::HighJump,
        ActionKind::JumpLeftShort,
        ActionKind::JumpLeftMedium,
        ActionKind::JumpLeftLong,
        ActionKind::JumpRightShort,
        ActionKind::JumpRightMedium,
        ActionKind::JumpRightLong,
        ActionKind::WallJump,
        ActionKind::WallSlide,
        ActionKind::AirDashLeft,
        ActionKind::AirDashRight,
        ActionKind::GroundPound,
        ActionKind::Crouch,
        ActionKind::CrawlLeft,
        ActionKind::CrawlRight,
        ActionKind::SlideLeft,
        ActionKind::SlideRight,
        ActionKind::Attack,
        ActionKind::Shoot,
        ActionKind::Guard,
        ActionKind::DodgeRoll,
        ActionKind::Interact,
        ActionKind::BreakObject,
    ];

    /// Resolve an external wire tag into the closed set.
    ///
    /// Matching is case-insensitive. Tags outside the set resolve to `Noop`;
    /// the caller decides whether to log. Legacy aliases from older command
    /// sources (`LONG_JUMP_RIGHT`/`LONG_JUMP_LEFT`) are still accepted.
    pub fn parse_tag(tag: &str) -> ActionKind {
        match tag.to_ascii_uppercase().as_str() {
            "WAIT" => ActionKind::Wait,
            "STOP" => ActionKind::Stop,
            "FALL" => ActionKind::Fall,
            "CREEP_LEFT" => ActionKind::CreepLeft,
            "CREEP_RIGHT" => ActionKind::CreepRight,
            "WALK_LEFT" => ActionKind::WalkLeft,
            "WALK_RIGHT" => ActionKind::WalkRight,
            "RUN_LEFT" => ActionKind::RunLeft,
            "RUN_RIGHT" => ActionKind::RunRight,
            "DASH_LEFT" => ActionKind::DashLeft,
            "DASH_RIGHT" => ActionKind::DashRight,
            "STEP_LEFT" => ActionKind::StepLeft,
            "STEP_RIGHT" => ActionKind::StepRight,
            "HOP" => ActionKind::Hop,
            "JUMP" => ActionKind::Jump,
            "HIGH_JUMP" => ActionKind::HighJump,
            "JUMP_LEFT_SHORT" => ActionKind::JumpLeftShort,
            "JUMP_LEFT_MEDIUM" => ActionKind::JumpLeftMedium,
            "JUMP_LEFT_LONG" | "LONG_JUMP_LEFT" => ActionKind::JumpLeftLong,
            "JUMP_RIGHT_SHORT" => ActionKind::JumpRightShort,
            "JUMP_RIGHT_MEDIUM" => ActionKind::JumpRightMedium,
            "JUMP_RIGHT_LONG" | "LONG_JUMP_RIGHT" => ActionKind::JumpRightLong,
            "WALL_JUMP" => ActionKind::WallJump,
            "WALL_SLIDE" => ActionKind::WallSlide,
            "AIR_DASH_LEFT" => ActionKind::AirDashLeft,
            "AIR_DASH_RIGHT" => ActionKind::AirDashRight,
            "GROUND_POUND" | "STOMP" => ActionKind::GroundPound,
            "CROUCH" => ActionKind::Crouch,
            "CRAWL_LEFT" => ActionKind::CrawlLeft,
            "CRAWL_RIGHT" => ActionKind::CrawlRight,
            "SLIDE_LEFT" => ActionKind::SlideLeft,
            "SLIDE_RIGHT" => ActionKind::SlideRight,
            "ATTACK" => ActionKind::Attack,
            "SHOOT" => ActionKind::Shoot,
            "GUARD" => ActionKind::Guard,
            "DODGE_ROLL" | "ROLL" => ActionKind::DodgeRoll,
            "INTERACT" => ActionKind::Interact,
            "BREAK_OBJECT" | "BREAK" => ActionKind::BreakObject,
            _ => ActionKind::Noop,
        }
    }

    /// The explicit direction this tag carries, if any.
    ///
    /// Direction is the single source of truth for sprite mirroring and for
    /// resolving wall-jumps (away from facing) and directional jumps
    /// (toward the commanded facing).
    pub fn direction(&self) -> Option<i8> {
        match self {
            ActionKind::CreepRight
            | ActionKind::WalkRight
            | ActionKind::RunRight
            | ActionKind::DashRight
            | ActionKind::StepRight
            | ActionKind::JumpRightShort
            | ActionKind::JumpRightMedium
            | ActionKind::JumpRightLong
            | ActionKind::AirDashRight
            | ActionKind::CrawlRight
            | ActionKind::SlideRight => Some(1),
            ActionKind::CreepLeft
            | ActionKind::WalkLeft
            | ActionKind::RunLeft
            | ActionKind::DashLeft
            | ActionKind::StepLeft
            | ActionKind::JumpLeftShort
            | ActionKind::JumpLeftMedium
            | ActionKind::JumpLeftLong
            | ActionKind::AirDashLeft
            | ActionKind::CrawlLeft
            | ActionKind::SlideLeft => Some(-1),
            _ => None,
        }
    }
}

/// One command on the wire, as the command source produces it.
///
/// This is the external representation; [`ActionCommand`] is the parsed
/// internal one. Batches are ordered sequences of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireCommand {
    /// Uppercase action tag, e.g. `"RUN_RIGHT"`. Unknown tags are accepted.
    pub action: String,
    /// Requested duration in seconds. Values `<= 0` get clamped later.
    pub duration: f32,
    /// Optional intensity in `[0, 1]` scaling speeds and impulse magnitudes.
    #[serde(default)]
    pub strength: Option<f32>,
}

/// A parsed, timed action request. Immutable once enqueued.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionCommand {
    pub kind: ActionKind,
    /// Requested duration in seconds, as received (clamping happens at
    /// execution start, so the queue keeps the original request).
    pub duration: f32,
    /// Optional intensity in `[0, 1]`.
    pub strength: Option<f32>,
}

impl ActionCommand {
    pub fn new(kind: ActionKind, duration: f32) -> Self {
        Self {
            kind,
            duration,
            strength: None,
        }
    }

    pub fn with_strength(mut self, strength: f32) -> Self {
        self.strength = Some(strength.clamp(0.0, 1.0));
        self
    }

    /// Parse a wire command. Never fails; unknown tags become `Noop`.
    pub fn from_wire(wire: &WireCommand) -> Self {
        Self {
            kind: ActionKind::parse_tag(&wire.action),
            duration: wire.duration,
            strength: wire.strength.map(|s| s.clamp(0.0, 1.0)),
        }
    }

    /// The duration the engine will actually run this command for.
    ///
    /// Non-finite or non-positive requests clamp to [`MIN_ACTION_DURATION`]
    /// so every command gets at least one tick of effect.
    pub fn effective_duration(&self) -> f32 {
        if self.duration.is_finite() && self.duration > 0.0 {
            self.duration.max(MIN_ACTION_DURATION)
        } else {
            MIN_ACTION_DURATION
        }
    }

    /// Strength multiplier applied to tabulated speeds and impulses.
    pub fn strength_scale(&self) -> f32 {
        self.strength.unwrap_or(1.0)
    }
}
