//! Sprite animator state.
//!
//! The animator projects physical state into one discrete visual state per
//! frame and advances a frame index on the track's own cadence. One-shot
//! actions (attack, guard, roll, shoot) lock the state for their duration;
//! the lock takes precedence over everything else until its timer expires.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Discrete visual states, each mapped to a frame sequence in the
/// [`AnimationStore`](crate::resources::animationstore::AnimationStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VisualState {
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
    Crouch,
    WallSlide,
    Attack,
    Guard,
    Roll,
    Shoot,
    AirDash,
}

/// Per-entity animation playback state.
#[derive(Component, Debug, Clone, Default)]
pub struct Animator {
    pub state: VisualState,
    pub frame_index: usize,
    pub frame_timer: f32,
    /// Mirror the sprite horizontally (facing left).
    pub flip_x: bool,
    /// One-shot lock: `(state, remaining seconds)`. While present, the locked
    /// state wins over every derived state.
    pub lock: Option<(VisualState, f32)>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock a one-shot state for `duration` seconds.
    pub fn play_one_shot(&mut self, state: VisualState, duration: f32) {
        self.lock = Some((state, duration));
        self.set_state(state);
    }

    /// Switch states, resetting frame index and timer so the new sequence
    /// never starts mid-way.
    pub fn set_state(&mut self, state: VisualState) {
        if self.state != state {
            self.state = state;
            self.frame_index = 0;
            self.frame_timer = 0.0;
        }
    }
}
