//! Animation track registry.
//!
//! A minimal store for frame-sequence definitions shared by every animated
//! entity. The animator system looks up the track for the current
//! [`VisualState`](crate::components::animator::VisualState) and advances
//! frames on the track's own cadence.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::components::animator::VisualState;

/// Immutable data describing one frame sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationTrack {
    /// Number of frames in the sequence.
    pub frame_count: usize,
    /// Frames per second playback speed, independent of the simulation
    /// timestep.
    pub fps: f32,
    /// Whether the sequence restarts after the last frame.
    pub looped: bool,
}

impl AnimationTrack {
    pub fn new(frame_count: usize, fps: f32, looped: bool) -> Self {
        Self {
            frame_count: frame_count.max(1),
            fps,
            looped,
        }
    }
}

/// Central registry of animation tracks keyed by visual state.
#[derive(Resource, Debug)]
pub struct AnimationStore {
    pub tracks: FxHashMap<VisualState, AnimationTrack>,
}

impl AnimationStore {
    pub fn track(&self, state: VisualState) -> Option<&AnimationTrack> {
        self.tracks.get(&state)
    }
}

impl Default for AnimationStore {
    /// Frame counts matching the reference sprite sheets.
    fn default() -> Self {
        let mut tracks = FxHashMap::default();
        tracks.insert(VisualState::Idle, AnimationTrack::new(4, 8.0, true));
        tracks.insert(VisualState::Run, AnimationTrack::new(3, 8.0, true));
        tracks.insert(VisualState::Jump, AnimationTrack::new(1, 8.0, false));
        tracks.insert(VisualState::Fall, AnimationTrack::new(1, 8.0, false));
        tracks.insert(VisualState::Crouch, AnimationTrack::new(2, 8.0, true));
        tracks.insert(VisualState::WallSlide, AnimationTrack::new(2, 8.0, true));
        tracks.insert(VisualState::Attack, AnimationTrack::new(4, 12.0, false));
        tracks.insert(VisualState::Guard, AnimationTrack::new(2, 8.0, true));
        tracks.insert(VisualState::Roll, AnimationTrack::new(4, 12.0, true));
        tracks.insert(VisualState::Shoot, AnimationTrack::new(3, 12.0, false));
        tracks.insert(VisualState::AirDash, AnimationTrack::new(2, 12.0, true));
        Self { tracks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_store_covers_all_states() {
        let store = AnimationStore::default();
        for state in [
            VisualState::Idle,
            VisualState::Run,
            VisualState::Jump,
            VisualState::Fall,
            VisualState::Crouch,
            VisualState::WallSlide,
            VisualState::Attack,
            VisualState::Guard,
            VisualState::Roll,
            VisualState::Shoot,
            VisualState::AirDash,
        ] {
            assert!(store.track(state).is_some(), "missing track for {:?}", state);
        }
    }

    #[test]
    fn test_track_minimum_one_frame() {
        let track = AnimationTrack::new(0, 8.0, true);
        assert_eq!(track.frame_count, 1);
    }
}
