use bevy_ecs::prelude::Resource;

/// Simulation time and per-tick delta.
///
/// Updated once per physics step by
/// [`update_world_time`](crate::systems::time::update_world_time). `delta`
/// already has `time_scale` applied.
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}
