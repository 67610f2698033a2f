use bevy_ecs::prelude::Resource;

/// Simulation clock shared by all systems.
///
/// `delta` is the scaled time step of the current tick in seconds, written
/// once per frame by
/// [`update_world_time`](crate::systems::time::update_world_time).
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    /// Seconds since startup, scaled.
    pub elapsed: f32,
    /// Scaled delta of the current tick, in seconds.
    pub delta: f32,
    /// Multiplier applied to incoming deltas. 1.0 is real time.
    pub time_scale: f32,
    /// Ticks since startup.
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

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
