use bevy_ecs::prelude::Resource;

/// Current framebuffer dimensions in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    pub w: i32,
    pub h: i32,
}
