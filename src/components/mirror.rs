use bevy_ecs::prelude::Component;

/// Horizontal/vertical mirroring applied when a frame is drawn.
///
/// Pure draw-time state; playback never reads it.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Mirror {
    pub flip_h: bool,
    pub flip_v: bool,
}

impl Mirror {
    pub fn horizontal() -> Self {
        Self {
            flip_h: true,
            flip_v: false,
        }
    }
}
