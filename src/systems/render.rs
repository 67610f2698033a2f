//! Draw pass for animated sprites.
//!
//! A pure read of playback state: the pass never mutates a flipbook, it
//! samples the current source rectangle and paints it.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::flipbook::Flipbook;
use crate::components::mapposition::MapPosition;
use crate::components::mirror::Mirror;
use crate::components::tint::Tint;
use crate::components::zindex::ZIndex;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;

struct DrawItem {
    tex_key: String,
    src: Rectangle,
    origin: Vector2,
    x: f32,
    y: f32,
    z: i32,
    color: Color,
}

/// Render all flipbook sprites inside raylib's drawing scope.
///
/// Collects (flipbook, position, z, tint, mirror), culls against the
/// screen rectangle, sorts by z-index, and draws each current frame with
/// `draw_texture_pro`. Mirroring negates the source extents, the raylib
/// way to flip a sub-rectangle.
pub fn render_pass(world: &mut World, d: &mut RaylibDrawHandle) {
    let screen = *world.resource::<ScreenSize>();

    let mut items: Vec<DrawItem> = {
        let mut q = world.query::<(
            &Flipbook,
            &MapPosition,
            Option<&ZIndex>,
            Option<&Tint>,
            Option<&Mirror>,
        )>();
        q.iter(world)
            .filter_map(|(book, pos, z, tint, mirror)| {
                // Screen-space sprite AABB with MapPosition as the pivot
                let min_x = pos.x - book.source_offset().x;
                let min_y = pos.y - book.source_offset().y;
                let max_x = min_x + book.frame_width() as f32;
                let max_y = min_y + book.frame_height() as f32;
                let visible = max_x >= 0.0
                    && min_x <= screen.w as f32
                    && max_y >= 0.0
                    && min_y <= screen.h as f32;
                if !visible {
                    return None;
                }
                let mut src = book.source_rectangle();
                if let Some(m) = mirror {
                    if m.flip_h {
                        src.width = -src.width;
                    }
                    if m.flip_v {
                        src.height = -src.height;
                    }
                }
                Some(DrawItem {
                    tex_key: book.tex_key().to_string(),
                    src,
                    origin: book.source_offset(),
                    x: pos.x,
                    y: pos.y,
                    z: z.map(|z| z.0).unwrap_or(0),
                    color: tint.map(|t| t.color).unwrap_or(Color::WHITE),
                })
            })
            .collect()
    };

    items.sort_by_key(|item| item.z);

    let textures = world.resource::<TextureStore>();
    for item in &items {
        if let Some(tex) = textures.get(&item.tex_key) {
            // Destination places the frame so MapPosition minus the source
            // offset is the top-left corner.
            let dest = Rectangle::new(
                item.x,
                item.y,
                item.src.width.abs(),
                item.src.height.abs(),
            );
            d.draw_texture_pro(tex, item.src, dest, item.origin, 0.0, item.color);
        }
    }
}
