//! Demo scene setup and per-frame control.
//!
//! Builds a walking-character sheet (a generated placeholder texture when
//! no real sheet is supplied), spawns a keyboard-driven entity plus a
//! second independent sprite, and reacts to clip completion.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::flipbook::Flipbook;
use crate::components::mapposition::MapPosition;
use crate::components::mirror::Mirror;
use crate::components::tint::Tint;
use crate::components::zindex::ZIndex;
use crate::error::FlipbookError;
use crate::events::clip::ClipFinishedEvent;
use crate::resources::flipbookstore::{ClipDef, FlipbookDef, FlipbookStore};
use crate::resources::texturestore::TextureStore;

/// Marker for the entity driven by the keyboard.
#[derive(Component)]
pub struct Player;

/// Built-in walking-character sheet used when no `--sheet` file is given.
///
/// Four looping walk clips, one per facing, plus a non-looping "Vanish"
/// clip to exercise completion events.
pub fn default_sheet_def() -> FlipbookDef {
    let walk = |name: &str, start: u32| ClipDef {
        name: name.to_string(),
        starting_frame: start,
        ending_frame: start + 3,
        interval: 0.12,
        looped: true,
    };
    FlipbookDef {
        tex_key: "walker".to_string(),
        frame_width: 32,
        frame_height: 32,
        frames_per_row: Some(4),
        source_offset: (16.0, 16.0),
        clips: vec![
            walk("WalkSouth", 0),
            walk("WalkWest", 4),
            walk("WalkEast", 8),
            walk("WalkNorth", 12),
            ClipDef {
                name: "Vanish".to_string(),
                starting_frame: 16,
                ending_frame: 19,
                interval: 0.1,
                looped: false,
            },
        ],
    }
}

/// Load the sheet texture, register the definition and spawn the demo
/// entities.
///
/// A checkerboard placeholder texture sized to the definition's grid is
/// generated in place of real pixel art, so the demo runs without asset
/// files.
pub fn setup(
    world: &mut World,
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    def: &FlipbookDef,
) -> Result<(), FlipbookError> {
    let frames_per_row = def
        .frames_per_row
        .unwrap_or_else(|| Flipbook::frames_per_row_for(128, def.frame_width))
        .max(1);
    let rows = def.max_frame() / frames_per_row + 1;
    let sheet_width = frames_per_row as i32 * def.frame_width;
    let sheet_height = rows as i32 * def.frame_height;

    let image = Image::gen_image_checked(
        sheet_width,
        sheet_height,
        (def.frame_width / 2).max(1),
        (def.frame_height / 2).max(1),
        Color::SKYBLUE,
        Color::DARKBLUE,
    );
    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| FlipbookError::TextureLoad(e.to_string()))?;

    // the first registered clip is selected automatically
    let book = def.build(texture.width)?;
    log::info!(
        "sheet '{}': {} clips, {} frames per row",
        book.tex_key(),
        book.clip_count(),
        book.frames_per_row()
    );

    world
        .resource_mut::<TextureStore>()
        .insert(def.tex_key.clone(), texture);
    world
        .resource_mut::<FlipbookStore>()
        .insert(def.tex_key.clone(), def.clone());

    // An independent sprite on its own clip, to show controllers share
    // nothing
    let mut other = book.clone();
    if other.clip_count() > 1 {
        other.play_index(1)?;
    }

    // Keyboard-driven sprite
    world.spawn((
        book,
        Player,
        MapPosition::new(320.0, 240.0),
        ZIndex(1),
        Tint::default(),
        Mirror::default(),
    ));
    world.spawn((
        other,
        MapPosition::new(160.0, 120.0),
        ZIndex(0),
        Tint::new(255, 220, 220, 255),
    ));

    Ok(())
}

/// Map arrow keys to direction-suffixed walk clips on the player, and the
/// space bar to the one-shot "Vanish" clip.
///
/// Holding a key re-plays the same clip every frame; selection is a no-op
/// in that case, so the walk cycle never restarts mid-stride.
pub fn control_player(world: &mut World, rl: &RaylibHandle) {
    let direction = if rl.is_key_down(KeyboardKey::KEY_UP) {
        Some("North")
    } else if rl.is_key_down(KeyboardKey::KEY_DOWN) {
        Some("South")
    } else if rl.is_key_down(KeyboardKey::KEY_LEFT) {
        Some("West")
    } else if rl.is_key_down(KeyboardKey::KEY_RIGHT) {
        Some("East")
    } else {
        None
    };
    let vanish = rl.is_key_pressed(KeyboardKey::KEY_SPACE);

    let mut query = world.query_filtered::<&mut Flipbook, With<Player>>();
    for mut book in query.iter_mut(world) {
        if let Some(direction) = direction {
            if let Err(e) = book.play_directional("Walk", direction) {
                log::warn!("player clip selection failed: {}", e);
            }
        } else if vanish {
            if let Err(e) = book.play("Vanish") {
                log::warn!("player clip selection failed: {}", e);
            }
        }
    }
}

/// Observer: when a one-shot clip ends, fall back to walking south.
pub fn clip_finished_observer(trigger: On<ClipFinishedEvent>, mut query: Query<&mut Flipbook>) {
    let event = trigger.event();
    log::info!("clip '{}' finished on {:?}", event.clip, event.entity);
    if let Ok(mut book) = query.get_mut(event.entity) {
        if let Err(e) = book.play("WalkSouth") {
            log::warn!("could not resume walking: {}", e);
        }
    }
}
