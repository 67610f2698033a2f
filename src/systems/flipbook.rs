//! Flipbook advancement system.
//!
//! [`advance_flipbooks`] drives every
//! [`Flipbook`](crate::components::flipbook::Flipbook) by the frame delta
//! and emits a [`ClipFinishedEvent`](crate::events::clip::ClipFinishedEvent)
//! on the tick a non-looping clip runs out.
//!
//! # Animation Flow
//!
//! 1. Sheets are described by [`FlipbookDef`](crate::resources::flipbookstore::FlipbookDef)
//!    and built into per-entity `Flipbook` components
//! 2. This system advances frame/time state from [`WorldTime`](crate::resources::worldtime::WorldTime)
//! 3. The draw pass in [`render`](crate::systems::render) samples the
//!    resulting source rectangle

use bevy_ecs::prelude::*;

use crate::components::flipbook::Flipbook;
use crate::events::clip::ClipFinishedEvent;
use crate::resources::worldtime::WorldTime;

/// Advance every flipbook by the scaled frame delta.
///
/// Completion of a non-looping clip triggers a [`ClipFinishedEvent`]
/// exactly once, on the tick the last frame's interval runs out. Already
/// complete or stopped flipbooks are left alone.
pub fn advance_flipbooks(
    mut query: Query<(Entity, &mut Flipbook)>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    for (entity, mut book) in query.iter_mut() {
        let was_complete = book.is_playback_complete();
        book.update(time.delta);
        if !was_complete && book.is_playback_complete() {
            if let Some(clip) = book.current_clip() {
                commands.trigger(ClipFinishedEvent {
                    entity,
                    clip: clip.name.clone(),
                });
            }
        }
    }
}
