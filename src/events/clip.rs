//! Clip completion events.
//!
//! When a non-looping clip on a
//! [`Flipbook`](crate::components::flipbook::Flipbook) advances past its
//! ending frame, a [`ClipFinishedEvent`] is triggered for the entity.
//! Observers can subscribe to chain animations, despawn effects, and so on.
//!
//! # Example
//!
//! ```ignore
//! world.spawn(Observer::new(
//!     |trigger: On<ClipFinishedEvent>, mut query: Query<&mut Flipbook>| {
//!         if trigger.event().clip == "Attack" {
//!             if let Ok(mut book) = query.get_mut(trigger.event().entity) {
//!                 let _ = book.play("Idle");
//!             }
//!         }
//!     },
//! ));
//! ```
//!
//! # Related
//!
//! - [`crate::systems::flipbook::advance_flipbooks`] – the system that emits these events

use bevy_ecs::prelude::*;

/// Event emitted once when a non-looping clip finishes playback.
///
/// `entity` identifies the sprite whose clip completed and `clip` carries
/// the clip's name at the moment of completion.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct ClipFinishedEvent {
    /// The entity whose clip finished.
    pub entity: Entity,
    /// Name of the finished clip.
    pub clip: String,
}
