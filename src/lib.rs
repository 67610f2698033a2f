//! Flipbook sprite-animation engine.
//!
//! A sprite sheet is a grid of equally-sized frames; a clip is a named,
//! inclusive frame range with a per-frame interval and a loop flag. The
//! [`Flipbook`](components::flipbook::Flipbook) component tracks playback
//! time and publishes, each tick, the pixel rectangle of the sheet to
//! display. Everything around it (texture store, JSON definition loader,
//! raylib draw pass) is thin collaborator glue.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
