//! ECS systems.
//!
//! Submodules overview:
//! - [`flipbook`] – advances playback state each tick
//! - [`render`] – draw pass over all animated sprites
//! - [`time`] – per-frame update of the shared clock

pub mod flipbook;
pub mod render;
pub mod time;
