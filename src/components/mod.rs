//! ECS components for animated sprites.
//!
//! Submodules overview:
//! - [`clip`] – a named, time-bounded frame range with interval and loop flag
//! - [`flipbook`] – the sprite sheet + playback controller
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`mirror`] – horizontal/vertical mirroring at draw time
//! - [`tint`] – color modulation at draw time
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod clip;
pub mod flipbook;
pub mod mapposition;
pub mod mirror;
pub mod tint;
pub mod zindex;
