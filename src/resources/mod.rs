//! ECS resources made available to systems.
//!
//! Long-lived data injected into the ECS world and read by systems during
//! execution.
//!
//! Overview
//! - `flipbookstore` – reusable sheet definitions and the JSON loader
//! - `gameconfig` – window settings loaded from an INI file
//! - `screensize` – current framebuffer dimensions in pixels
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldtime` – simulation time and delta

pub mod flipbookstore;
pub mod gameconfig;
pub mod screensize;
pub mod texturestore;
pub mod worldtime;
