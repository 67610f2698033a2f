//! Loaded textures keyed by string IDs.
//!
//! Textures are loaded by the host (raylib needs the window handle for
//! that) and shared read-only; flipbooks only carry the key, never the
//! pixel data itself.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

/// String-keyed store of sheet textures consumed by the draw pass.
#[derive(Resource, Default)]
pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// Register a texture under `key`, replacing any previous entry.
    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }
}
