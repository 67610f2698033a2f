//! Flipbook definition loading and the definition registry.
//!
//! Definitions are the loader-facing shape of a sheet: plain serde structs
//! decoded from JSON, turned into playable
//! [`Flipbook`](crate::components::flipbook::Flipbook) components through
//! [`FlipbookDef::build`]. The [`FlipbookStore`] resource keeps reusable
//! definitions around so many entities can be stamped out from one sheet.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::components::clip::Clip;
use crate::components::flipbook::Flipbook;
use crate::error::FlipbookError;

/// One clip as written in a definition file.
#[derive(Debug, Clone, Deserialize)]
pub struct ClipDef {
    pub name: String,
    pub starting_frame: u32,
    pub ending_frame: u32,
    /// Seconds per frame.
    pub interval: f32,
    #[serde(default)]
    pub looped: bool,
}

/// A whole sheet as written in a definition file.
#[derive(Debug, Clone, Deserialize)]
pub struct FlipbookDef {
    /// Texture key in [`crate::resources::texturestore::TextureStore`].
    pub tex_key: String,
    pub frame_width: i32,
    pub frame_height: i32,
    /// Derived from the sheet width when omitted.
    #[serde(default)]
    pub frames_per_row: Option<u32>,
    /// Draw-time pivot offset within a frame, in pixels.
    #[serde(default)]
    pub source_offset: (f32, f32),
    #[serde(default)]
    pub clips: Vec<ClipDef>,
}

impl FlipbookDef {
    /// Decode a definition from JSON text.
    pub fn from_json(json: &str) -> Result<Self, FlipbookError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a playable flipbook from this definition.
    ///
    /// `sheet_width` is the texture width in pixels, used to derive the
    /// grid when the definition does not pin `frames_per_row` itself. All
    /// clips are validated on the way in; a duplicate clip name is logged
    /// and skipped rather than failing the whole sheet.
    pub fn build(&self, sheet_width: i32) -> Result<Flipbook, FlipbookError> {
        let frames_per_row = match self.frames_per_row {
            Some(n) => n,
            None => Flipbook::frames_per_row_for(sheet_width, self.frame_width),
        };
        let mut book = Flipbook::new(
            self.tex_key.clone(),
            self.frame_width,
            self.frame_height,
            frames_per_row,
            Vector2 {
                x: self.source_offset.0,
                y: self.source_offset.1,
            },
        )?;
        for def in &self.clips {
            let clip = Clip::new(
                def.name.clone(),
                def.starting_frame,
                def.ending_frame,
                def.interval,
                def.looped,
            )?;
            if !book.add_clip(clip)? {
                log::warn!(
                    "flipbook '{}': duplicate clip name '{}' skipped",
                    self.tex_key,
                    def.name
                );
            }
        }
        Ok(book)
    }

    /// Highest frame index any clip reaches, or zero without clips. Handy
    /// for sizing placeholder sheets.
    pub fn max_frame(&self) -> u32 {
        self.clips.iter().map(|c| c.ending_frame).max().unwrap_or(0)
    }
}

/// Registry of reusable flipbook definitions keyed by string IDs.
#[derive(Resource, Default)]
pub struct FlipbookStore {
    defs: FxHashMap<String, FlipbookDef>,
}

impl FlipbookStore {
    pub fn new() -> Self {
        Self {
            defs: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, def: FlipbookDef) {
        self.defs.insert(key.into(), def);
    }

    pub fn get(&self, key: &str) -> Option<&FlipbookDef> {
        self.defs.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET_JSON: &str = r#"{
        "tex_key": "walker",
        "frame_width": 32,
        "frame_height": 32,
        "source_offset": [16.0, 16.0],
        "clips": [
            { "name": "WalkSouth", "starting_frame": 0, "ending_frame": 3, "interval": 0.1, "looped": true },
            { "name": "Vanish", "starting_frame": 4, "ending_frame": 7, "interval": 0.1 }
        ]
    }"#;

    #[test]
    fn test_from_json_and_build() {
        let def = FlipbookDef::from_json(SHEET_JSON).unwrap();
        assert_eq!(def.max_frame(), 7);

        // frames_per_row omitted: derived from a 128 px wide sheet
        let book = def.build(128).unwrap();
        assert_eq!(book.frames_per_row(), 4);
        assert_eq!(book.clip_count(), 2);
        assert!(book.clip("walksouth").unwrap().looped);
        assert!(!book.clip("VANISH").unwrap().looped);
        assert_eq!(book.source_offset().x, 16.0);
    }

    #[test]
    fn test_explicit_frames_per_row_wins() {
        let mut def = FlipbookDef::from_json(SHEET_JSON).unwrap();
        def.frames_per_row = Some(8);
        let book = def.build(128).unwrap();
        assert_eq!(book.frames_per_row(), 8);
    }

    #[test]
    fn test_invalid_clip_fails_build() {
        let mut def = FlipbookDef::from_json(SHEET_JSON).unwrap();
        def.clips[0].interval = 0.0;
        assert!(matches!(
            def.build(128),
            Err(FlipbookError::InvalidClipInterval { .. })
        ));
    }

    #[test]
    fn test_bad_json_is_a_parse_error() {
        assert!(matches!(
            FlipbookDef::from_json("{ not json"),
            Err(FlipbookError::DefinitionParse(_))
        ));
    }
}
