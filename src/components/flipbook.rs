//! The sprite sheet + playback controller component.
//!
//! A [`Flipbook`] describes a grid of equally-sized frames on one texture
//! and owns the named [`Clip`]s defined on it, together with the playback
//! state: the active clip, the current frame, the elapsed-time accumulator
//! and the cached source rectangle the renderer samples.
//!
//! # Conventions
//!
//! Frame indices are zero-based and map to the sheet row-major: frame `n`
//! sits at column `n % frames_per_row`, row `n / frames_per_row`. Clip
//! intervals and update deltas are seconds.
//!
//! # Related
//!
//! - [`crate::systems::flipbook::advance_flipbooks`] – per-tick driver
//! - [`crate::resources::flipbookstore::FlipbookDef`] – definition loading
//! - [`crate::systems::render::render_pass`] – consumes the rectangle

use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};
use rustc_hash::FxHashMap;

use crate::components::clip::Clip;
use crate::error::FlipbookError;

/// A sprite sheet with flipbook-style animations.
///
/// Each entity carries its own `Flipbook`, so playback state is never
/// shared between sprites; the pixel data itself lives in the
/// [`TextureStore`](crate::resources::texturestore::TextureStore) and is
/// only referenced here by key.
#[derive(Component, Debug, Clone)]
pub struct Flipbook {
    id: Option<i64>,
    tex_key: String,
    frame_width: i32,
    frame_height: i32,
    frames_per_row: u32,
    source_offset: Vector2,
    clips: Vec<Clip>,
    /// Lowercased clip name -> index into `clips`.
    by_name: FxHashMap<String, usize>,
    current: Option<usize>,
    current_frame: u32,
    elapsed: f32,
    source_rect: Rectangle,
}

impl Flipbook {
    /// Create an empty flipbook for the given sheet grid.
    ///
    /// `frame_width`/`frame_height` are the pixel dimensions of one frame
    /// and must be positive; `frames_per_row` is the grid width in frames.
    /// `source_offset` is subtracted at draw time (the pivot within a
    /// frame) and is passed through untouched.
    pub fn new(
        tex_key: impl Into<String>,
        frame_width: i32,
        frame_height: i32,
        frames_per_row: u32,
        source_offset: Vector2,
    ) -> Result<Self, FlipbookError> {
        if frame_width <= 0 || frame_height <= 0 {
            return Err(FlipbookError::InvalidFrameDimensions {
                width: frame_width,
                height: frame_height,
            });
        }
        if frames_per_row == 0 {
            return Err(FlipbookError::InvalidFramesPerRow);
        }
        Ok(Self {
            id: None,
            tex_key: tex_key.into(),
            frame_width,
            frame_height,
            frames_per_row,
            source_offset,
            clips: Vec::new(),
            by_name: FxHashMap::default(),
            current: None,
            current_frame: 0,
            elapsed: 0.0,
            source_rect: Rectangle::new(0.0, 0.0, frame_width as f32, frame_height as f32),
        })
    }

    /// Frames per row for a sheet of `sheet_width` pixels, the usual way
    /// to derive the grid at load time.
    pub fn frames_per_row_for(sheet_width: i32, frame_width: i32) -> u32 {
        if frame_width <= 0 || sheet_width <= 0 {
            return 0;
        }
        (sheet_width / frame_width) as u32
    }

    /// Attach the persistence identity assigned by an external store.
    /// Clips added afterwards get stamped with it.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Key of the sheet texture in the texture store.
    pub fn tex_key(&self) -> &str {
        &self.tex_key
    }

    pub fn frame_width(&self) -> i32 {
        self.frame_width
    }

    pub fn frame_height(&self) -> i32 {
        self.frame_height
    }

    pub fn frames_per_row(&self) -> u32 {
        self.frames_per_row
    }

    /// Draw-time pivot offset, passed through to the renderer.
    pub fn source_offset(&self) -> Vector2 {
        self.source_offset
    }

    /// The pixel region of the sheet for the frame on display.
    pub fn source_rectangle(&self) -> Rectangle {
        self.source_rect
    }

    /// The clip playback is on, if any.
    pub fn current_clip(&self) -> Option<&Clip> {
        self.current.map(|i| &self.clips[i])
    }

    /// Current frame as a zero-based sheet index. May sit one past the
    /// active clip's ending frame once a non-looping clip has finished.
    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    /// Seconds accumulated since the last frame advance.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn clip_count(&self) -> usize {
        self.clips.len()
    }

    /// Register a clip, checking for name collisions.
    ///
    /// Invalid clip configuration is an error and leaves the registry
    /// untouched. A name already taken (ignoring case) is not an error:
    /// the clip is dropped and `Ok(false)` is returned. When nothing is
    /// selected yet the new clip starts playing.
    pub fn add_clip(&mut self, mut clip: Clip) -> Result<bool, FlipbookError> {
        clip.validate()?;
        let key = clip.name.to_lowercase();
        if self.by_name.contains_key(&key) {
            return Ok(false);
        }
        if let Some(id) = self.id {
            clip.sheet_id = Some(id);
        }
        self.by_name.insert(key, self.clips.len());
        self.clips.push(clip);
        if self.current.is_none() {
            self.select(Some(self.clips.len() - 1));
        }
        Ok(true)
    }

    /// Look up a clip by name, ignoring case. Total: an empty or unknown
    /// name is simply `None`.
    pub fn clip(&self, name: &str) -> Option<&Clip> {
        self.clip_index(name).map(|i| &self.clips[i])
    }

    fn clip_index(&self, name: &str) -> Option<usize> {
        if name.is_empty() {
            return None;
        }
        self.by_name.get(&name.to_lowercase()).copied()
    }

    /// Play the clip with the given name.
    ///
    /// An unknown name clears the active clip, like [`Flipbook::stop`].
    /// Re-selecting the clip already playing keeps its position.
    pub fn play(&mut self, name: &str) -> Result<(), FlipbookError> {
        if name.is_empty() {
            return Err(FlipbookError::EmptyClipName);
        }
        let target = self.clip_index(name);
        if target.is_none() {
            log::warn!("flipbook '{}': no clip named '{}'", self.tex_key, name);
        }
        self.select(target);
        Ok(())
    }

    /// Play a clip by its ordinal position in the registry.
    pub fn play_index(&mut self, index: usize) -> Result<(), FlipbookError> {
        if index >= self.clips.len() {
            return Err(FlipbookError::ClipIndexOutOfRange {
                index,
                count: self.clips.len(),
            });
        }
        self.select(Some(index));
        Ok(())
    }

    /// Play `name` + `direction`, e.g. `play_directional("Walk", "South")`
    /// selects the clip named `WalkSouth`. Lets a base action fan out over
    /// a facing suffix without a separate lookup table.
    pub fn play_directional(&mut self, name: &str, direction: &str) -> Result<(), FlipbookError> {
        if name.is_empty() {
            return Err(FlipbookError::EmptyClipName);
        }
        self.play(&format!("{name}{direction}"))
    }

    /// Clear the active clip. Frame and time state are irrelevant until a
    /// new clip is selected.
    pub fn stop(&mut self) {
        self.select(None);
    }

    fn select(&mut self, clip: Option<usize>) {
        // Re-selecting the active clip keeps its playback position.
        if clip != self.current {
            self.current = clip;
            self.reset();
        }
    }

    /// Rewind the active clip to its starting frame.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        if let Some(i) = self.current {
            self.current_frame = self.clips[i].starting_frame;
            // A zero-time update clamps the frame and rebuilds the rectangle.
            self.update(0.0);
        }
    }

    /// Jump the active clip to its final pose without waiting it out.
    pub fn advance_to_end(&mut self) {
        if let Some(i) = self.current {
            self.current_frame = self.clips[i].ending_frame;
            self.update(0.0);
        }
    }

    /// True when there is no active clip, or the active clip does not loop
    /// and the current frame has moved past its ending frame. Gates all
    /// further advancement.
    pub fn is_playback_complete(&self) -> bool {
        match self.current_clip() {
            None => true,
            Some(clip) => !clip.looped && self.current_frame > clip.ending_frame,
        }
    }

    /// Advance playback by `dt` seconds.
    ///
    /// Once playback is complete this is a no-op and the rectangle stays
    /// frozen at its last value. Otherwise the current frame is wrapped if
    /// the clip loops, the source rectangle is rebuilt, and the time
    /// accumulator is drained one interval per frame advance. The drain is
    /// a `while`, so a delta spanning several intervals advances several
    /// frames instead of silently dropping time.
    pub fn update(&mut self, dt: f32) {
        if self.is_playback_complete() {
            return;
        }
        let Some(i) = self.current else {
            return;
        };
        let clip = &self.clips[i];
        let (start, end, looped, interval) =
            (clip.starting_frame, clip.ending_frame, clip.looped, clip.interval);

        if looped && self.current_frame > end {
            self.current_frame = start;
        }

        let row = self.current_frame / self.frames_per_row;
        let col = self.current_frame % self.frames_per_row;
        self.source_rect = Rectangle::new(
            (col as i32 * self.frame_width) as f32,
            (row as i32 * self.frame_height) as f32,
            self.frame_width as f32,
            self.frame_height as f32,
        );

        self.elapsed += dt;
        while self.elapsed >= interval {
            self.current_frame += 1;
            self.elapsed -= interval;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> Flipbook {
        Flipbook::new("sheet", 32, 32, 4, Vector2 { x: 0.0, y: 0.0 }).unwrap()
    }

    #[test]
    fn test_rejects_bad_frame_dimensions() {
        let r = Flipbook::new("sheet", 0, 32, 4, Vector2 { x: 0.0, y: 0.0 });
        assert!(matches!(
            r,
            Err(FlipbookError::InvalidFrameDimensions { .. })
        ));
        let r = Flipbook::new("sheet", 32, -1, 4, Vector2 { x: 0.0, y: 0.0 });
        assert!(matches!(
            r,
            Err(FlipbookError::InvalidFrameDimensions { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_frames_per_row() {
        let r = Flipbook::new("sheet", 32, 32, 0, Vector2 { x: 0.0, y: 0.0 });
        assert!(matches!(r, Err(FlipbookError::InvalidFramesPerRow)));
    }

    #[test]
    fn test_frames_per_row_for() {
        assert_eq!(Flipbook::frames_per_row_for(128, 32), 4);
        assert_eq!(Flipbook::frames_per_row_for(100, 32), 3);
        assert_eq!(Flipbook::frames_per_row_for(128, 0), 0);
    }

    #[test]
    fn test_invalid_clip_leaves_registry_untouched() {
        let mut book = sheet();
        let bad = Clip {
            id: None,
            sheet_id: None,
            name: "Bad".into(),
            starting_frame: 3,
            ending_frame: 1,
            interval: 0.1,
            looped: true,
        };
        assert!(book.add_clip(bad).is_err());
        assert_eq!(book.clip_count(), 0);
        assert!(book.current_clip().is_none());
    }

    #[test]
    fn test_add_clip_stamps_sheet_id() {
        let mut book = sheet().with_id(7);
        book.add_clip(Clip::new("Walk", 0, 3, 0.1, true).unwrap())
            .unwrap();
        assert_eq!(book.clip("walk").unwrap().sheet_id, Some(7));
    }

    #[test]
    fn test_source_rectangle_formula() {
        let mut book = sheet();
        book.add_clip(Clip::new("Pose", 5, 5, 0.1, false).unwrap())
            .unwrap();
        // frame 5 on a 4-wide grid of 32x32 frames: column 1, row 1
        let rect = book.source_rectangle();
        assert_eq!(rect.x, 32.0);
        assert_eq!(rect.y, 32.0);
        assert_eq!(rect.width, 32.0);
        assert_eq!(rect.height, 32.0);
    }
}
