use serde::{Deserialize, Serialize};

use crate::error::FlipbookError;

/// A named flipbook segment: an inclusive frame range, the time each frame
/// stays on screen, and whether playback wraps around.
///
/// Frame indices are zero-based positions on the owning sheet and the
/// interval is expressed in seconds, the same unit as the tick delta.
/// Clips are immutable once registered on a
/// [`Flipbook`](crate::components::flipbook::Flipbook).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    /// Persistence identity assigned by an external store. Opaque payload.
    #[serde(default)]
    pub id: Option<i64>,
    /// Identity of the owning sheet, stamped when the clip is registered.
    /// A foreign-key style tag, never followed.
    #[serde(default)]
    pub sheet_id: Option<i64>,
    /// Clip name, unique within its sheet ignoring case.
    pub name: String,
    /// First frame of the clip.
    pub starting_frame: u32,
    /// Last frame of the clip, inclusive.
    pub ending_frame: u32,
    /// Seconds each frame stays visible. Strictly positive.
    pub interval: f32,
    /// Wrap back to `starting_frame` after the last frame.
    pub looped: bool,
}

impl Clip {
    /// Create a validated clip without persistence identity.
    pub fn new(
        name: impl Into<String>,
        starting_frame: u32,
        ending_frame: u32,
        interval: f32,
        looped: bool,
    ) -> Result<Self, FlipbookError> {
        let clip = Self {
            id: None,
            sheet_id: None,
            name: name.into(),
            starting_frame,
            ending_frame,
            interval,
            looped,
        };
        clip.validate()?;
        Ok(clip)
    }

    /// Check the configuration invariants.
    ///
    /// Also run when a clip enters a flipbook's registry, so clips
    /// deserialized from definition files go through the same gate.
    pub fn validate(&self) -> Result<(), FlipbookError> {
        if self.name.is_empty() {
            return Err(FlipbookError::EmptyClipName);
        }
        if self.starting_frame > self.ending_frame {
            return Err(FlipbookError::InvalidClipRange {
                name: self.name.clone(),
                starting_frame: self.starting_frame,
                ending_frame: self.ending_frame,
            });
        }
        if !self.interval.is_finite() || self.interval <= 0.0 {
            return Err(FlipbookError::InvalidClipInterval {
                name: self.name.clone(),
                interval: self.interval,
            });
        }
        Ok(())
    }

    /// Number of frames the clip covers.
    pub fn frame_count(&self) -> u32 {
        self.ending_frame - self.starting_frame + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let clip = Clip::new("Walk", 0, 3, 0.1, true).unwrap();
        assert_eq!(clip.name, "Walk");
        assert_eq!(clip.frame_count(), 4);
        assert!(clip.id.is_none());
        assert!(clip.sheet_id.is_none());
    }

    #[test]
    fn test_single_frame_range_is_valid() {
        let clip = Clip::new("Pose", 5, 5, 0.2, false).unwrap();
        assert_eq!(clip.frame_count(), 1);
    }

    #[test]
    fn test_rejects_empty_name() {
        assert!(matches!(
            Clip::new("", 0, 3, 0.1, true),
            Err(FlipbookError::EmptyClipName)
        ));
    }

    #[test]
    fn test_rejects_inverted_range() {
        assert!(matches!(
            Clip::new("Walk", 4, 1, 0.1, true),
            Err(FlipbookError::InvalidClipRange { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_negative_and_nan_interval() {
        for interval in [0.0, -0.5, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                Clip::new("Walk", 0, 3, interval, true),
                Err(FlipbookError::InvalidClipInterval { .. })
            ));
        }
    }

    #[test]
    fn test_deserialized_clip_revalidates() {
        let json = r#"{"name":"Broken","starting_frame":0,"ending_frame":3,"interval":0.0,"looped":true}"#;
        let clip: Clip = serde_json::from_str(json).unwrap();
        assert!(clip.validate().is_err());
    }
}
