//! Engine error types.
//!
//! All failures are local and synchronous. A call that returns an error
//! leaves the flipbook exactly as it was before the call.

use thiserror::Error;

/// Errors raised by flipbook construction, clip validation and playback
/// selection.
#[derive(Debug, Error)]
pub enum FlipbookError {
    /// Frame dimensions must both be positive pixel counts.
    #[error("frame dimensions {width}x{height} are invalid, both must be positive")]
    InvalidFrameDimensions { width: i32, height: i32 },

    /// The sheet grid needs at least one frame per row.
    #[error("frames per row must be positive")]
    InvalidFramesPerRow,

    /// A clip's frame range must satisfy `starting_frame <= ending_frame`.
    #[error("clip '{name}': starting frame {starting_frame} is past ending frame {ending_frame}")]
    InvalidClipRange {
        name: String,
        starting_frame: u32,
        ending_frame: u32,
    },

    /// A clip interval of zero would spin the advance loop forever, so it
    /// is rejected at validation time.
    #[error("clip '{name}': interval {interval} must be a positive number of seconds")]
    InvalidClipInterval { name: String, interval: f32 },

    /// Selection by name requires a non-empty name.
    #[error("clip name is empty")]
    EmptyClipName,

    /// Selection by ordinal position outside `[0, count)`.
    #[error("clip index {index} is out of range (the sheet has {count} clips)")]
    ClipIndexOutOfRange { index: usize, count: usize },

    /// A definition file could not be decoded.
    #[error("failed to parse flipbook definition: {0}")]
    DefinitionParse(#[from] serde_json::Error),

    /// The host failed to produce a texture for a sheet.
    #[error("failed to load texture: {0}")]
    TextureLoad(String),
}
