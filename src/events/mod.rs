//! Event types exchanged between systems.
//!
//! Events decouple playback from whatever reacts to it: systems trigger
//! them through `Commands` and observers pick them up without a direct
//! dependency on the animation code.
//!
//! Submodules:
//! - [`clip`] – playback completion notifications

pub mod clip;
