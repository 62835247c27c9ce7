//! Named animation presets handed to the engine alongside each frame.

mod preset;

pub use preset::{AnimationPreset, TransitionSpec};
