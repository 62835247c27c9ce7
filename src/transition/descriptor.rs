//! What the engine receives for every unit of a frame.

use serde::{Deserialize, Serialize};

use crate::keys::IdentityKey;

/// A visual pose of one unit, relative to its laid-out position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Horizontal offset in pixels.
    pub x: f32,
    /// Vertical offset in pixels; positive is down.
    pub y: f32,
    /// `0.0` transparent to `1.0` opaque.
    pub opacity: f32,
    /// Uniform scale factor.
    pub scale: f32,
    /// Gaussian blur radius in pixels.
    pub blur: f32,
}

impl Keyframe {
    /// Where every unit settles: in place, opaque, unscaled, sharp.
    pub const REST: Self = Self {
        x: 0.0,
        y: 0.0,
        opacity: 1.0,
        scale: 1.0,
        blur: 0.0,
    };

    /// Transparent at the given offset, otherwise untouched.
    #[must_use]
    pub const fn faded_at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            opacity: 0.0,
            scale: 1.0,
            blur: 0.0,
        }
    }
}

impl Default for Keyframe {
    fn default() -> Self {
        Self::REST
    }
}

/// Everything the engine needs to animate one unit.
///
/// Entering units animate from [`enter_from`](Self::enter_from) to
/// [`Keyframe::REST`] after [`delay`](Self::delay). Exiting units animate to
/// [`exit_to`](Self::exit_to) and are removed once done. Persisted units
/// only animate their layout position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderDescriptor {
    /// Identity the engine keys the unit's animation on.
    pub key: IdentityKey,
    /// The character rendered.
    pub content: char,
    /// Horizontal offset of this unit's enter (or exit) pose.
    pub offset_x: f32,
    /// Vertical offset of this unit's enter (or exit) pose.
    pub offset_y: f32,
    /// Seconds before this unit starts animating.
    pub delay: f32,
    /// Appeared in this update.
    pub is_entering: bool,
    /// Left in this update; rendered only until its exit finishes.
    pub is_exiting: bool,
    /// Occupies the final position of the current text. The engine reports
    /// this unit's completion back through `Calligraph::notify_complete`.
    pub is_last: bool,
    /// Right-anchored column (`0` = least significant), number variant only.
    pub column: Option<usize>,
    /// Pose an entering unit starts from.
    pub enter_from: Keyframe,
    /// Pose an exiting unit ends at.
    pub exit_to: Keyframe,
}

impl RenderDescriptor {
    /// Present before and after this update.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        !self.is_entering && !self.is_exiting
    }
}
