//! Preset describes how the engine should time every unit's animation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::options::Variant;

/// Timing curve the engine applies to every unit of a frame.
///
/// Calligraph only decides *what* moves and by how much; the engine owns
/// the interpolation, so this is passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransitionSpec {
    /// Fixed-duration tween along a cubic bezier.
    Tween {
        /// Duration in seconds.
        duration: f32,
        /// Bezier control points `[x1, y1, x2, y2]`.
        ease: [f32; 4],
    },
    /// Spring expressed by perceived duration and bounce.
    Spring {
        /// Perceived duration in seconds.
        duration: f32,
        /// `0.0` for no overshoot; higher values overshoot more.
        bounce: f32,
    },
}

/// Named transition presets.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum AnimationPreset {
    /// 380ms expo-out tween. Default for text.
    #[default]
    Default,
    /// Spring with no bounce.
    Smooth,
    /// Short spring with a little bounce. Default for numbers.
    Snappy,
    /// Spring with visible overshoot.
    Bouncy,
}

impl AnimationPreset {
    /// Every preset, in declaration order.
    pub const ALL: [Self; 4] =
        [Self::Default, Self::Smooth, Self::Snappy, Self::Bouncy];

    /// Preset used when the options leave it unset.
    #[must_use]
    pub const fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Text => Self::Default,
            Variant::Number => Self::Snappy,
        }
    }

    /// Timing the engine should use for this preset.
    #[must_use]
    pub const fn spec(self) -> TransitionSpec {
        match self {
            Self::Default => TransitionSpec::Tween {
                duration: 0.38,
                ease: [0.19, 1.0, 0.22, 1.0],
            },
            Self::Smooth => TransitionSpec::Spring {
                duration: 0.5,
                bounce: 0.0,
            },
            Self::Snappy => TransitionSpec::Spring {
                duration: 0.35,
                bounce: 0.15,
            },
            Self::Bouncy => TransitionSpec::Spring {
                duration: 0.5,
                bounce: 0.3,
            },
        }
    }

    /// Name used in logs and preset files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Smooth => "smooth",
            Self::Snappy => "snappy",
            Self::Bouncy => "bouncy",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_defaults() {
        assert_eq!(
            AnimationPreset::for_variant(Variant::Text),
            AnimationPreset::Default
        );
        assert_eq!(
            AnimationPreset::for_variant(Variant::Number),
            AnimationPreset::Snappy
        );
    }

    #[test]
    fn default_is_a_tween() {
        assert!(matches!(
            AnimationPreset::Default.spec(),
            TransitionSpec::Tween { duration, .. } if duration == 0.38
        ));
    }

    #[test]
    fn springs_bounce_in_order() {
        let bounce = |p: AnimationPreset| match p.spec() {
            TransitionSpec::Spring { bounce, .. } => bounce,
            TransitionSpec::Tween { .. } => f32::NAN,
        };
        let (smooth, snappy, bouncy) = (
            bounce(AnimationPreset::Smooth),
            bounce(AnimationPreset::Snappy),
            bounce(AnimationPreset::Bouncy),
        );
        assert!(smooth < snappy);
        assert!(snappy < bouncy);
    }

    #[test]
    fn names_match_serde() {
        for preset in AnimationPreset::ALL {
            let json = serde_json::to_string(&preset).unwrap();
            assert_eq!(json, format!("\"{}\"", preset.name()));
        }
    }
}
