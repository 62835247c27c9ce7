use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which diff and motion a label uses.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Character diff along a longest common subsequence; units drift
    /// sideways in and out.
    #[default]
    Text,
    /// Right-anchored column diff; digits roll vertically.
    Number,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Drift", inline)]
#[serde(default)]
/// Maximum spread for entering/exiting units of the text variant.
///
/// The spread is scaled by the fraction of units that changed, so a
/// one-character edit barely drifts and a full replacement drifts fully.
pub struct DriftOptions {
    /// Horizontal spread in pixels.
    #[schemars(title = "Drift X", range(min = 0.0, max = 100.0), extend("step" = 1.0))]
    pub x: f32,
    /// Vertical spread in pixels.
    #[schemars(title = "Drift Y", range(min = 0.0, max = 100.0), extend("step" = 1.0))]
    pub y: f32,
}

impl Default for DriftOptions {
    fn default() -> Self {
        Self { x: 15.0, y: 0.0 }
    }
}
