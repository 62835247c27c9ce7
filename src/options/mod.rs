//! Per-instance label options with TOML preset support.
//!
//! Options serialize to/from TOML so a label's look can be stored as a named
//! preset file and shared between labels.

mod motion;
mod presentation;

use std::path::Path;

pub use motion::{DriftOptions, Variant};
pub use presentation::PresentationOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    animation::{AnimationPreset, TransitionSpec},
    error::CalligraphError,
};

/// Top-level options container. Every field has a default so partial TOML
/// files (e.g. only `variant = "number"`) work.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Text or number diffing.
    #[schemars(title = "Variant")]
    pub variant: Variant,
    /// Transition preset; unset picks the variant's default.
    #[schemars(title = "Animation")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationPreset>,
    /// Seconds of delay spread across units.
    #[schemars(title = "Stagger", range(min = 0.0, max = 0.2), extend("step" = 0.005))]
    pub stagger: f32,
    /// Animate units in on first mount instead of showing them at rest.
    #[schemars(title = "Animate Initial")]
    pub initial: bool,
    /// Spread of entering/exiting text units.
    pub drift: DriftOptions,
    /// Wrapper element and pass-through attributes.
    #[schemars(skip)]
    pub presentation: PresentationOptions,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            variant: Variant::Text,
            animation: None,
            stagger: 0.02,
            initial: false,
            drift: DriftOptions::default(),
            presentation: PresentationOptions::default(),
        }
    }
}

impl Options {
    /// Default options for a number label.
    #[must_use]
    pub fn number() -> Self {
        Self {
            variant: Variant::Number,
            ..Self::default()
        }
    }

    /// The preset in effect: the explicit one, else the variant's default.
    #[must_use]
    pub fn preset(&self) -> AnimationPreset {
        self.animation
            .unwrap_or_else(|| AnimationPreset::for_variant(self.variant))
    }

    /// Timing handed to the engine with every frame.
    #[must_use]
    pub fn transition(&self) -> TransitionSpec {
        self.preset().spec()
    }

    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CalligraphError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CalligraphError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CalligraphError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CalligraphError::Io)?;
        }
        std::fs::write(path, content).map_err(CalligraphError::Io)
    }

    /// Load the preset `name` from `dir` (`<dir>/<name>.toml`).
    pub fn load_preset(
        name: &str,
        dir: &Path,
    ) -> Result<Self, CalligraphError> {
        let path = dir.join(format!("{name}.toml"));
        match Self::load(&path) {
            Ok(opts) => {
                log::info!("Loaded label preset '{name}'");
                Ok(opts)
            }
            Err(e) => {
                log::error!("Failed to load label preset '{name}': {e}");
                Err(e)
            }
        }
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
