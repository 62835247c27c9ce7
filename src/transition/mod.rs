//! Turns keys, positions and the update metric into render descriptors.
//!
//! The text builder drifts units sideways around the label's centre; the
//! number builder rolls digits vertically. Both emit the units of the
//! current text first, in order, followed by the exiting units in their
//! previous order.

mod descriptor;
pub mod number;
pub mod text;

pub use descriptor::{Keyframe, RenderDescriptor};

use crate::{
    keys::{ExitingUnit, IdentityKey},
    options::{Options, Variant},
    state::{Advance, Metric, RenderState},
};

/// Numbers the builders need from the options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionParams {
    /// Full horizontal drift span in pixels (text variant).
    pub drift_x: f32,
    /// Full vertical drift span in pixels (text variant).
    pub drift_y: f32,
    /// Seconds of delay per step of the stagger sweep.
    pub stagger: f32,
}

impl TransitionParams {
    /// Pull the builder parameters out of `options`.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self {
            drift_x: options.drift.x,
            drift_y: options.drift.y,
            stagger: options.stagger,
        }
    }
}

impl Default for TransitionParams {
    fn default() -> Self {
        Self::from_options(&Options::default())
    }
}

/// One update's worth of units, seen by the builders.
#[derive(Debug, Clone, PartialEq)]
pub struct Changeset<'a> {
    /// Units of the current text.
    pub units: &'a [char],
    /// One key per current unit.
    pub keys: &'a [IdentityKey],
    /// Per current unit: entered in this update.
    pub entering: Vec<bool>,
    /// Units that left in this update.
    pub exiting: Vec<ExitingUnit>,
    /// Length of the text the exiting units were laid out in.
    pub previous_len: usize,
    /// Change ratio or direction of this update.
    pub metric: Metric,
}

impl<'a> Changeset<'a> {
    /// `state` as it stands, nothing moving in or out.
    #[must_use]
    pub fn settled(state: &'a RenderState) -> Self {
        Self::uniform(state, false)
    }

    /// `state` on first mount with every unit entering.
    #[must_use]
    pub fn mount(state: &'a RenderState) -> Self {
        Self::uniform(state, true)
    }

    /// The changes one committed update made.
    #[must_use]
    pub fn from_advance(advance: &'a Advance) -> Self {
        Self {
            units: advance.state.units(),
            keys: advance.state.keys(),
            entering: advance.entering.clone(),
            exiting: advance.exiting.clone(),
            previous_len: advance.previous_len,
            metric: advance.state.metric(),
        }
    }

    fn uniform(state: &'a RenderState, entering: bool) -> Self {
        Self {
            units: state.units(),
            keys: state.keys(),
            entering: vec![entering; state.units().len()],
            exiting: Vec::new(),
            previous_len: state.units().len(),
            metric: state.metric(),
        }
    }
}

/// Build the descriptors for `changes` with the variant's motion.
#[must_use]
pub fn describe(
    variant: Variant,
    changes: &Changeset<'_>,
    params: &TransitionParams,
) -> Vec<RenderDescriptor> {
    match variant {
        Variant::Text => text::describe(changes, params),
        Variant::Number => number::describe(changes, params),
    }
}
