//! The label component: one owned state, frames out, completions in.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::{
    animation::TransitionSpec,
    keys::IdentityKey,
    options::Options,
    state::RenderState,
    transition::{describe, Changeset, RenderDescriptor, TransitionParams},
};

/// Text or number content of a label, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Content(String);

impl Content {
    /// The formatted text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self(text.to_owned())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<f64> for Content {
    /// Formats the way a browser displays a number: `-0` shows as `0` and
    /// magnitudes outside `1e-6..1e21` switch to exponent form (`1e+21`).
    fn from(value: f64) -> Self {
        if value.is_infinite() {
            let sign = if value < 0.0 { "-" } else { "" };
            return Self(format!("{sign}Infinity"));
        }
        if value == 0.0 {
            return Self("0".to_owned());
        }

        let magnitude = value.abs();
        if (1e-6..1e21).contains(&magnitude) || value.is_nan() {
            return Self(value.to_string());
        }
        let scientific = format!("{value:e}");
        match scientific.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => {
                Self(format!("{mantissa}e+{exp}"))
            }
            _ => Self(scientific),
        }
    }
}

macro_rules! content_from_integer {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Content {
            fn from(value: $ty) -> Self {
                Self(value.to_string())
            }
        })*
    };
}

content_from_integer!(i32, i64, u32, u64, usize);

/// Everything the engine needs to render one state of a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// The full text, for accessibility labelling.
    pub label: String,
    /// Wrapper element to mount the units in.
    pub element: String,
    /// Pass-through wrapper attributes.
    pub attributes: BTreeMap<String, String>,
    /// Timing for every unit's animation.
    pub transition: TransitionSpec,
    /// Current units in order, then exiting units.
    pub descriptors: Vec<RenderDescriptor>,
}

impl Frame {
    fn new(
        state: &RenderState,
        options: &Options,
        descriptors: Vec<RenderDescriptor>,
    ) -> Self {
        Self {
            label: state.text().to_owned(),
            element: options.presentation.element.clone(),
            attributes: options.presentation.attributes.clone(),
            transition: options.transition(),
            descriptors,
        }
    }
}

/// Diff `text` against `state` and describe the transition.
///
/// Returns the state to keep and, if `text` differs from the committed
/// text, the descriptors of the update. Identical text returns `state`
/// untouched and `None`.
#[must_use]
pub fn update(
    state: RenderState,
    text: &str,
    params: &TransitionParams,
) -> (RenderState, Option<Vec<RenderDescriptor>>) {
    match state.advance(text) {
        Some(advance) => {
            let descriptors = describe(
                advance.state.variant(),
                &Changeset::from_advance(&advance),
                params,
            );
            (advance.state, Some(descriptors))
        }
        None => (state, None),
    }
}

/// Callback fired when the unit in the final position finishes animating.
pub type CompletionCallback = Box<dyn FnMut()>;

/// One live label.
///
/// Owns its [`RenderState`] and key counter, so any number of labels can
/// run side by side without sharing anything.
pub struct Calligraph {
    options: Options,
    params: TransitionParams,
    state: RenderState,
    frame: Frame,
    on_complete: Option<CompletionCallback>,
}

impl Calligraph {
    /// Mount a label showing `content`.
    ///
    /// The first frame has every unit at rest, or entering when
    /// [`Options::initial`] is set.
    pub fn new(content: impl Into<Content>, options: Options) -> Self {
        let content = content.into();
        let state = RenderState::new(options.variant, content.as_str());
        let params = TransitionParams::from_options(&options);

        let changes = if options.initial {
            Changeset::mount(&state)
        } else {
            Changeset::settled(&state)
        };
        let descriptors = describe(options.variant, &changes, &params);
        let frame = Frame::new(&state, &options, descriptors);

        log::debug!(
            "mounted {:?} label {:?} ({} units, preset {})",
            options.variant,
            state.text(),
            state.units().len(),
            options.preset().name(),
        );

        Self {
            options,
            params,
            state,
            frame,
            on_complete: None,
        }
    }

    /// Set the completion callback.
    #[must_use]
    pub fn with_on_complete(
        mut self,
        callback: impl FnMut() + 'static,
    ) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Replace or clear the completion callback.
    pub fn set_on_complete(&mut self, callback: Option<CompletionCallback>) {
        self.on_complete = callback;
    }

    /// Show `content`.
    ///
    /// Returns the new frame, or `None` when the content is unchanged and
    /// nothing needs re-rendering. Never waits on or cancels animations that
    /// are still playing from earlier frames.
    pub fn set_content(
        &mut self,
        content: impl Into<Content>,
    ) -> Option<&Frame> {
        let content = content.into();
        let advance = self.state.advance(content.as_str())?;

        let descriptors = describe(
            self.options.variant,
            &Changeset::from_advance(&advance),
            &self.params,
        );
        self.frame = Frame::new(&advance.state, &self.options, descriptors);
        self.state = advance.state;
        Some(&self.frame)
    }

    /// The engine reports that unit `key` finished animating.
    ///
    /// Fires the callback when `key` is the final unit of the latest frame
    /// and returns whether it fired. Completions from frames that were
    /// superseded by a faster update arrive late or out of order; they are
    /// dropped.
    pub fn notify_complete(&mut self, key: IdentityKey) -> bool {
        if self.state.keys().last() != Some(&key) {
            log::trace!("ignoring completion of {key}; not the final unit");
            return false;
        }
        match self.on_complete.as_mut() {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// The latest frame.
    #[must_use]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// The committed state.
    #[must_use]
    pub fn state(&self) -> &RenderState {
        &self.state
    }

    /// The options this label was mounted with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}

impl fmt::Debug for Calligraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calligraph")
            .field("options", &self.options)
            .field("state", &self.state)
            .field("on_complete", &self.on_complete.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;
    use crate::{
        align::Direction,
        animation::AnimationPreset,
        options::Variant,
    };

    fn keys(label: &Calligraph) -> Vec<u64> {
        label.state().keys().iter().map(|k| k.get()).collect()
    }

    #[test]
    fn content_formats_like_display_text() {
        assert_eq!(Content::from(42).as_str(), "42");
        assert_eq!(Content::from(-3_i64).as_str(), "-3");
        assert_eq!(Content::from(1.5).as_str(), "1.5");
        assert_eq!(Content::from(2.0).as_str(), "2");
        assert_eq!(Content::from(f64::NEG_INFINITY).as_str(), "-Infinity");
        assert_eq!(Content::from(f64::NAN).as_str(), "NaN");
        assert_eq!(Content::from("hi").to_string(), "hi");
    }

    #[test]
    fn floats_format_like_browser_numbers() {
        assert_eq!(Content::from(-0.0).as_str(), "0");
        assert_eq!(Content::from(0.0).as_str(), "0");
        assert_eq!(Content::from(1e21).as_str(), "1e+21");
        assert_eq!(Content::from(-2.5e22).as_str(), "-2.5e+22");
        assert_eq!(Content::from(1e20).as_str(), "100000000000000000000");
        assert_eq!(Content::from(1.5e-7).as_str(), "1.5e-7");
        assert_eq!(Content::from(1e-7).as_str(), "1e-7");
        assert_eq!(Content::from(0.000_001).as_str(), "0.000001");
    }

    #[test]
    fn mount_is_at_rest_by_default() {
        let label = Calligraph::new("hello", Options::default());
        let frame = label.frame();
        assert_eq!(frame.label, "hello");
        assert_eq!(frame.element, "span");
        assert_eq!(frame.descriptors.len(), 5);
        assert!(frame.descriptors.iter().all(RenderDescriptor::is_persisted));
        assert_eq!(frame.transition, AnimationPreset::Default.spec());
    }

    #[test]
    fn initial_flag_animates_mount() {
        let options = Options {
            initial: true,
            ..Options::number()
        };
        let label = Calligraph::new(7, options);
        assert!(label.frame().descriptors[0].is_entering);
        assert_eq!(label.frame().transition, AnimationPreset::Snappy.spec());
    }

    #[test]
    fn cart_to_chart() {
        let mut label = Calligraph::new("cart", Options::default());
        let frame = label.set_content("chart");
        assert!(frame.is_some_and(|f| f.label == "chart"));
        assert_eq!(keys(&label), vec![0, 4, 1, 2, 3]);
        assert!(
            (label.state().metric().change_ratio() - 0.2).abs() < 1e-6
        );
    }

    #[test]
    fn ninety_nine_to_one_hundred() {
        let mut label = Calligraph::new(99, Options::number());
        assert!(label.set_content(100).is_some());
        assert_eq!(label.state().metric().direction(), Direction::Up);
        assert_eq!(keys(&label), vec![2, 3, 4]);
    }

    #[test]
    fn repeated_content_does_not_rerender() {
        let mut label = Calligraph::new(5, Options::number());
        let before = label.frame().clone();
        assert!(label.set_content(5).is_none());
        assert_eq!(keys(&label), vec![0]);
        assert_eq!(label.state().next_id(), 1);
        assert_eq!(label.frame(), &before);
    }

    #[test]
    fn empty_to_ab() {
        let mut label = Calligraph::new("", Options::default());
        assert!(label.frame().descriptors.is_empty());
        assert!(label.set_content("ab").is_some());
        assert_eq!(keys(&label), vec![0, 1]);
        assert_eq!(label.state().metric().change_ratio(), 1.0);
    }

    #[test]
    fn attributes_pass_through() {
        let mut options = Options::default();
        let _ = options
            .presentation
            .attributes
            .insert("class".to_owned(), "price".to_owned());
        options.presentation.element = "output".to_owned();

        let mut label = Calligraph::new("a", options);
        let frame = label.set_content("b");
        assert!(frame.is_some_and(|f| f.element == "output"
            && f.attributes.get("class").map(String::as_str) == Some("price")));
    }

    #[test]
    fn completion_fires_only_for_latest_final_unit() {
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        let mut label = Calligraph::new("ab", Options::default())
            .with_on_complete(move || counter.set(counter.get() + 1));

        let stale_last = label.state().keys()[1];
        assert!(label.set_content("abc").is_some());
        let last = label.state().keys()[2];

        // The old final unit finishes after the update arrived.
        assert!(!label.notify_complete(stale_last));
        assert!(label.notify_complete(last));
        // Duplicated notifications are tolerated.
        assert!(label.notify_complete(last));
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn completion_without_callback_is_harmless() {
        let mut label = Calligraph::new("x", Options::default());
        let key = label.state().keys()[0];
        assert!(!label.notify_complete(key));

        label.set_on_complete(Some(Box::new(|| {})));
        assert!(label.notify_complete(key));
    }

    #[test]
    fn pure_update_threads_state() {
        let params = TransitionParams::default();
        let state = RenderState::new(Variant::Text, "ab");

        let (state, descriptors) = update(state, "abc", &params);
        assert_eq!(state.text(), "abc");
        assert!(descriptors.is_some_and(|d| d.len() == 3 && d[2].is_entering));

        let (same, nothing) = update(state.clone(), "abc", &params);
        assert!(nothing.is_none());
        assert_eq!(same, state);
    }

    #[test]
    fn labels_do_not_share_counters() {
        let mut a = Calligraph::new("x", Options::default());
        let mut b = Calligraph::new("x", Options::default());
        assert!(a.set_content("y").is_some());
        assert!(a.set_content("z").is_some());
        assert!(b.set_content("y").is_some());
        assert_eq!(keys(&a), vec![2]);
        assert_eq!(keys(&b), vec![1]);
    }
}
