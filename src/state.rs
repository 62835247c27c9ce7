//! Per-instance render state and the update step that replaces it.

use serde::{Deserialize, Serialize};

use crate::{
    align::{align_columns, align_sequences, Direction},
    keys::{assign_keys, ExitingUnit, IdentityKey, KeyAllocator},
    options::Variant,
};

/// The per-update metric each variant animates with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Metric {
    /// Text variant: fraction of units that entered in the last update.
    Drift {
        /// In `[0, 1]`; `0` before the first change.
        change_ratio: f32,
    },
    /// Number variant: which way the value moved in the last update.
    Roll {
        /// `Up` before the first change.
        direction: Direction,
    },
}

impl Metric {
    fn initial(variant: Variant) -> Self {
        match variant {
            Variant::Text => Self::Drift { change_ratio: 0.0 },
            Variant::Number => Self::Roll {
                direction: Direction::Up,
            },
        }
    }

    /// Change ratio, or `1.0` for the number variant (which never scales).
    #[must_use]
    pub const fn change_ratio(&self) -> f32 {
        match self {
            Self::Drift { change_ratio } => *change_ratio,
            Self::Roll { .. } => 1.0,
        }
    }

    /// Roll direction, or `Up` for the text variant.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        match self {
            Self::Drift { .. } => Direction::Up,
            Self::Roll { direction } => *direction,
        }
    }
}

/// Snapshot of what one component instance last rendered.
///
/// Never mutated in place: [`RenderState::advance`] builds the next snapshot
/// and the owner swaps it in.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    variant: Variant,
    text: String,
    units: Vec<char>,
    keys: Vec<IdentityKey>,
    allocator: KeyAllocator,
    metric: Metric,
}

/// Everything one committed update produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Advance {
    /// The replacement snapshot.
    pub state: RenderState,
    /// Per unit of the new text: `true` when it entered in this update.
    pub entering: Vec<bool>,
    /// Units of the previous text that left.
    pub exiting: Vec<ExitingUnit>,
    /// Length of the previous text, for positioning the exiting units.
    pub previous_len: usize,
}

impl RenderState {
    /// State of a first render: keys `0..len`, initial metric.
    #[must_use]
    pub fn new(variant: Variant, text: &str) -> Self {
        let units: Vec<char> = text.chars().collect();
        let (allocator, keys) = KeyAllocator::initial(units.len());
        Self {
            variant,
            text: text.to_owned(),
            units,
            keys,
            allocator,
            metric: Metric::initial(variant),
        }
    }

    /// Which aligner and builder this state uses.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// The last committed text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The last committed text, one entry per unit.
    #[must_use]
    pub fn units(&self) -> &[char] {
        &self.units
    }

    /// One key per unit of [`Self::text`].
    #[must_use]
    pub fn keys(&self) -> &[IdentityKey] {
        &self.keys
    }

    /// Counter value the next fresh key will take.
    #[must_use]
    pub const fn next_id(&self) -> u64 {
        self.allocator.peek()
    }

    /// Metric of the last committed update.
    #[must_use]
    pub const fn metric(&self) -> Metric {
        self.metric
    }

    /// Diff `text` against this snapshot.
    ///
    /// Returns `None` when `text` equals the committed text: nothing is
    /// allocated and the metric is left alone.
    #[must_use]
    pub fn advance(&self, text: &str) -> Option<Advance> {
        if text == self.text {
            return None;
        }

        let units: Vec<char> = text.chars().collect();
        let mut allocator = self.allocator.clone();
        let pairs = match self.variant {
            Variant::Text => align_sequences(&self.units, &units),
            Variant::Number => {
                // Leading columns dropped by a shrinking number still take
                // a key each before the remaining columns are laid out.
                allocator.skip(self.units.len().saturating_sub(units.len()));
                align_columns(&self.units, &units)
            }
        };

        let assignment = assign_keys(
            &self.units,
            &self.keys,
            &pairs,
            units.len(),
            &mut allocator,
        );

        let metric = match self.variant {
            Variant::Text => Metric::Drift {
                change_ratio: assignment.change_ratio(),
            },
            Variant::Number => Metric::Roll {
                direction: Direction::between(&self.text, text),
            },
        };

        log::debug!(
            "{:?} update {:?} -> {:?}: {} matched, {} entering, \
             {} exiting, {:?}",
            self.variant,
            self.text,
            text,
            pairs.len(),
            assignment.fresh_count(),
            assignment.exiting.len(),
            metric,
        );

        Some(Advance {
            state: Self {
                variant: self.variant,
                text: text.to_owned(),
                units,
                keys: assignment.keys,
                allocator,
                metric,
            },
            entering: assignment.entering,
            exiting: assignment.exiting,
            previous_len: self.units.len(),
        })
    }
}
