//! Aligners that pair units of the previous text with units of the new one.
//!
//! Both aligners produce the same output shape, a list of
//! [`AlignmentPair`]s, so the key registry does not care which one ran.

mod column;
mod direction;
mod lcs;

pub use column::{align_columns, padded_columns, Column};
pub use direction::{parse_magnitude, Direction};
pub use lcs::{align_sequences, LARGE_TABLE_CELLS};

use serde::{Deserialize, Serialize};

/// One matched unit: `old[old_index] == new[new_index]`.
///
/// Within one alignment both index streams are strictly increasing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct AlignmentPair {
    /// Index into the previous sequence.
    pub old_index: usize,
    /// Index into the new sequence.
    pub new_index: usize,
}

impl AlignmentPair {
    /// Pair `old_index` with `new_index`.
    #[must_use]
    pub const fn new(old_index: usize, new_index: usize) -> Self {
        Self {
            old_index,
            new_index,
        }
    }
}

/// Whether `pairs` is a valid alignment of `old` against `new`: in bounds,
/// equal in content, and strictly increasing in both dimensions.
#[must_use]
pub fn is_valid_alignment<T: PartialEq>(
    pairs: &[AlignmentPair],
    old: &[T],
    new: &[T],
) -> bool {
    let in_bounds_and_equal = pairs.iter().all(|p| {
        p.old_index < old.len()
            && p.new_index < new.len()
            && old[p.old_index] == new[p.new_index]
    });
    let increasing = pairs.windows(2).all(|w| {
        w[0].old_index < w[1].old_index && w[0].new_index < w[1].new_index
    });
    in_bounds_and_equal && increasing
}
