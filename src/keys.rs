//! Identity keys and the registry that carries them across updates.
//!
//! A key is what the animation engine uses to recognise "the same" unit
//! between two frames. Keys follow the alignment, never the content: two
//! equal characters in different structural slots get different keys.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::align::AlignmentPair;

/// Opaque identity of one rendered unit.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct IdentityKey(u64);

impl IdentityKey {
    /// Raw counter value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "k{}", self.0)
    }
}

/// Strictly increasing key counter owned by one component instance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyAllocator {
    next_id: u64,
}

impl KeyAllocator {
    /// Allocator whose first key will be `next_id`.
    #[must_use]
    pub const fn starting_at(next_id: u64) -> Self {
        Self { next_id }
    }

    /// Value the next allocation will return.
    #[must_use]
    pub const fn peek(&self) -> u64 {
        self.next_id
    }

    /// Hand out a key that has never been handed out before.
    pub fn allocate(&mut self) -> IdentityKey {
        let key = IdentityKey(self.next_id);
        self.next_id += 1;
        key
    }

    /// Use up `count` keys without handing them out.
    pub fn skip(&mut self, count: usize) {
        self.next_id += count as u64;
    }

    /// Keys `0..len` for a first render, leaving the counter at `len`.
    #[must_use]
    pub fn initial(len: usize) -> (Self, Vec<IdentityKey>) {
        let mut allocator = Self::default();
        let keys = (0..len).map(|_| allocator.allocate()).collect();
        (allocator, keys)
    }
}

/// A unit of the previous text whose key was not carried forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitingUnit {
    /// Key the unit was rendered under.
    pub key: IdentityKey,
    /// The unit itself.
    pub content: char,
    /// Its index in the previous text.
    pub index: usize,
}

/// Result of mapping an alignment onto keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAssignment {
    /// One key per unit of the new text.
    pub keys: Vec<IdentityKey>,
    /// Per unit of the new text: `true` when its key was freshly allocated.
    pub entering: Vec<bool>,
    /// Units of the previous text that left, in previous-text order.
    pub exiting: Vec<ExitingUnit>,
}

impl KeyAssignment {
    /// Number of freshly allocated keys.
    #[must_use]
    pub fn fresh_count(&self) -> usize {
        self.entering.iter().filter(|&&e| e).count()
    }

    /// Fraction of the new units that entered.
    ///
    /// An empty new text counts as fully changed (`1.0`).
    #[must_use]
    pub fn change_ratio(&self) -> f32 {
        if self.keys.is_empty() {
            1.0
        } else {
            self.fresh_count() as f32 / self.keys.len() as f32
        }
    }
}

/// Carry keys across `pairs` and allocate fresh ones for every other slot.
///
/// For each pair `(i, j)` the new unit `j` inherits `old_keys[i]`; unpaired
/// new units get keys from `allocator` in left-to-right order. Unpaired old
/// units are reported as exiting.
#[must_use]
pub fn assign_keys(
    old_units: &[char],
    old_keys: &[IdentityKey],
    pairs: &[AlignmentPair],
    new_len: usize,
    allocator: &mut KeyAllocator,
) -> KeyAssignment {
    debug_assert_eq!(old_units.len(), old_keys.len());

    let mut carried: Vec<Option<IdentityKey>> = vec![None; new_len];
    let mut kept = vec![false; old_keys.len()];
    for pair in pairs {
        carried[pair.new_index] = Some(old_keys[pair.old_index]);
        kept[pair.old_index] = true;
    }

    let entering: Vec<bool> = carried.iter().map(Option::is_none).collect();
    let keys = carried
        .into_iter()
        .map(|slot| slot.unwrap_or_else(|| allocator.allocate()))
        .collect();

    let exiting = old_units
        .iter()
        .zip(old_keys)
        .enumerate()
        .filter(|(index, _)| !kept[*index])
        .map(|(index, (&content, &key))| ExitingUnit {
            key,
            content,
            index,
        })
        .collect();

    KeyAssignment {
        keys,
        entering,
        exiting,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::align::{align_columns, align_sequences};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn raw(keys: &[IdentityKey]) -> Vec<u64> {
        keys.iter().map(|k| k.get()).collect()
    }

    #[test]
    fn initial_keys_count_from_zero() {
        let (allocator, keys) = KeyAllocator::initial(3);
        assert_eq!(raw(&keys), vec![0, 1, 2]);
        assert_eq!(allocator.peek(), 3);
    }

    #[test]
    fn allocator_never_repeats() {
        let mut allocator = KeyAllocator::starting_at(7);
        let a = allocator.allocate();
        let b = allocator.allocate();
        assert!(b > a);
        assert_eq!(allocator.peek(), 9);
    }

    #[test]
    fn cart_to_chart_allocates_one_key() {
        let (old, new) = (chars("cart"), chars("chart"));
        let (mut allocator, old_keys) = KeyAllocator::initial(old.len());
        let pairs = align_sequences(&old, &new);

        let result =
            assign_keys(&old, &old_keys, &pairs, new.len(), &mut allocator);

        assert_eq!(raw(&result.keys), vec![0, 4, 1, 2, 3]);
        assert_eq!(result.entering, vec![false, true, false, false, false]);
        assert!(result.exiting.is_empty());
        assert_eq!(result.fresh_count(), 1);
        assert!((result.change_ratio() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn empty_to_text_is_fully_fresh() {
        let mut allocator = KeyAllocator::default();
        let result = assign_keys(&[], &[], &[], 2, &mut allocator);
        assert_eq!(raw(&result.keys), vec![0, 1]);
        assert_eq!(result.change_ratio(), 1.0);
    }

    #[test]
    fn text_to_empty_exits_everything() {
        let old = chars("ok");
        let (mut allocator, old_keys) = KeyAllocator::initial(2);
        let result = assign_keys(&old, &old_keys, &[], 0, &mut allocator);
        assert!(result.keys.is_empty());
        assert_eq!(result.change_ratio(), 1.0);
        assert_eq!(result.exiting.len(), 2);
        assert_eq!(result.exiting[1].content, 'k');
        assert_eq!(result.exiting[1].index, 1);
    }

    #[test]
    fn equal_content_in_new_slot_gets_new_key() {
        // "ab" -> "ba": `a` is carried, the new `b` is a different unit.
        let (old, new) = (chars("ab"), chars("ba"));
        let (mut allocator, old_keys) = KeyAllocator::initial(2);
        let pairs = align_sequences(&old, &new);
        let result =
            assign_keys(&old, &old_keys, &pairs, new.len(), &mut allocator);

        assert_eq!(raw(&result.keys), vec![2, 0]);
        assert_eq!(result.exiting.len(), 1);
        assert_eq!(result.exiting[0].key.get(), 1);
    }

    #[test]
    fn one_changed_column_allocates_one_key_in_place() {
        let (old, new) = (chars("1234"), chars("1284"));
        let (mut allocator, old_keys) = KeyAllocator::initial(4);
        let pairs = align_columns(&old, &new);
        let result =
            assign_keys(&old, &old_keys, &pairs, new.len(), &mut allocator);

        assert_eq!(raw(&result.keys), vec![0, 1, 4, 3]);
        assert_eq!(result.entering, vec![false, false, true, false]);
    }

    #[test]
    fn skipped_keys_are_never_handed_out() {
        let mut allocator = KeyAllocator::starting_at(5);
        allocator.skip(2);
        assert_eq!(allocator.allocate().get(), 7);
        allocator.skip(0);
        assert_eq!(allocator.peek(), 8);
    }

    #[test]
    fn display_is_prefixed() {
        assert_eq!(KeyAllocator::starting_at(12).allocate().to_string(), "k12");
    }

    proptest! {
        #[test]
        fn one_differing_column_gets_the_only_fresh_key(
            digits in "[0-9]{1,8}",
            column in any::<prop::sample::Index>(),
            bump in 1_u32..10,
        ) {
            let old = chars(&digits);
            let at = column.index(old.len());
            let mut new = old.clone();
            let digit = old[at].to_digit(10).unwrap_or(0);
            new[at] = char::from_digit((digit + bump) % 10, 10).unwrap_or('0');

            let (mut allocator, old_keys) = KeyAllocator::initial(old.len());
            let pairs = align_columns(&old, &new);
            let result =
                assign_keys(&old, &old_keys, &pairs, new.len(), &mut allocator);

            prop_assert_eq!(result.fresh_count(), 1);
            prop_assert!(result.entering[at]);
            prop_assert_eq!(result.keys[at].get(), old.len() as u64);
            for (i, key) in result.keys.iter().enumerate() {
                if i != at {
                    prop_assert_eq!(*key, old_keys[i]);
                }
            }
            prop_assert_eq!(result.exiting.len(), 1);
            prop_assert_eq!(result.exiting[0].index, at);
        }
    }
}
