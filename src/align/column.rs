//! Right-anchored column alignment for the number variant.
//!
//! Digits are compared by column counted from the least-significant end, so
//! growing a number by one leading digit ("99" -> "100") leaves the lower
//! columns where they were. Unlike the sequence aligner this never re-matches
//! a unit that moved to another column.

use super::AlignmentPair;

/// One padded column: the unit at this position in each text, or `None` for
/// the left padding of the shorter one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column<T> {
    /// Previous unit and its index in the previous text.
    pub old: Option<(usize, T)>,
    /// New unit and its index in the new text.
    pub new: Option<(usize, T)>,
}

impl<T: PartialEq> Column<T> {
    /// The pair this column contributes, if both sides hold the same unit.
    #[must_use]
    pub fn pair(&self) -> Option<AlignmentPair> {
        match (&self.old, &self.new) {
            (Some((i, a)), Some((j, b))) if a == b => {
                Some(AlignmentPair::new(*i, *j))
            }
            _ => None,
        }
    }
}

/// Left-pad both texts to the longer length and zip them column by column.
#[must_use]
pub fn padded_columns<T: Copy>(old: &[T], new: &[T]) -> Vec<Column<T>> {
    let width = old.len().max(new.len());
    let old_pad = width - old.len();
    let new_pad = width - new.len();

    (0..width)
        .map(|col| Column {
            old: col.checked_sub(old_pad).map(|i| (i, old[i])),
            new: col.checked_sub(new_pad).map(|j| (j, new[j])),
        })
        .collect()
}

/// Align `old` against `new` column by column from the right.
///
/// A column contributes a pair only when both texts have a real unit there
/// and the units are equal. Columns that exist only in the padding never
/// pair, which is what hands a fresh key to every new leading digit.
#[must_use]
pub fn align_columns<T: Copy + PartialEq>(
    old: &[T],
    new: &[T],
) -> Vec<AlignmentPair> {
    padded_columns(old, new)
        .iter()
        .filter_map(Column::pair)
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::align::is_valid_alignment;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn growing_a_digit_pairs_nothing() {
        // "_99" vs "100": pad vs 1, 9 vs 0, 9 vs 0.
        assert!(align_columns(&chars("99"), &chars("100")).is_empty());
    }

    #[test]
    fn lower_columns_survive_a_new_leading_digit() {
        let result = align_columns(&chars("42"), &chars("142"));
        assert_eq!(
            result,
            vec![AlignmentPair::new(0, 1), AlignmentPair::new(1, 2)]
        );
    }

    #[test]
    fn shrinking_keeps_right_anchored_columns() {
        let result = align_columns(&chars("1,205"), &chars("205"));
        assert_eq!(
            result,
            vec![
                AlignmentPair::new(2, 0),
                AlignmentPair::new(3, 1),
                AlignmentPair::new(4, 2),
            ]
        );
    }

    #[test]
    fn shifted_digit_is_not_rematched() {
        // Sequence alignment would pair the `1`s; columns do not.
        assert!(align_columns(&chars("12"), &chars("21")).is_empty());
    }

    #[test]
    fn padded_columns_mark_padding_as_none() {
        let cols = padded_columns(&chars("9"), &chars("10"));
        assert_eq!(cols.len(), 2);
        assert_eq!(cols[0].old, None);
        assert_eq!(cols[0].new, Some((0, '1')));
        assert_eq!(cols[1].old, Some((0, '9')));
        assert_eq!(cols[1].new, Some((1, '0')));
    }

    #[test]
    fn empty_inputs() {
        assert!(padded_columns::<char>(&[], &[]).is_empty());
        assert!(align_columns(&chars(""), &chars("12")).is_empty());
    }

    proptest! {
        #[test]
        fn column_pairs_are_valid_and_uncrossed(
            old in "[0-9.,]{0,8}",
            new in "[0-9.,]{0,8}",
        ) {
            let (old, new) = (chars(&old), chars(&new));
            let result = align_columns(&old, &new);
            prop_assert!(is_valid_alignment(&result, &old, &new));
            // Right-anchored: distance from the end is preserved.
            for p in &result {
                prop_assert_eq!(
                    old.len() - p.old_index,
                    new.len() - p.new_index
                );
            }
        }
    }
}
