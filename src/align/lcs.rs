//! Longest-common-subsequence alignment for the text variant.

use super::AlignmentPair;

/// DP tables above this many cells log a warning before they are built.
///
/// The aligner is quadratic in time and memory and is meant for labels and
/// counters. Callers that accept arbitrary user text should cap the input
/// length themselves; the aligner never refuses work.
pub const LARGE_TABLE_CELLS: usize = 1 << 20;

/// Align `old` against `new` along a longest common subsequence.
///
/// Runs the classic O(m·n) dynamic program, then walks back from `(m, n)`:
/// equal units are matched, otherwise the walk steps toward the predecessor
/// with the larger subsequence length.
///
/// # Tie-break
///
/// When both predecessors are equally long the walk steps the old index if
/// `i >= j` (the remaining old prefix is at least as long as the remaining
/// new prefix) and the new index otherwise. This decides which physical
/// instance of a repeated unit survives:
///
/// - `"aa" -> "a"` keeps the second `a` (the trailing pair matches first).
/// - `"ab" -> "ba"` keeps `a` and re-enters `b`.
///
/// Empty input on either side yields an empty alignment.
#[must_use]
pub fn align_sequences<T: PartialEq>(
    old: &[T],
    new: &[T],
) -> Vec<AlignmentPair> {
    let m = old.len();
    let n = new.len();
    if m == 0 || n == 0 {
        return Vec::new();
    }

    let cells = (m + 1).saturating_mul(n + 1);
    if cells > LARGE_TABLE_CELLS {
        log::warn!(
            "aligning {m}x{n} units ({cells} cells); far longer than a label"
        );
    }

    let table = LcsTable::build(old, new);

    let mut pairs = Vec::with_capacity(table.get(m, n) as usize);
    let (mut i, mut j) = (m, n);
    while i > 0 && j > 0 {
        if old[i - 1] == new[j - 1] {
            pairs.push(AlignmentPair::new(i - 1, j - 1));
            i -= 1;
            j -= 1;
            continue;
        }

        let up = table.get(i - 1, j);
        let left = table.get(i, j - 1);
        if up > left || (up == left && i >= j) {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    pairs.reverse();
    pairs
}

/// Row-major `(m + 1) x (n + 1)` table of common-subsequence lengths.
struct LcsTable {
    cols: usize,
    cells: Vec<u32>,
}

impl LcsTable {
    fn build<T: PartialEq>(old: &[T], new: &[T]) -> Self {
        let cols = new.len() + 1;
        let mut cells = vec![0u32; (old.len() + 1) * cols];

        for i in 1..=old.len() {
            for j in 1..=new.len() {
                let value = if old[i - 1] == new[j - 1] {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    cells[(i - 1) * cols + j].max(cells[i * cols + (j - 1)])
                };
                cells[i * cols + j] = value;
            }
        }

        Self { cols, cells }
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.cols + j]
    }
}
