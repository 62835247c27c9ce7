//! Drift parameters for the text variant.
//!
//! Units spread symmetrically around the label's horizontal centre: the
//! first unit drifts by `-drift/2`, the last by `+drift/2`, both scaled by
//! the update's change ratio.

use super::{Changeset, Keyframe, RenderDescriptor, TransitionParams};

/// Position of unit `index` along a label of `len` units, `0.0..=1.0`.
#[must_use]
pub fn progress(index: usize, len: usize) -> f32 {
    if len <= 1 {
        0.0
    } else {
        index as f32 / (len - 1) as f32
    }
}

/// `(offset_x, offset_y)` of unit `index` in a label of `len` units.
#[must_use]
pub fn drift_offset(
    index: usize,
    len: usize,
    change_ratio: f32,
    params: &TransitionParams,
) -> (f32, f32) {
    let centered = progress(index, len) - 0.5;
    (
        centered * params.drift_x * change_ratio,
        centered * params.drift_y * change_ratio,
    )
}

pub(super) fn describe(
    changes: &Changeset<'_>,
    params: &TransitionParams,
) -> Vec<RenderDescriptor> {
    let len = changes.units.len();
    let ratio = changes.metric.change_ratio();

    let present = changes
        .units
        .iter()
        .zip(changes.keys)
        .enumerate()
        .map(|(i, (&content, &key))| {
            let (offset_x, offset_y) = drift_offset(i, len, ratio, params);
            let pose = Keyframe::faded_at(offset_x, offset_y);
            RenderDescriptor {
                key,
                content,
                offset_x,
                offset_y,
                delay: progress(i, len) * params.stagger,
                is_entering: changes.entering[i],
                is_exiting: false,
                is_last: i + 1 == len,
                column: None,
                enter_from: pose,
                exit_to: pose,
            }
        });

    let leaving = changes.exiting.iter().map(|unit| {
        let (offset_x, offset_y) =
            drift_offset(unit.index, changes.previous_len, ratio, params);
        let pose = Keyframe::faded_at(offset_x, offset_y);
        RenderDescriptor {
            key: unit.key,
            content: unit.content,
            offset_x,
            offset_y,
            delay: progress(unit.index, changes.previous_len) * params.stagger,
            is_entering: false,
            is_exiting: true,
            is_last: false,
            column: None,
            enter_from: pose,
            exit_to: pose,
        }
    });

    present.chain(leaving).collect()
}
