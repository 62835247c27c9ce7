//! Roll parameters for the number variant.
//!
//! Digits slide vertically like an odometer; everything else (separators,
//! currency symbols, decimal points) only fades and shrinks.

use super::{Changeset, Keyframe, RenderDescriptor, TransitionParams};
use crate::align::Direction;

/// Vertical distance, in pixels, a digit travels on enter and exit.
pub const ROLL_DISTANCE: f32 = 8.0;

/// Scale an entering unit starts at and an exiting unit ends at.
pub const ROLL_SCALE: f32 = 0.5;

/// Blur radius an entering unit starts at and an exiting unit ends at.
pub const ROLL_BLUR: f32 = 2.0;

/// Pose a unit enters from: below when rolling up, above when rolling down.
#[must_use]
pub fn enter_pose(content: char, direction: Direction) -> Keyframe {
    rolled(content, direction.sign() * ROLL_DISTANCE)
}

/// Pose a unit exits to: above when rolling up, below when rolling down.
#[must_use]
pub fn exit_pose(content: char, direction: Direction) -> Keyframe {
    rolled(content, -direction.sign() * ROLL_DISTANCE)
}

fn rolled(content: char, y: f32) -> Keyframe {
    Keyframe {
        x: 0.0,
        y: if content.is_ascii_digit() { y } else { 0.0 },
        opacity: 0.0,
        scale: ROLL_SCALE,
        blur: ROLL_BLUR,
    }
}

pub(super) fn describe(
    changes: &Changeset<'_>,
    params: &TransitionParams,
) -> Vec<RenderDescriptor> {
    let len = changes.units.len();
    let direction = changes.metric.direction();

    let present = changes
        .units
        .iter()
        .zip(changes.keys)
        .enumerate()
        .map(|(i, (&content, &key))| {
            let enter_from = enter_pose(content, direction);
            RenderDescriptor {
                key,
                content,
                offset_x: 0.0,
                offset_y: enter_from.y,
                delay: i as f32 * params.stagger,
                is_entering: changes.entering[i],
                is_exiting: false,
                is_last: i + 1 == len,
                column: Some(len - 1 - i),
                enter_from,
                exit_to: exit_pose(content, direction),
            }
        });

    let leaving = changes.exiting.iter().map(|unit| {
        let exit_to = exit_pose(unit.content, direction);
        RenderDescriptor {
            key: unit.key,
            content: unit.content,
            offset_x: 0.0,
            offset_y: exit_to.y,
            delay: unit.index as f32 * params.stagger,
            is_entering: false,
            is_exiting: true,
            is_last: false,
            column: Some(changes.previous_len - 1 - unit.index),
            enter_from: enter_pose(unit.content, direction),
            exit_to,
        }
    });

    present.chain(leaving).collect()
}
