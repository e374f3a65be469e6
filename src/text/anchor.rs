//! Anchor resolution and pin label offsets.

use crate::geometry::{Orientation, Point};

use super::tables::{
    HORIZONTAL, HORIZONTAL_MULTILINE, ROTATION, ROTATION_MULTILINE, VERTICAL, VERTICAL_MULTILINE,
};
use super::{Alignment, TextAnchor};

/// Resolve an alignment intent under a symbol orientation.
///
/// Total over its domain: every combination has a table entry.
pub fn resolve(alignment: Alignment, orientation: Orientation, multiline: bool) -> TextAnchor {
    let (row, col) = (alignment.index(), orientation.index());
    if multiline {
        TextAnchor {
            horizontal: HORIZONTAL_MULTILINE[row][col],
            vertical: VERTICAL_MULTILINE[row][col],
            rotation: ROTATION_MULTILINE[row][col],
        }
    } else {
        TextAnchor {
            horizontal: HORIZONTAL[row][col],
            vertical: VERTICAL[row][col],
            rotation: ROTATION[row][col],
        }
    }
}

/// Push a pin label `offset` units away from its pin so it clears the
/// pin stub.
///
/// Orientations pair up into four families that move the label along the
/// same axis. Center-type alignments, `VTop` and `VBottom` are left alone.
pub fn offset_correct(
    p: Point,
    orientation: Orientation,
    alignment: Alignment,
    offset: i32,
) -> Point {
    use Alignment::*;
    use Orientation::*;

    let neg = offset.saturating_neg();
    let (dx, dy) = match (orientation, alignment) {
        (R0 | M180, Right) => (neg, 0),
        (R0 | M180, Left) => (offset, 0),
        (R0 | M180, Top) => (0, offset),
        (R0 | M180, Bottom) => (0, neg),
        (R0 | M180, VRight) => (0, offset),
        (R0 | M180, VLeft) => (0, neg),

        (R90 | M90, Right) => (0, neg),
        (R90 | M90, Left) => (0, offset),
        (R90 | M90, Top) => (offset, 0),
        (R90 | M90, Bottom) => (neg, 0),
        (R90 | M90, VRight) => (0, offset),
        (R90 | M90, VLeft) => (0, neg),

        (R270 | M270, Right) => (0, offset),
        (R270 | M270, Left) => (0, neg),
        (R270 | M270, Top) => (neg, 0),
        (R270 | M270, Bottom) => (offset, 0),
        (R270 | M270, VRight) => (0, offset),
        (R270 | M270, VLeft) => (0, neg),

        (R180 | M0, Right) => (offset, 0),
        (R180 | M0, Left) => (neg, 0),
        (R180 | M0, Top) => (0, neg),
        (R180 | M0, Bottom) => (0, offset),
        (R180 | M0, VRight) => (0, neg),
        (R180 | M0, VLeft) => (0, offset),

        (_, Center | VCenter | VTop | VBottom) => (0, 0),
    };
    p.offset(Point::new(dx, dy))
}
