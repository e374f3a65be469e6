//! Text anchor lookup tables.
//!
//! Rows follow [`Alignment::ALL`](super::Alignment::ALL), columns follow
//! [`Orientation::ALL`](crate::geometry::Orientation::ALL):
//! `R0 R90 R180 R270 M0 M90 M180 M270`. The values are empirical: they match
//! where the schematic editor actually draws each label and cannot be
//! derived from the orientation alone.

use super::{HAlign, VAlign};

const L: HAlign = HAlign::Left;
const C: HAlign = HAlign::Center;
const R: HAlign = HAlign::Right;

const T: VAlign = VAlign::Top;
const M: VAlign = VAlign::Center;
const B: VAlign = VAlign::Bottom;

/// Horizontal anchor.
pub(super) const HORIZONTAL: [[HAlign; 8]; 10] = [
    // Left
    [L, C, R, C, R, C, L, C],
    // Center
    [C, C, C, C, C, C, C, C],
    // Right
    [R, C, L, C, L, C, R, C],
    // Top
    [C, R, C, L, C, L, C, R],
    // Bottom
    [C, L, C, R, C, R, C, L],
    // VLeft
    [C, C, R, R, R, C, L, L],
    // VCenter
    [C, C, C, C, C, C, C, C],
    // VRight
    [C, R, C, L, C, L, C, L],
    // VTop
    [L, C, R, C, R, C, L, C],
    // VBottom
    [R, C, L, C, L, C, R, C],
];

/// Horizontal anchor, for labels containing a line break.
pub(super) const HORIZONTAL_MULTILINE: [[HAlign; 8]; 10] = [
    // Left
    [L, C, R, L, R, C, L, L],
    // Center
    [C, C, C, C, C, C, C, C],
    // Right
    [R, R, R, R, R, R, R, R],
    // Top
    [C, C, C, C, C, C, C, C],
    // Bottom
    [C, C, C, C, C, C, C, C],
    // VLeft
    [C, C, R, L, R, C, L, L],
    // VCenter
    [C, C, C, C, C, C, C, C],
    // VRight
    [C, L, C, L, C, L, C, L],
    // VTop
    [L, C, R, C, R, C, L, C],
    // VBottom
    [L, C, R, C, R, C, L, C],
];

/// Vertical anchor.
pub(super) const VERTICAL: [[VAlign; 8]; 10] = [
    // Left
    [M, T, M, B, M, T, M, B],
    // Center
    [M, M, M, M, M, M, M, M],
    // Right
    [M, B, M, T, M, B, M, T],
    // Top
    [T, M, B, M, T, M, B, M],
    // Bottom
    [B, B, T, M, B, M, T, M],
    // VLeft
    [B, T, M, M, M, T, B, M],
    // VCenter
    [M, M, M, M, M, M, M, M],
    // VRight
    [T, M, B, M, T, M, B, M],
    // VTop
    [M, T, M, B, M, T, M, B],
    // VBottom
    [M, B, M, T, M, B, M, T],
];

/// Vertical anchor, for labels containing a line break.
pub(super) const VERTICAL_MULTILINE: [[VAlign; 8]; 10] = [
    // Left
    [T, T, M, B, T, T, M, M],
    // Center
    [M, M, M, M, M, M, M, M],
    // Right
    [M, B, M, T, M, B, M, T],
    // Top
    [T, T, M, B, M, T, M, B],
    // Bottom
    [B, B, M, T, M, B, M, T],
    // VLeft
    [B, T, M, M, M, T, B, M],
    // VCenter
    [M, M, M, M, M, M, M, M],
    // VRight
    [T, M, B, M, T, M, B, M],
    // VTop
    [M, T, M, B, M, T, M, B],
    // VBottom
    [M, B, M, T, M, B, M, T],
];

/// Rotation in degrees.
pub(super) const ROTATION: [[u16; 8]; 10] = [
    // Left
    [0, 90, 0, 90, 0, 90, 0, 90],
    // Center
    [0, 90, 0, 90, 0, 90, 0, 90],
    // Right
    [0, 90, 0, 90, 0, 90, 0, 90],
    // Top
    [0, 90, 0, 90, 0, 90, 0, 90],
    // Bottom
    [0, 90, 0, 90, 0, 90, 0, 90],
    // VLeft
    [90, 0, 0, 0, 0, 0, 0, 0],
    // VCenter
    [90, 0, 0, 0, 0, 0, 0, 0],
    // VRight
    [90, 0, 90, 0, 90, 0, 90, 0],
    // VTop
    [90, 0, 90, 0, 90, 0, 90, 0],
    // VBottom
    [90, 0, 90, 0, 90, 0, 90, 0],
];

/// Rotation in degrees, for labels containing a line break.
pub(super) const ROTATION_MULTILINE: [[u16; 8]; 10] = [
    // Left
    [0, 90, 0, 0, 0, 90, 0, 90],
    // Center
    [0, 90, 0, 90, 0, 90, 0, 90],
    // Right
    [0, 90, 0, 90, 0, 90, 0, 90],
    // Top
    [0, 0, 0, 0, 0, 0, 0, 0],
    // Bottom
    [0, 90, 0, 90, 0, 90, 0, 90],
    // VLeft
    [90, 0, 0, 0, 0, 0, 0, 0],
    // VCenter
    [90, 0, 0, 0, 0, 0, 0, 0],
    // VRight
    [90, 0, 0, 0, 90, 0, 0, 0],
    // VTop
    [0, 0, 0, 0, 0, 0, 0, 0],
    // VBottom
    [0, 0, 0, 0, 0, 0, 0, 0],
];
