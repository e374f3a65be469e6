//! Integer schematic geometry.
//!
//! Everything read from a schematic or symbol file is an integer in source
//! units. Symbol geometry lives in the symbol's local frame and is mapped
//! into the schematic frame by one of eight orientations (four rotations,
//! optionally mirrored) followed by a translation to the placement point.
//! Note that the schematic's y axis points down.

mod orientation;
mod transform;

pub use orientation::Orientation;
pub use transform::{transform, transform_point, Placement};

use std::fmt;

use serde::Serialize;

/// A point in source units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// The origin, also the degenerate result of an unusable transform.
    pub const ZERO: Point = Point { x: 0, y: 0 };

    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise sum, saturating at the `i32` bounds.
    pub fn offset(self, other: Point) -> Point {
        Point::new(
            self.x.saturating_add(other.x),
            self.y.saturating_add(other.y),
        )
    }

    /// Squared euclidean distance to another point.
    pub fn distance_sq(self, other: Point) -> i64 {
        let dx = self.x as i64 - other.x as i64;
        let dy = self.y as i64 - other.y as i64;
        dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy))
    }

    /// Build points from a flat `x, y, x, y, ...` slice. A trailing odd
    /// value is ignored.
    pub fn from_flat(values: &[i32]) -> Vec<Point> {
        values
            .chunks_exact(2)
            .map(|pair| Point::new(pair[0], pair[1]))
            .collect()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flat() {
        let pts = Point::from_flat(&[1, 2, 3, 4, 5]);
        assert_eq!(pts, vec![Point::new(1, 2), Point::new(3, 4)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(-16, 48).to_string(), "(-16, 48)");
    }
}
