//! Local-to-schematic coordinate mapping.

use tracing::warn;

use super::{Orientation, Point};

/// Map one local point through `orientation` and translate by `position`.
///
/// Results outside the `i32` range saturate at its bounds.
pub fn transform_point(p: Point, position: Point, orientation: Orientation) -> Point {
    let (x, y) = (p.x, p.y);
    let (tx, ty) = match orientation {
        Orientation::R0 => (x, y),
        Orientation::R90 => (y.saturating_neg(), x),
        Orientation::R180 => (x.saturating_neg(), y.saturating_neg()),
        Orientation::R270 => (y, x.saturating_neg()),
        Orientation::M0 => (x.saturating_neg(), y),
        Orientation::M90 => (y, x),
        Orientation::M180 => (x, y.saturating_neg()),
        Orientation::M270 => (y.saturating_neg(), x.saturating_neg()),
    };
    Point::new(tx, ty).offset(position)
}

/// Map a sequence of local points into the schematic frame.
pub fn transform(points: &[Point], position: Point, orientation: Orientation) -> Vec<Point> {
    points
        .iter()
        .map(|&p| transform_point(p, position, orientation))
        .collect()
}

/// Where and how a symbol is placed.
///
/// `orientation` is `None` when the schematic carried a code outside the
/// eight known states. Such a placement maps every point to
/// [`Point::ZERO`] instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub position: Point,
    pub orientation: Option<Orientation>,
}

impl Placement {
    /// Create a placement with a known orientation.
    pub fn new(position: Point, orientation: Orientation) -> Self {
        Self {
            position,
            orientation: Some(orientation),
        }
    }

    /// Create a placement from a raw orientation code.
    pub fn from_code(position: Point, code: &str) -> Self {
        let orientation = Orientation::from_code(code);
        if orientation.is_none() {
            warn!("orientation '{}' not recognized, geometry collapses to origin", code);
        }
        Self {
            position,
            orientation,
        }
    }

    /// Orientation used for text resolution: unknown codes read as `R0`.
    pub fn text_orientation(&self) -> Orientation {
        self.orientation.unwrap_or(Orientation::R0)
    }

    /// Map a local point.
    pub fn apply(&self, p: Point) -> Point {
        match self.orientation {
            Some(o) => transform_point(p, self.position, o),
            None => Point::ZERO,
        }
    }

    /// Map several local points.
    pub fn apply_all(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|&p| self.apply(p)).collect()
    }
}
