//! Wire junction detection.

use std::collections::BTreeMap;

use crate::geometry::Point;

use super::document::Wire;

/// Points where at least this many wire endpoints meet.
pub const JUNCTION_MIN_ENDPOINTS: usize = 3;

/// Find every point shared by three or more wire endpoints.
///
/// Endpoints are grouped by x first, and only crowded columns are counted
/// by y. A wire ending on the interior of another wire is not a junction
/// here. Results are sorted by x, then y.
pub fn find_junctions(wires: &[Wire]) -> Vec<Point> {
    let mut columns: BTreeMap<i32, Vec<i32>> = BTreeMap::new();
    for wire in wires {
        for p in [wire.start, wire.end] {
            columns.entry(p.x).or_default().push(p.y);
        }
    }

    let mut junctions = Vec::new();
    for (x, ys) in columns {
        if ys.len() < JUNCTION_MIN_ENDPOINTS {
            continue;
        }
        let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
        for y in ys {
            *counts.entry(y).or_default() += 1;
        }
        junctions.extend(
            counts
                .into_iter()
                .filter(|&(_, n)| n >= JUNCTION_MIN_ENDPOINTS)
                .map(|(y, _)| Point::new(x, y)),
        );
    }
    junctions
}
