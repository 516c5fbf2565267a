//! Grid queries: nearest cell to a geodesic position, and the Moore
//! neighbourhood of a cell.

use std::collections::HashSet;
use std::hash::BuildHasher;

use sr_core::{GeoPoint, GridCoord};

use crate::TimeSlice;

/// Row/column offsets of the Moore 8-neighbourhood, in expansion order.
///
/// The router's output depends on this order when durations tie, so it is
/// fixed: row offset −1, 0, +1, and within each the column offset −1, 0, +1.
#[rustfmt::skip]
const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Coordinate of the cell whose position is nearest (great-circle) to
/// `position`.
///
/// Exhaustive row-major scan.  On ties the first minimum encountered wins.
/// Returns `None` only for an empty slice.
///
/// This translates continuous start/finish positions into grid coordinates
/// while a problem is being built; the router never calls it.
pub fn closest_point(position: GeoPoint, slice: &TimeSlice) -> Option<GridCoord> {
    let mut best: Option<(GridCoord, f64)> = None;
    for (coord, point) in slice.iter() {
        let d = position.distance_m(point.position);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((coord, d)),
        }
    }
    best.map(|(coord, _)| coord)
}

/// In-bounds Moore neighbours of `coord` that are not in `excluded`.
///
/// The router passes its obstacle set as `excluded`.  Per-path repeat-visit
/// filtering happens later in the router, not here.
pub fn surround<S: BuildHasher>(
    coord:    GridCoord,
    slice:    &TimeSlice,
    excluded: &HashSet<GridCoord, S>,
) -> Vec<GridCoord> {
    MOORE_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| coord.offset(dr, dc))
        .filter(|&n| slice.contains(n) && !excluded.contains(&n))
        .collect()
}
