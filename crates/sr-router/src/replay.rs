//! Re-time a given cell sequence under a problem's time model.
//!
//! Used to print a leg-by-leg breakdown of a route and to check that a
//! route's duration is the sum of its legs.  Leg timing is exactly the
//! router's: slice chosen from elapsed time at the start of the leg, origin
//! cell conditions, oracle minutes.

use sr_core::GridCoord;
use sr_polar::PerformanceOracle;

use crate::{RouteError, RouteResult, RoutingProblem, TimedPath};

/// One timed leg of a route.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    pub from:    GridCoord,
    pub to:      GridCoord,
    /// Slice in effect when the leg started.
    pub slice:   usize,
    pub minutes: f64,
    /// Elapsed minutes at the end of the leg.
    pub elapsed: f64,
}

/// Time each leg of `cells` from departure.
///
/// Fails if `cells` is empty, leaves the grid, enters an obstacle, or takes a
/// step that is not a king move.  Repeat visits are not checked here.
pub fn replay(
    problem: &RoutingProblem,
    oracle:  &dyn PerformanceOracle,
    cells:   &[GridCoord],
) -> RouteResult<(TimedPath, Vec<Leg>)> {
    let (&first, rest) = cells.split_first().ok_or(RouteError::EmptyPath)?;
    check_cell(problem, first)?;

    let mut timed = TimedPath::at(first);
    let mut legs = Vec::with_capacity(rest.len());
    let mut from = first;

    for &to in rest {
        check_cell(problem, to)?;
        if !from.is_adjacent(to) {
            return Err(RouteError::NotAdjacent { from, to });
        }
        let slice_index = problem.slice_index(timed.duration);
        let slice = &problem.timeframe()[slice_index];
        let (a, b) = (slice.get(from), slice.get(to));
        let minutes = oracle.segment_time(&a.surface, a.position, b.position);

        timed = timed.extended(to, minutes);
        legs.push(Leg { from, to, slice: slice_index, minutes, elapsed: timed.duration });
        from = to;
    }

    Ok((timed, legs))
}

fn check_cell(problem: &RoutingProblem, coord: GridCoord) -> RouteResult<()> {
    let (rows, cols) = problem.dims();
    if coord.row >= rows || coord.col >= cols {
        return Err(RouteError::OutOfBounds { what: "cell", coord });
    }
    if problem.obstacles().contains(&coord) {
        return Err(RouteError::Blocked { what: "cell", coord });
    }
    Ok(())
}
