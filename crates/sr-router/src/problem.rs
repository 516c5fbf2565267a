//! The immutable description of one search instance.
//!
//! # Time model
//!
//! `timeframe[k]` describes the environment during
//! `[k * time_interval, (k + 1) * time_interval)` minutes after departure.
//! Past the end of the sequence the timeframe wraps around:
//!
//! ```text
//! slice = floor(round(duration) / round(time_interval)) mod timeframe.len()
//! ```
//!
//! Both roundings are to the nearest integer minute with ties to even.
//!
//! `start_index` is carried as configuration but is **not** applied to slice
//! selection; departure always reads `timeframe[0]`.
//!
//! # Validation
//!
//! [`RoutingProblemBuilder::build`] checks every precondition the router
//! relies on (consistent slice dimensions, in-bounds endpoints that are not
//! obstacles, a usable interval).  The router itself indexes without further
//! checks.

use rustc_hash::FxHashSet;

use sr_core::{GeoPoint, GridCoord};
use sr_grid::{closest_point, TimeSlice};

use crate::{RouteError, RouteResult};

// ── RoutingProblem ────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct RoutingProblem {
    time_interval:       f64,
    /// `round(time_interval)`, cached for slice selection.
    interval_minutes:    f64,
    timeframe:           Vec<TimeSlice>,
    obstacles:           FxHashSet<GridCoord>,
    start_index:         usize,
    start:               GridCoord,
    finish:              GridCoord,
    allow_repeat_visits: bool,
}

impl RoutingProblem {
    /// Minutes each time slice is valid for.
    pub fn time_interval(&self) -> f64 {
        self.time_interval
    }

    pub fn timeframe(&self) -> &[TimeSlice] {
        &self.timeframe
    }

    pub fn obstacles(&self) -> &FxHashSet<GridCoord> {
        &self.obstacles
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn start(&self) -> GridCoord {
        self.start
    }

    pub fn finish(&self) -> GridCoord {
        self.finish
    }

    pub fn allow_repeat_visits(&self) -> bool {
        self.allow_repeat_visits
    }

    /// `(rows, cols)` shared by every slice.
    pub fn dims(&self) -> (u32, u32) {
        self.timeframe[0].dims()
    }

    /// Index of the slice in effect `duration` minutes after departure.
    #[inline]
    pub fn slice_index(&self, duration: f64) -> usize {
        let steps = (duration.round_ties_even() / self.interval_minutes).floor();
        // Durations are non-negative; a NaN or negative value from a broken
        // oracle saturates to slice 0 rather than indexing out of range.
        (steps as u64 % self.timeframe.len() as u64) as usize
    }

    /// The slice in effect `duration` minutes after departure.
    #[inline]
    pub fn active_slice(&self, duration: f64) -> &TimeSlice {
        &self.timeframe[self.slice_index(duration)]
    }
}

// ── RoutingProblemBuilder ─────────────────────────────────────────────────────

/// An endpoint given either as a cell or as a position to snap.
#[derive(Copy, Clone, Debug)]
enum Endpoint {
    Cell(GridCoord),
    Position(GeoPoint),
}

/// Assemble and validate a [`RoutingProblem`].
///
/// Endpoints given as positions are snapped to the nearest cell of slice 0
/// with [`closest_point`].
///
/// # Example
///
/// ```
/// use sr_core::{GeoPoint, GridCoord};
/// use sr_grid::SyntheticWeather;
/// use sr_router::RoutingProblemBuilder;
///
/// let weather = SyntheticWeather::uniform(4, 4, GeoPoint::new(40.0, -10.0), 0.25, 270.0, 12.0);
/// let problem = RoutingProblemBuilder::new(weather.timeframe(2), 30.0)
///     .start(GridCoord::new(0, 0))
///     .finish_position(GeoPoint::new(40.74, -9.26))
///     .obstacle(GridCoord::new(1, 1))
///     .build()
///     .unwrap();
/// assert_eq!(problem.finish(), GridCoord::new(3, 3));
/// ```
pub struct RoutingProblemBuilder {
    timeframe:           Vec<TimeSlice>,
    time_interval:       f64,
    obstacles:           FxHashSet<GridCoord>,
    start_index:         usize,
    start:               Option<Endpoint>,
    finish:              Option<Endpoint>,
    allow_repeat_visits: bool,
}

impl RoutingProblemBuilder {
    /// Start a problem over `timeframe`, each slice lasting `time_interval`
    /// minutes.  Repeat visits are disallowed unless enabled.
    pub fn new(timeframe: Vec<TimeSlice>, time_interval: f64) -> Self {
        Self {
            timeframe,
            time_interval,
            obstacles: FxHashSet::default(),
            start_index: 0,
            start: None,
            finish: None,
            allow_repeat_visits: false,
        }
    }

    pub fn start(mut self, coord: GridCoord) -> Self {
        self.start = Some(Endpoint::Cell(coord));
        self
    }

    pub fn finish(mut self, coord: GridCoord) -> Self {
        self.finish = Some(Endpoint::Cell(coord));
        self
    }

    pub fn start_position(mut self, pos: GeoPoint) -> Self {
        self.start = Some(Endpoint::Position(pos));
        self
    }

    pub fn finish_position(mut self, pos: GeoPoint) -> Self {
        self.finish = Some(Endpoint::Position(pos));
        self
    }

    pub fn obstacle(mut self, coord: GridCoord) -> Self {
        self.obstacles.insert(coord);
        self
    }

    pub fn obstacles<I: IntoIterator<Item = GridCoord>>(mut self, coords: I) -> Self {
        self.obstacles.extend(coords);
        self
    }

    pub fn start_index(mut self, index: usize) -> Self {
        self.start_index = index;
        self
    }

    pub fn allow_repeat_visits(mut self, allow: bool) -> Self {
        self.allow_repeat_visits = allow;
        self
    }

    /// Validate and produce the problem.
    pub fn build(self) -> RouteResult<RoutingProblem> {
        let first = self.timeframe.first().ok_or(RouteError::EmptyTimeframe)?;
        let expected = first.dims();
        if let Some((index, slice)) = self
            .timeframe
            .iter()
            .enumerate()
            .find(|(_, s)| s.dims() != expected)
        {
            return Err(RouteError::SliceDims { index, expected, found: slice.dims() });
        }

        let interval_minutes = self.time_interval.round_ties_even();
        if !self.time_interval.is_finite() || interval_minutes < 1.0 {
            return Err(RouteError::InvalidInterval(self.time_interval));
        }

        let start = resolve("start", self.start, first)?;
        let finish = resolve("finish", self.finish, first)?;
        for (what, coord) in [("start", start), ("finish", finish)] {
            if !first.contains(coord) {
                return Err(RouteError::OutOfBounds { what, coord });
            }
            if self.obstacles.contains(&coord) {
                return Err(RouteError::Blocked { what, coord });
            }
        }

        Ok(RoutingProblem {
            time_interval: self.time_interval,
            interval_minutes,
            timeframe: self.timeframe,
            obstacles: self.obstacles,
            start_index: self.start_index,
            start,
            finish,
            allow_repeat_visits: self.allow_repeat_visits,
        })
    }
}

fn resolve(what: &'static str, endpoint: Option<Endpoint>, slice: &TimeSlice) -> RouteResult<GridCoord> {
    match endpoint.ok_or(RouteError::MissingEndpoint(what))? {
        Endpoint::Cell(c) => Ok(c),
        Endpoint::Position(p) => closest_point(p, slice).ok_or(RouteError::MissingEndpoint(what)),
    }
}
