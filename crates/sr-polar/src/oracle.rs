//! Segment travel-time estimation.
//!
//! # Contract
//!
//! [`PerformanceOracle::segment_time`] must be pure and must return a finite,
//! non-negative number of minutes for any pair of adjacent grid positions.
//! The router's stopping rule relies on durations never decreasing along a
//! path; an oracle that returns a negative time breaks that and is a bug in
//! the oracle.
//!
//! # Default model
//!
//! [`PolarOracle`] steers the great-circle course from origin to destination
//! under the origin cell's conditions:
//!
//! ```text
//! heading = initial bearing origin → destination
//! twa     = heading − wind_from            (folded to 0..180 by the polar)
//! stw     = polar(twa, tws)                speed through water, kn
//! sog     = stw + current · cos(current_to − heading)
//! minutes = distance_nm / max(sog, min_speed_kn) × 60
//! ```
//!
//! The cross-track component of the current is ignored.  The speed floor
//! stands in for tacking or motoring when the course is dead upwind, and
//! keeps every answer finite.

use sr_core::GeoPoint;
use sr_grid::SurfaceParameters;

use crate::PolarTable;

/// Maps conditions and a segment to elapsed minutes.
///
/// Implementations must be `Send + Sync` so one oracle can serve several
/// independent searches running on different threads.
pub trait PerformanceOracle: Send + Sync {
    /// Minutes to sail from `from` to `to` under `origin` conditions.
    fn segment_time(&self, origin: &SurfaceParameters, from: GeoPoint, to: GeoPoint) -> f64;
}

/// Any matching closure is an oracle (handy for synthetic cost models).
impl<F> PerformanceOracle for F
where
    F: Fn(&SurfaceParameters, GeoPoint, GeoPoint) -> f64 + Send + Sync,
{
    fn segment_time(&self, origin: &SurfaceParameters, from: GeoPoint, to: GeoPoint) -> f64 {
        self(origin, from, to)
    }
}

// ── PolarOracle ───────────────────────────────────────────────────────────────

/// Default slowest speed over ground, knots.
pub const DEFAULT_MIN_SPEED_KN: f64 = 0.5;

/// Polar-driven oracle.  Holds the table for the life of a search and never
/// mutates it.
#[derive(Clone, Debug)]
pub struct PolarOracle {
    polar:        PolarTable,
    min_speed_kn: f64,
}

impl PolarOracle {
    pub fn new(polar: PolarTable) -> Self {
        Self { polar, min_speed_kn: DEFAULT_MIN_SPEED_KN }
    }

    /// Override the speed floor.  Non-positive or non-finite values fall
    /// back to [`DEFAULT_MIN_SPEED_KN`].
    pub fn with_min_speed(mut self, knots: f64) -> Self {
        self.min_speed_kn = if knots.is_finite() && knots > 0.0 { knots } else { DEFAULT_MIN_SPEED_KN };
        self
    }

    pub fn polar(&self) -> &PolarTable {
        &self.polar
    }

    /// Speed over ground along `heading_deg`, before the floor is applied.
    pub fn speed_over_ground(&self, origin: &SurfaceParameters, heading_deg: f64) -> f64 {
        let twa = heading_deg - f64::from(origin.wind_from_deg);
        let stw = self.polar.boat_speed(twa, f64::from(origin.wind_speed_kn));
        let drift = f64::from(origin.current_speed_kn)
            * (f64::from(origin.current_to_deg) - heading_deg).to_radians().cos();
        stw + drift
    }
}

impl PerformanceOracle for PolarOracle {
    fn segment_time(&self, origin: &SurfaceParameters, from: GeoPoint, to: GeoPoint) -> f64 {
        let distance_nm = from.distance_nm(to);
        if distance_nm == 0.0 {
            return 0.0;
        }
        let heading = from.initial_bearing_deg(to);
        let sog = self.speed_over_ground(origin, heading);
        let sog = if sog.is_finite() { sog.max(self.min_speed_kn) } else { self.min_speed_kn };
        distance_nm / sog * 60.0
    }
}
