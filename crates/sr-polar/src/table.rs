//! Polar performance table.
//!
//! A polar maps true wind angle (TWA, degrees off the bow) and true wind speed
//! (TWS, knots) to boat speed through the water (knots).  Rows are TWA, columns
//! are TWS:
//!
//! ```text
//!            tws[0]   tws[1]  …
//! twa[0]   speed     speed
//! twa[1]   speed     speed
//! …
//! ```
//!
//! Lookups fold the angle into `[0, 180]` (port and starboard tacks are
//! symmetric) and interpolate bilinearly, clamping to the table edges.

use crate::{PolarError, PolarResult};

/// Deserialised tables are validated exactly like [`PolarTable::new`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPolarTable"))]
pub struct PolarTable {
    twa:    Vec<f64>,
    tws:    Vec<f64>,
    /// Row-major `speeds[i * tws.len() + j]` for `twa[i]`, `tws[j]`.
    speeds: Vec<f64>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPolarTable {
    twa:    Vec<f64>,
    tws:    Vec<f64>,
    speeds: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPolarTable> for PolarTable {
    type Error = PolarError;

    fn try_from(raw: RawPolarTable) -> PolarResult<Self> {
        Self::new(raw.twa, raw.tws, raw.speeds)
    }
}

impl PolarTable {
    /// Validate and build a table.
    ///
    /// Both axes must be non-empty, finite and strictly ascending; `speeds`
    /// must hold `twa.len() * tws.len()` finite, non-negative values.
    pub fn new(twa: Vec<f64>, tws: Vec<f64>, speeds: Vec<f64>) -> PolarResult<Self> {
        check_axis("TWA", &twa)?;
        check_axis("TWS", &tws)?;
        if speeds.len() != twa.len() * tws.len() {
            return Err(PolarError::Parse(format!(
                "expected {} boat speeds ({} TWA × {} TWS), got {}",
                twa.len() * tws.len(),
                twa.len(),
                tws.len(),
                speeds.len()
            )));
        }
        if let Some(bad) = speeds.iter().find(|s| !s.is_finite() || **s < 0.0) {
            return Err(PolarError::Parse(format!("invalid boat speed {bad}")));
        }
        Ok(Self { twa, tws, speeds })
    }

    pub fn twa_axis(&self) -> &[f64] {
        &self.twa
    }

    pub fn tws_axis(&self) -> &[f64] {
        &self.tws
    }

    #[inline]
    fn at(&self, i: usize, j: usize) -> f64 {
        self.speeds[i * self.tws.len() + j]
    }

    /// Boat speed in knots for the given true wind angle and speed.
    pub fn boat_speed(&self, twa_deg: f64, tws_kn: f64) -> f64 {
        let twa = fold_angle(twa_deg);
        let (i0, i1, u) = bracket(&self.twa, twa);
        let (j0, j1, v) = bracket(&self.tws, tws_kn);

        let low  = lerp(self.at(i0, j0), self.at(i0, j1), v);
        let high = lerp(self.at(i1, j0), self.at(i1, j1), v);
        lerp(low, high, u)
    }
}

fn check_axis(name: &str, axis: &[f64]) -> PolarResult<()> {
    if axis.is_empty() {
        return Err(PolarError::Parse(format!("{name} axis is empty")));
    }
    if axis.iter().any(|x| !x.is_finite()) {
        return Err(PolarError::Parse(format!("{name} axis has a non-finite value")));
    }
    if axis.windows(2).any(|w| w[0] >= w[1]) {
        return Err(PolarError::Parse(format!("{name} axis is not strictly ascending")));
    }
    Ok(())
}

/// Map any angle onto `[0, 180]` off the bow.
fn fold_angle(deg: f64) -> f64 {
    let a = deg.rem_euclid(360.0);
    if a > 180.0 { 360.0 - a } else { a }
}

/// Indices of the axis entries around `x` and the interpolation weight.
/// Values outside the axis clamp to the nearest end.
fn bracket(axis: &[f64], x: f64) -> (usize, usize, f64) {
    let last = axis.len() - 1;
    if x.is_nan() || x <= axis[0] {
        return (0, 0, 0.0);
    }
    if x >= axis[last] {
        return (last, last, 0.0);
    }
    // axis[0] < x < axis[last], so partition_point lands in 1..=last.
    let hi = axis.partition_point(|&a| a <= x);
    let lo = hi - 1;
    let t = (x - axis[lo]) / (axis[hi] - axis[lo]);
    (lo, hi, t)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
