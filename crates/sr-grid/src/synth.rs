//! Synthetic weather: a regular lat/lon grid whose wind direction is chosen
//! by longitude band and whose wind speed oscillates from one time slice to
//! the next.
//!
//! Every slice is generated in full and returned by value, so a timeframe is
//! fixed before any search starts.  Used by the `crossing` driver and by the
//! router's scenario tests.
//!
//! # Geometry
//!
//! ```text
//! lat(row) = origin.lat + row * spacing_deg
//! lon(col) = origin.lon + col * spacing_deg
//! ```
//!
//! # Wind speed over time
//!
//! ```text
//! tws(k) = base_wind_kn + gust_amplitude_kn * sin(2π k / gust_period_slices)
//! ```
//!
//! clamped at zero.  A `gust_period_slices` of 0 disables the oscillation.

use std::f32::consts::TAU;

use sr_core::{GeoPoint, GridCoord};

use crate::{GridPoint, SurfaceParameters, TimeSlice};

/// Wind direction for every column whose longitude is `>= min_lon`, up to the
/// next sector.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindSector {
    pub min_lon:       f32,
    pub wind_from_deg: f32,
}

/// Parameters of a synthetic timeframe.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyntheticWeather {
    pub rows:               u32,
    pub cols:               u32,
    /// Position of cell `(0, 0)`.
    pub origin:             GeoPoint,
    pub spacing_deg:        f32,
    /// Sorted by ascending `min_lon`.  Columns west of the first sector use
    /// the first sector's direction.
    pub sectors:            Vec<WindSector>,
    pub base_wind_kn:       f32,
    pub gust_amplitude_kn:  f32,
    pub gust_period_slices: u32,
    /// Uniform current; only the `current_*` fields are read.
    pub current:            SurfaceParameters,
}

impl SyntheticWeather {
    /// Uniform wind from `wind_from_deg` over the whole grid, no gusts, no current.
    pub fn uniform(rows: u32, cols: u32, origin: GeoPoint, spacing_deg: f32, wind_from_deg: f32, wind_kn: f32) -> Self {
        Self {
            rows,
            cols,
            origin,
            spacing_deg,
            sectors: vec![WindSector { min_lon: f32::NEG_INFINITY, wind_from_deg }],
            base_wind_kn: wind_kn,
            gust_amplitude_kn: 0.0,
            gust_period_slices: 0,
            current: SurfaceParameters::default(),
        }
    }

    /// Position of `coord` on the lat/lon lattice.
    pub fn position(&self, coord: GridCoord) -> GeoPoint {
        GeoPoint::new(
            self.origin.lat + coord.row as f32 * self.spacing_deg,
            self.origin.lon + coord.col as f32 * self.spacing_deg,
        )
    }

    /// Wind direction for a longitude.
    pub fn wind_from_at(&self, lon: f32) -> f32 {
        let mut dir = self.sectors.first().map_or(0.0, |s| s.wind_from_deg);
        for sector in &self.sectors {
            if lon >= sector.min_lon {
                dir = sector.wind_from_deg;
            }
        }
        dir
    }

    /// True wind speed during slice `k`.
    pub fn wind_speed_at(&self, k: u32) -> f32 {
        if self.gust_period_slices == 0 {
            return self.base_wind_kn.max(0.0);
        }
        let phase = TAU * (k % self.gust_period_slices) as f32 / self.gust_period_slices as f32;
        (self.base_wind_kn + self.gust_amplitude_kn * phase.sin()).max(0.0)
    }

    /// Snapshot for slice index `k`.
    pub fn slice(&self, k: u32) -> TimeSlice {
        let tws = self.wind_speed_at(k);
        TimeSlice::from_fn(self.rows, self.cols, |coord| {
            let position = self.position(coord);
            let surface = SurfaceParameters::wind(self.wind_from_at(position.lon), tws)
                .with_current(self.current.current_to_deg, self.current.current_speed_kn);
            GridPoint::new(position, surface)
        })
    }

    /// `count` consecutive snapshots, slice 0 first.
    pub fn timeframe(&self, count: u32) -> Vec<TimeSlice> {
        (0..count).map(|k| self.slice(k)).collect()
    }
}
