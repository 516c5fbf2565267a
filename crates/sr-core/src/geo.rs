//! Geographic coordinate type and spherical-earth utilities.
//!
//! `GeoPoint` uses `f32` (single-precision) latitude/longitude.  Grid cells in
//! an ocean routing problem are kilometres apart, so single precision is ample
//! and keeps time slices compact.  Distances and bearings are computed in
//! `f64` internally and returned as `f64` because they feed straight into
//! elapsed-time sums.

/// Mean Earth radius, metres.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Metres per international nautical mile.
pub const METRES_PER_NM: f64 = 1_852.0;

/// A WGS-84 geographic coordinate, latitude first (ISO 6709).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f32,
    pub lon: f32,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f32, lon: f32) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let lat1 = f64::from(self.lat).to_radians();
        let lat2 = f64::from(other.lat).to_radians();
        let d_lat = lat2 - lat1;
        let d_lon = (f64::from(other.lon) - f64::from(self.lon)).to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Haversine distance in nautical miles.
    #[inline]
    pub fn distance_nm(self, other: GeoPoint) -> f64 {
        self.distance_m(other) / METRES_PER_NM
    }

    /// Initial great-circle bearing from `self` to `other`, degrees clockwise
    /// from true north in `[0, 360)`.
    ///
    /// Coincident points return `0.0`.
    pub fn initial_bearing_deg(self, other: GeoPoint) -> f64 {
        let lat1 = f64::from(self.lat).to_radians();
        let lat2 = f64::from(other.lat).to_radians();
        let d_lon = (f64::from(other.lon) - f64::from(self.lon)).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
        if x == 0.0 && y == 0.0 {
            return 0.0;
        }
        y.atan2(x).to_degrees().rem_euclid(360.0)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
