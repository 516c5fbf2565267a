//! Surface conditions at one grid cell and instant.

/// Wind and current at a point in time.
///
/// The router threads this value through to the performance oracle without
/// looking inside it.
///
/// Direction conventions follow maritime practice:
///
/// | Field            | Convention                                   |
/// |------------------|----------------------------------------------|
/// | `wind_from_deg`  | meteorological: direction wind blows *from* |
/// | `current_to_deg` | oceanographic: direction current sets *to*  |
///
/// Both are degrees clockwise from true north; speeds are knots.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceParameters {
    pub wind_from_deg:    f32,
    pub wind_speed_kn:    f32,
    pub current_to_deg:   f32,
    pub current_speed_kn: f32,
}

impl SurfaceParameters {
    /// Wind only, slack water.
    #[inline]
    pub fn wind(from_deg: f32, speed_kn: f32) -> Self {
        Self {
            wind_from_deg: from_deg,
            wind_speed_kn: speed_kn,
            ..Self::default()
        }
    }

    /// Builder-style setter for the current.
    #[inline]
    pub fn with_current(mut self, to_deg: f32, speed_kn: f32) -> Self {
        self.current_to_deg = to_deg;
        self.current_speed_kn = speed_kn;
        self
    }
}
