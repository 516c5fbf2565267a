//! Complete, serialisable routing scenarios.
//!
//! A [`Scenario`] bundles synthetic weather, obstacles, endpoints and router
//! settings.  Applications load one from a JSON file (with the `serde`
//! feature) or start from [`Scenario::reference_crossing`].

use sr_core::{GeoPoint, GridCoord};
use sr_grid::{SurfaceParameters, SyntheticWeather, WindSector};

use crate::{Pruning, RouteResult, RouterConfig, RoutingProblem, RoutingProblemBuilder};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub weather:             SyntheticWeather,
    /// Number of time slices generated from `weather`.
    pub slices:              u32,
    /// Minutes per slice.
    pub time_interval:       f64,
    pub obstacles:           Vec<GridCoord>,
    pub start:               GridCoord,
    pub finish:              GridCoord,
    #[cfg_attr(feature = "serde", serde(default))]
    pub start_index:         usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub allow_repeat_visits: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub router:              RouterConfig,
}

impl Scenario {
    /// Generate the timeframe and validate the problem.
    pub fn build_problem(&self) -> RouteResult<RoutingProblem> {
        RoutingProblemBuilder::new(self.weather.timeframe(self.slices), self.time_interval)
            .obstacles(self.obstacles.iter().copied())
            .start(self.start)
            .finish(self.finish)
            .start_index(self.start_index)
            .allow_repeat_visits(self.allow_repeat_visits)
            .build()
    }

    /// A 9×9 crossing, northbound from `(0, 3)` to `(8, 3)`.
    ///
    /// Cells are 0.1° apart from 43.0°N 5.0°E.  The wind is a near-headwind
    /// in the western and central bands and a westerly in the east, and its
    /// speed cycles between 8 and 16 kn over six 10-minute slices.  A reef
    /// blocks the direct line north of the start.
    ///
    /// Router pruning is [`Pruning::CellSlice`]: an exhaustive search over
    /// a 9×9 king graph without dominance pruning does not finish in
    /// reasonable time.  The route found is therefore not proven optimal.
    pub fn reference_crossing() -> Self {
        Self {
            weather: SyntheticWeather {
                rows:               9,
                cols:               9,
                origin:             GeoPoint::new(43.0, 5.0),
                spacing_deg:        0.1,
                sectors:            vec![
                    WindSector { min_lon: 5.0,  wind_from_deg: 10.0 },
                    WindSector { min_lon: 5.25, wind_from_deg: 340.0 },
                    WindSector { min_lon: 5.55, wind_from_deg: 270.0 },
                ],
                base_wind_kn:       12.0,
                gust_amplitude_kn:  4.0,
                gust_period_slices: 6,
                current:            SurfaceParameters::default().with_current(45.0, 0.4),
            },
            slices:              6,
            time_interval:       10.0,
            obstacles:           vec![
                GridCoord::new(2, 2),
                GridCoord::new(2, 3),
                GridCoord::new(2, 4),
                GridCoord::new(5, 1),
                GridCoord::new(5, 2),
                GridCoord::new(6, 5),
            ],
            start:               GridCoord::new(0, 3),
            finish:              GridCoord::new(8, 3),
            start_index:         0,
            allow_repeat_visits: false,
            router:              RouterConfig::default().with_pruning(Pruning::CellSlice),
        }
    }
}
