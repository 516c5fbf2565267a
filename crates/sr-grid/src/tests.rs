//! Unit tests for sr-grid.
//!
//! All grids are synthetic so the tests need no weather files.

#[cfg(test)]
mod helpers {
    use sr_core::GeoPoint;

    use crate::{SyntheticWeather, TimeSlice};

    /// 3 rows × 4 cols at 1° spacing from (10°N, 20°W), 12 kn northerly.
    pub fn small_slice() -> TimeSlice {
        SyntheticWeather::uniform(3, 4, GeoPoint::new(10.0, -20.0), 1.0, 0.0, 12.0).slice(0)
    }
}

// ── TimeSlice ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod slice {
    use sr_core::{GeoPoint, GridCoord, SrError};

    use crate::{GridPoint, SurfaceParameters, TimeSlice};

    #[test]
    fn dims_and_bounds() {
        let s = super::helpers::small_slice();
        assert_eq!(s.dims(), (3, 4));
        assert!(s.contains(GridCoord::new(2, 3)));
        assert!(!s.contains(GridCoord::new(3, 0)));
        assert!(!s.contains(GridCoord::new(0, 4)));
    }

    #[test]
    fn row_major_positions() {
        let s = super::helpers::small_slice();
        let p = s.get(GridCoord::new(2, 1)).position;
        assert_eq!(p, GeoPoint::new(12.0, -19.0));
    }

    #[test]
    fn iter_visits_every_cell_in_order() {
        let s = super::helpers::small_slice();
        let coords: Vec<_> = s.iter().map(|(c, _)| c).collect();
        assert_eq!(coords.len(), 12);
        assert_eq!(coords[0], GridCoord::new(0, 0));
        assert_eq!(coords[5], GridCoord::new(1, 1));
        assert!(coords.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn try_get_out_of_bounds() {
        let s = super::helpers::small_slice();
        assert!(matches!(s.try_get(GridCoord::new(9, 9)), Err(SrError::OutOfBounds(_))));
    }

    #[test]
    #[should_panic]
    fn get_out_of_bounds_panics() {
        let s = super::helpers::small_slice();
        let _ = s.get(GridCoord::new(3, 0));
    }

    #[test]
    fn from_points_checks_length() {
        let p = GridPoint::new(GeoPoint::new(0.0, 0.0), SurfaceParameters::default());
        assert!(TimeSlice::from_points(2, 2, vec![p; 4]).is_ok());
        assert!(matches!(TimeSlice::from_points(2, 2, vec![p; 3]), Err(SrError::Config(_))));
    }
}

// ── closest_point ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod closest {
    use sr_core::{GeoPoint, GridCoord};

    use crate::{closest_point, TimeSlice};

    #[test]
    fn exact_cell_position() {
        let s = super::helpers::small_slice();
        assert_eq!(closest_point(GeoPoint::new(11.0, -18.0), &s), Some(GridCoord::new(1, 2)));
    }

    #[test]
    fn snaps_off_grid_position() {
        let s = super::helpers::small_slice();
        assert_eq!(closest_point(GeoPoint::new(11.8, -17.1), &s), Some(GridCoord::new(2, 3)));
        // Far outside the box still resolves to the nearest corner.
        assert_eq!(closest_point(GeoPoint::new(0.0, -30.0), &s), Some(GridCoord::new(0, 0)));
    }

    #[test]
    fn tie_goes_to_first_in_row_major_order() {
        // Two cells at the same position: the scan keeps the earlier one.
        let s = TimeSlice::from_fn(1, 3, |c| {
            let lon = if c.col == 2 { 5.0 } else { 0.0 };
            crate::GridPoint::new(GeoPoint::new(0.0, lon), Default::default())
        });
        assert_eq!(closest_point(GeoPoint::new(0.0, 0.1), &s), Some(GridCoord::new(0, 0)));
    }

    #[test]
    fn empty_slice() {
        let s = TimeSlice::from_fn(0, 0, |_| unreachable!());
        assert_eq!(closest_point(GeoPoint::new(0.0, 0.0), &s), None);
    }
}

// ── surround ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod surround {
    use std::collections::HashSet;

    use sr_core::GridCoord;

    use crate::surround;

    fn c(r: u32, col: u32) -> GridCoord {
        GridCoord::new(r, col)
    }

    #[test]
    fn interior_has_eight_in_fixed_order() {
        let s = super::helpers::small_slice();
        let n = surround(c(1, 1), &s, &HashSet::new());
        assert_eq!(
            n,
            vec![c(0, 0), c(0, 1), c(0, 2), c(1, 0), c(1, 2), c(2, 0), c(2, 1), c(2, 2)]
        );
    }

    #[test]
    fn corner_is_clipped() {
        let s = super::helpers::small_slice();
        assert_eq!(surround(c(0, 0), &s, &HashSet::new()), vec![c(0, 1), c(1, 0), c(1, 1)]);
        assert_eq!(surround(c(2, 3), &s, &HashSet::new()), vec![c(1, 2), c(1, 3), c(2, 2)]);
    }

    #[test]
    fn excluded_cells_are_removed() {
        let s = super::helpers::small_slice();
        let excluded: HashSet<_> = [c(0, 1), c(1, 0), c(5, 5)].into_iter().collect();
        assert_eq!(surround(c(0, 0), &s, &excluded), vec![c(1, 1)]);
    }

    #[test]
    fn never_contains_self() {
        let s = super::helpers::small_slice();
        for (coord, _) in s.iter() {
            assert!(!surround(coord, &s, &HashSet::new()).contains(&coord));
        }
    }
}

// ── Synthetic weather ─────────────────────────────────────────────────────────

#[cfg(test)]
mod synth {
    use sr_core::{GeoPoint, GridCoord};

    use crate::{SurfaceParameters, SyntheticWeather, WindSector};

    fn sectored() -> SyntheticWeather {
        SyntheticWeather {
            rows:               3,
            cols:               3,
            origin:             GeoPoint::new(0.0, 0.0),
            spacing_deg:        0.5,
            sectors:            vec![
                WindSector { min_lon: 0.0, wind_from_deg: 270.0 },
                WindSector { min_lon: 0.75, wind_from_deg: 90.0 },
            ],
            base_wind_kn:       10.0,
            gust_amplitude_kn:  4.0,
            gust_period_slices: 4,
            current:            SurfaceParameters::default().with_current(180.0, 1.0),
        }
    }

    #[test]
    fn sector_by_longitude() {
        let w = sectored();
        let s = w.slice(0);
        assert_eq!(s.get(GridCoord::new(0, 0)).surface.wind_from_deg, 270.0);
        assert_eq!(s.get(GridCoord::new(2, 1)).surface.wind_from_deg, 270.0);
        assert_eq!(s.get(GridCoord::new(1, 2)).surface.wind_from_deg, 90.0);
    }

    #[test]
    fn wind_speed_cycles_over_slices() {
        let w = sectored();
        assert!((w.wind_speed_at(0) - 10.0).abs() < 1e-5);
        assert!((w.wind_speed_at(1) - 14.0).abs() < 1e-5);
        assert!((w.wind_speed_at(3) - 6.0).abs() < 1e-5);
        assert!((w.wind_speed_at(5) - w.wind_speed_at(1)).abs() < 1e-5);
    }

    #[test]
    fn timeframe_slices_share_dims_and_positions() {
        let w = sectored();
        let frames = w.timeframe(4);
        assert_eq!(frames.len(), 4);
        for f in &frames {
            assert_eq!(f.dims(), (3, 3));
            assert_eq!(f.get(GridCoord::new(1, 1)).position, frames[0].get(GridCoord::new(1, 1)).position);
            assert_eq!(f.get(GridCoord::new(1, 1)).surface.current_to_deg, 180.0);
        }
        assert_ne!(frames[0], frames[1]);
    }

    #[test]
    fn speed_never_negative() {
        let mut w = sectored();
        w.gust_amplitude_kn = 50.0;
        assert!((0..8).all(|k| w.wind_speed_at(k) >= 0.0));
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "serde"))]
mod serde_json_slices {
    use crate::TimeSlice;

    #[test]
    fn slice_survives_json() {
        let s = super::helpers::small_slice();
        let json = serde_json::to_string(&s).unwrap();
        let back: TimeSlice = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn short_points_rejected() {
        let json = r#"{"rows":2,"cols":2,"points":[]}"#;
        let err = serde_json::from_str::<TimeSlice>(json).unwrap_err();
        assert!(err.to_string().contains("needs 4 points"), "{err}");
    }
}
