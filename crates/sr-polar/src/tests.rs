//! Unit tests for sr-polar.

#[cfg(test)]
mod helpers {
    use std::io::Cursor;

    use crate::{load_polar_reader, PolarTable, DEFAULT_DELIMITER};

    pub const POLAR_CSV: &str = "\
TWA\\TWS;6;10;20\n\
0;0;0;0\n\
45;4;6;7\n\
90;6;8;9\n\
180;4;6;8\n\
";

    pub fn polar() -> PolarTable {
        load_polar_reader(Cursor::new(POLAR_CSV), DEFAULT_DELIMITER).unwrap()
    }
}

// ── Table lookup ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod table {
    use crate::{PolarError, PolarTable};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn exact_grid_values() {
        let p = super::helpers::polar();
        assert!(close(p.boat_speed(90.0, 10.0), 8.0));
        assert!(close(p.boat_speed(45.0, 20.0), 7.0));
        assert!(close(p.boat_speed(0.0, 6.0), 0.0));
    }

    #[test]
    fn bilinear_between_cells() {
        let p = super::helpers::polar();
        // Midway in TWA (45..90) and TWS (6..10): mean of 4, 6, 6, 8.
        assert!(close(p.boat_speed(67.5, 8.0), 6.0));
    }

    #[test]
    fn angles_fold_symmetrically() {
        let p = super::helpers::polar();
        assert!(close(p.boat_speed(270.0, 10.0), p.boat_speed(90.0, 10.0)));
        assert!(close(p.boat_speed(-45.0, 10.0), p.boat_speed(45.0, 10.0)));
        assert!(close(p.boat_speed(540.0, 10.0), p.boat_speed(180.0, 10.0)));
    }

    #[test]
    fn clamps_outside_wind_range() {
        let p = super::helpers::polar();
        assert!(close(p.boat_speed(90.0, 2.0), 6.0));
        assert!(close(p.boat_speed(90.0, 45.0), 9.0));
    }

    #[test]
    fn single_column_table() {
        let p = PolarTable::new(vec![0.0, 180.0], vec![10.0], vec![2.0, 6.0]).unwrap();
        assert!(close(p.boat_speed(90.0, 3.0), 4.0));
    }

    #[test]
    fn rejects_bad_tables() {
        assert!(matches!(PolarTable::new(vec![], vec![1.0], vec![]), Err(PolarError::Parse(_))));
        assert!(matches!(
            PolarTable::new(vec![90.0, 45.0], vec![1.0], vec![1.0, 1.0]),
            Err(PolarError::Parse(_))
        ));
        assert!(matches!(
            PolarTable::new(vec![45.0], vec![1.0], vec![-1.0]),
            Err(PolarError::Parse(_))
        ));
        assert!(matches!(
            PolarTable::new(vec![45.0], vec![1.0, 2.0], vec![1.0]),
            Err(PolarError::Parse(_))
        ));
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use crate::{load_polar_csv, load_polar_reader, PolarError};

    #[test]
    fn parses_axes() {
        let p = super::helpers::polar();
        assert_eq!(p.tws_axis(), &[6.0, 10.0, 20.0]);
        assert_eq!(p.twa_axis(), &[0.0, 45.0, 90.0, 180.0]);
    }

    #[test]
    fn tab_delimited_with_whitespace() {
        let src = "twa/tws\t8\t12\n 60 \t5.5\t6.5\n120\t6.0\t7.25\n";
        let p = load_polar_reader(Cursor::new(src), b'\t').unwrap();
        assert_eq!(p.tws_axis(), &[8.0, 12.0]);
        assert!((p.boat_speed(120.0, 12.0) - 7.25).abs() < 1e-9);
    }

    #[test]
    fn ragged_row_is_error() {
        let src = "x;6;10\n45;4\n";
        assert!(matches!(load_polar_reader(Cursor::new(src), b';'), Err(PolarError::Parse(_))));
    }

    #[test]
    fn non_numeric_cell_is_error() {
        let src = "x;6;10\n45;4;fast\n";
        let err = load_polar_reader(Cursor::new(src), b';').unwrap_err();
        assert!(err.to_string().contains("fast"), "{err}");
    }

    #[test]
    fn header_only_is_error() {
        assert!(load_polar_reader(Cursor::new("x;6;10\n"), b';').is_err());
        assert!(load_polar_reader(Cursor::new("x\n45\n"), b';').is_err());
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(super::helpers::POLAR_CSV.as_bytes()).unwrap();
        let p = load_polar_csv(f.path()).unwrap();
        assert_eq!(p, super::helpers::polar());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_polar_csv(std::path::Path::new("/nonexistent/boat.pol")).unwrap_err();
        assert!(matches!(err, PolarError::Io(_)));
    }
}

// ── Oracle ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod oracle {
    use sr_core::GeoPoint;
    use sr_grid::SurfaceParameters;

    use crate::{PerformanceOracle, PolarOracle};

    fn oracle() -> PolarOracle {
        PolarOracle::new(super::helpers::polar())
    }

    #[test]
    fn beam_reach_time() {
        // Sailing north with wind from the east: TWA 90, 10 kn → 8 kn.
        let o = oracle();
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 0.0);
        let t = o.segment_time(&SurfaceParameters::wind(90.0, 10.0), a, b);
        let expected = a.distance_nm(b) / 8.0 * 60.0;
        assert!((t - expected).abs() < 1e-9, "{t} vs {expected}");
    }

    #[test]
    fn head_to_wind_uses_speed_floor() {
        let o = oracle().with_min_speed(1.0);
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 0.0);
        let t = o.segment_time(&SurfaceParameters::wind(0.0, 10.0), a, b);
        assert!(t.is_finite());
        assert!((t - a.distance_nm(b) * 60.0).abs() < 1e-9);
    }

    #[test]
    fn fair_current_is_faster_than_foul() {
        let o = oracle();
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 0.0);
        let wind = SurfaceParameters::wind(90.0, 10.0);
        let slack = o.segment_time(&wind, a, b);
        let fair = o.segment_time(&wind.with_current(0.0, 2.0), a, b);
        let foul = o.segment_time(&wind.with_current(180.0, 2.0), a, b);
        assert!(fair < slack && slack < foul, "{fair} {slack} {foul}");
    }

    #[test]
    fn zero_length_segment_is_free() {
        let p = GeoPoint::new(5.0, 5.0);
        assert_eq!(oracle().segment_time(&SurfaceParameters::wind(90.0, 10.0), p, p), 0.0);
    }

    #[test]
    fn always_finite_and_non_negative() {
        let o = oracle();
        let a = GeoPoint::new(10.0, 10.0);
        for wind_from in (0..360).step_by(15) {
            for tws in [0.0, 5.0, 15.0, 40.0] {
                for cur in [0.0, 3.0, 12.0] {
                    let s = SurfaceParameters::wind(wind_from as f32, tws).with_current(200.0, cur);
                    for (dr, dc) in [(1.0, 0.0), (1.0, 1.0), (0.0, -1.0), (-1.0, -1.0)] {
                        let b = GeoPoint::new(10.0 + dr * 0.25, 10.0 + dc * 0.25);
                        let t = o.segment_time(&s, a, b);
                        assert!(t.is_finite() && t >= 0.0, "{t}");
                    }
                }
            }
        }
    }

    #[test]
    fn invalid_floor_falls_back() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 0.0);
        let s = SurfaceParameters::wind(0.0, 10.0);
        let t_default = oracle().segment_time(&s, a, b);
        let t_bad = oracle().with_min_speed(-3.0).segment_time(&s, a, b);
        assert_eq!(t_default, t_bad);
    }
}

#[cfg(test)]
mod closure_oracle {
    use sr_core::GeoPoint;
    use sr_grid::SurfaceParameters;

    use crate::PerformanceOracle;

    #[test]
    fn closure_is_an_oracle() {
        let six_knots = |_: &SurfaceParameters, a: GeoPoint, b: GeoPoint| a.distance_nm(b) / 6.0 * 60.0;
        let oracle: &dyn PerformanceOracle = &six_knots;
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.1, 0.0);
        let t = oracle.segment_time(&SurfaceParameters::default(), a, b);
        assert!((t - a.distance_nm(b) * 10.0).abs() < 1e-9);
    }
}

#[cfg(test)]
mod sample {
    use crate::sample::cruiser_42;

    #[test]
    fn bundled_polar_loads() {
        let p = cruiser_42().unwrap();
        assert_eq!(p.twa_axis().len(), 13);
        assert_eq!(p.tws_axis().len(), 9);
        assert_eq!(p.boat_speed(0.0, 12.0), 0.0);
        assert!((p.boat_speed(90.0, 12.0) - 7.6).abs() < 1e-9);
    }

    #[test]
    fn reaching_beats_beating() {
        let p = cruiser_42().unwrap();
        assert!(p.boat_speed(100.0, 12.0) > p.boat_speed(35.0, 12.0));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_json_tables {
    use crate::sample::cruiser_42;
    use crate::PolarTable;

    #[test]
    fn table_survives_json() {
        let p = cruiser_42().unwrap();
        let back: PolarTable = serde_json::from_str(&serde_json::to_string(&p).unwrap()).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn empty_axis_rejected() {
        let json = r#"{"twa":[],"tws":[6.0],"speeds":[]}"#;
        let err = serde_json::from_str::<PolarTable>(json).unwrap_err();
        assert!(err.to_string().contains("TWA axis is empty"), "{err}");
    }

    #[test]
    fn short_speed_grid_rejected() {
        let json = r#"{"twa":[0.0,90.0],"tws":[6.0,12.0],"speeds":[1.0,2.0,3.0]}"#;
        assert!(serde_json::from_str::<PolarTable>(json).is_err());
    }
}
