//! One environment snapshot: a dense rows × cols grid of [`GridPoint`]s.
//!
//! # Data layout
//!
//! Cells are stored row-major in a single `Vec`:
//!
//! ```text
//! points[ row * cols + col ]
//! ```
//!
//! A `TimeSlice` is immutable once built.  Time-varying weather is expressed
//! as a *sequence* of slices, each constructed in full up front, rather than
//! by mutating cells between searches.

use sr_core::{GeoPoint, GridCoord, SrError, SrResult};

use crate::SurfaceParameters;

// ── GridPoint ─────────────────────────────────────────────────────────────────

/// One cell of one environment snapshot.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    pub position: GeoPoint,
    pub surface:  SurfaceParameters,
}

impl GridPoint {
    #[inline]
    pub fn new(position: GeoPoint, surface: SurfaceParameters) -> Self {
        Self { position, surface }
    }
}

// ── TimeSlice ─────────────────────────────────────────────────────────────────

/// The environment at one instant.
///
/// Deserialising goes through [`TimeSlice::from_points`], so a document whose
/// `points` do not fill `rows × cols` is rejected.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTimeSlice"))]
pub struct TimeSlice {
    rows:   u32,
    cols:   u32,
    points: Vec<GridPoint>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTimeSlice {
    rows:   u32,
    cols:   u32,
    points: Vec<GridPoint>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTimeSlice> for TimeSlice {
    type Error = SrError;

    fn try_from(raw: RawTimeSlice) -> SrResult<Self> {
        Self::from_points(raw.rows, raw.cols, raw.points)
    }
}

impl TimeSlice {
    /// Build a slice by evaluating `f` once per cell in row-major order.
    pub fn from_fn<F>(rows: u32, cols: u32, mut f: F) -> Self
    where
        F: FnMut(GridCoord) -> GridPoint,
    {
        let mut points = Vec::with_capacity(rows as usize * cols as usize);
        for row in 0..rows {
            for col in 0..cols {
                points.push(f(GridCoord::new(row, col)));
            }
        }
        Self { rows, cols, points }
    }

    /// Wrap an existing row-major `Vec` of cells.
    ///
    /// Fails if `points.len() != rows * cols`.
    pub fn from_points(rows: u32, cols: u32, points: Vec<GridPoint>) -> SrResult<Self> {
        let expected = rows as usize * cols as usize;
        if points.len() != expected {
            return Err(SrError::Config(format!(
                "time slice {rows}x{cols} needs {expected} points, got {}",
                points.len()
            )));
        }
        Ok(Self { rows, cols, points })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn dims(&self) -> (u32, u32) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    // ── Cell access ───────────────────────────────────────────────────────

    /// Cell at `coord`.
    ///
    /// # Panics
    /// Panics if `coord` is outside the grid.  Callers on hot paths have
    /// already validated bounds; use [`try_get`](Self::try_get) otherwise.
    #[inline]
    pub fn get(&self, coord: GridCoord) -> &GridPoint {
        assert!(self.contains(coord), "{coord} outside {}x{} slice", self.rows, self.cols);
        &self.points[coord.linear_index(self.cols as usize)]
    }

    pub fn try_get(&self, coord: GridCoord) -> SrResult<&GridPoint> {
        if self.contains(coord) {
            Ok(&self.points[coord.linear_index(self.cols as usize)])
        } else {
            Err(SrError::OutOfBounds(coord))
        }
    }

    /// All cells with their coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, &GridPoint)> + '_ {
        let cols = self.cols as usize;
        self.points.iter().enumerate().map(move |(i, p)| {
            (GridCoord::new((i / cols) as u32, (i % cols) as u32), p)
        })
    }
}
