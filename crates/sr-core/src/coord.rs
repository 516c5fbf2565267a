//! Discrete grid coordinates.
//!
//! A `GridCoord` addresses one cell of a time slice by integer row/column.
//! It is deliberately distinct from [`GeoPoint`](crate::GeoPoint): the search
//! keys visited sets, obstacles and dedup tables on `GridCoord` only, never on
//! floating-point positions.
//!
//! Ordering is row-major (`row` first, then `col`), matching the iteration
//! order of a time slice.

use std::fmt;

/// Zero-based `(row, col)` index into a time-slice grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCoord {
    pub row: u32,
    pub col: u32,
}

impl GridCoord {
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Flat row-major index into a grid that is `cols` wide.
    #[inline(always)]
    pub fn linear_index(self, cols: usize) -> usize {
        self.row as usize * cols + self.col as usize
    }

    /// Apply a signed `(d_row, d_col)` step.
    ///
    /// Returns `None` if either component would go negative or overflow.
    /// Upper bounds are the caller's concern (the coordinate type does not
    /// know the grid size).
    #[inline]
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<GridCoord> {
        Some(GridCoord {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    /// `true` if `other` is one king-move away (the Moore neighbourhood).
    pub fn is_adjacent(self, other: GridCoord) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}

impl From<(u32, u32)> for GridCoord {
    #[inline]
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
