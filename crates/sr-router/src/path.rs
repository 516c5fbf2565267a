//! The search's answer type.

use sr_core::GridCoord;

/// A route with its elapsed time.
///
/// `path[0]` is always the problem's start cell for a found route.  A route
/// that was not found has an empty `path` (see [`is_found`](Self::is_found));
/// its `duration` is the configured failure value and carries no meaning.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimedPath {
    /// Elapsed minutes from departure to the last cell.
    pub duration: f64,
    /// Visited cells in order.
    pub path: Vec<GridCoord>,
}

impl TimedPath {
    /// Zero-length path sitting at `start`.
    pub fn at(start: GridCoord) -> Self {
        Self { duration: 0.0, path: vec![start] }
    }

    /// The "no route" value.
    pub fn not_found(failure_duration: f64) -> Self {
        Self { duration: failure_duration, path: Vec::new() }
    }

    /// `true` unless this is the "no route" value.
    #[inline]
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn last(&self) -> Option<GridCoord> {
        self.path.last().copied()
    }

    /// Number of legs (cells − 1); zero for a not-found path.
    pub fn legs(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// A copy of `self` extended by one leg.  `self` is left untouched so
    /// sibling branches never share history.
    pub fn extended(&self, next: GridCoord, minutes: f64) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(next);
        Self { duration: self.duration + minutes, path }
    }
}
