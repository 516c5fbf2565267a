//! Routing-subsystem error type.
//!
//! Every variant describes a malformed [`RoutingProblem`](crate::RoutingProblem)
//! or a malformed path handed to [`replay`](crate::replay).  A search that
//! simply finds no route is not an error: it returns the failure
//! [`TimedPath`](crate::TimedPath).

use thiserror::Error;

use sr_core::{GridCoord, SrError};

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("timeframe has no time slices")]
    EmptyTimeframe,

    #[error("time slice {index} is {found:?} but slice 0 is {expected:?}")]
    SliceDims {
        index:    usize,
        expected: (u32, u32),
        found:    (u32, u32),
    },

    #[error("time interval {0} minutes must be finite and round to at least 1")]
    InvalidInterval(f64),

    #[error("{what} {coord} is outside the grid")]
    OutOfBounds { what: &'static str, coord: GridCoord },

    #[error("{what} {coord} is an obstacle")]
    Blocked { what: &'static str, coord: GridCoord },

    #[error("{0} was not set")]
    MissingEndpoint(&'static str),

    #[error("{from} and {to} are not neighbouring cells")]
    NotAdjacent { from: GridCoord, to: GridCoord },

    #[error("path is empty")]
    EmptyPath,
}

impl From<RouteError> for SrError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::OutOfBounds { coord, .. } => SrError::OutOfBounds(coord),
            other => SrError::Config(other.to_string()),
        }
    }
}

pub type RouteResult<T> = Result<T, RouteError>;
