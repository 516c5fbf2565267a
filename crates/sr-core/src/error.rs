//! Workspace base error type.
//!
//! `sr-grid` returns `SrError` directly.  `sr-polar` and `sr-router` define
//! their own enums (`PolarError`, `RouteError`) that convert into `SrError`
//! where a caller wants one type.

use thiserror::Error;

use crate::GridCoord;

/// The common base error for `sr-*` crates.
#[derive(Debug, Error)]
pub enum SrError {
    #[error("coordinate {0} is outside the grid")]
    OutOfBounds(GridCoord),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `sr-*` crates.
pub type SrResult<T> = Result<T, SrError>;
