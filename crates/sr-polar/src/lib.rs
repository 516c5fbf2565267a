//! `sr-polar` — vessel performance and segment travel time.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`table`]  | `PolarTable`: TWA × TWS → boat speed, bilinear lookup     |
//! | [`loader`] | `load_polar_csv`, `load_polar_reader`                      |
//! | [`oracle`] | `PerformanceOracle` trait, `PolarOracle`                   |
//! | [`sample`] | `cruiser_42`: bundled polar for demos and tests           |
//! | [`error`]  | `PolarError`, `PolarResult<T>`                             |
//!
//! The router only sees [`PerformanceOracle`]; everything else here is how
//! the default oracle is fed.

pub mod error;
pub mod loader;
pub mod oracle;
pub mod sample;
pub mod table;

#[cfg(test)]
mod tests;

pub use error::{PolarError, PolarResult};
pub use loader::{load_polar_csv, load_polar_reader, DEFAULT_DELIMITER};
pub use oracle::{PerformanceOracle, PolarOracle};
pub use table::PolarTable;
