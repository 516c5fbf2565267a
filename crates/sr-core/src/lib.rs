//! `sr-core` — foundational types for the sail-route workspace.
//!
//! This crate is a dependency of every other `sr-*` crate.  It has no `sr-*`
//! dependencies and a single external one (`thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                             |
//! |-----------|------------------------------------------------------|
//! | [`geo`]   | `GeoPoint`, haversine distance, initial bearing      |
//! | [`coord`] | `GridCoord`: discrete (row, col) grid index         |
//! | [`error`] | `SrError`, `SrResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod coord;
pub mod error;
pub mod geo;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use coord::GridCoord;
pub use error::{SrError, SrResult};
pub use geo::GeoPoint;
