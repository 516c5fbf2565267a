//! `sr-grid` — the spatiotemporal environment the router searches over.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`surface`] | `SurfaceParameters`: wind and current at one point in time |
//! | [`slice`]   | `GridPoint`, `TimeSlice` (immutable row-major snapshot)     |
//! | [`query`]   | `closest_point`, `surround`                                 |
//! | [`synth`]   | `SyntheticWeather`: sector winds that change per slice     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod query;
pub mod slice;
pub mod surface;
pub mod synth;

#[cfg(test)]
mod tests;

pub use query::{closest_point, surround};
pub use slice::{GridPoint, TimeSlice};
pub use surface::SurfaceParameters;
pub use synth::{SyntheticWeather, WindSector};
