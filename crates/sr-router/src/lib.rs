//! `sr-router` — minimum-time routing for a sailing vessel across a grid whose
//! wind and current change over time.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`problem`]  | `RoutingProblem`, `RoutingProblemBuilder`                 |
//! | [`path`]     | `TimedPath`: the search's answer                         |
//! | [`config`]   | `RouterConfig`, `Pruning`                                 |
//! | [`frontier`] | `PathArena`: shared-prefix storage for candidate paths   |
//! | [`router`]   | `Router` trait, `FrontierRouter`, `minimum_time_route`    |
//! | [`replay`]   | `replay`: re-time a coordinate sequence leg by leg       |
//! | [`scenario`] | `Scenario`: weather + problem + settings in one value    |
//! | [`error`]    | `RouteError`, `RouteResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public value types.     |

pub mod config;
pub mod error;
pub mod frontier;
pub mod path;
pub mod problem;
pub mod replay;
pub mod router;
pub mod scenario;


pub use config::{Pruning, RouterConfig};
pub use error::{RouteError, RouteResult};
pub use path::TimedPath;
pub use problem::{RoutingProblem, RoutingProblemBuilder};
pub use replay::{replay, Leg};
pub use router::{minimum_time_route, FrontierRouter, Router, SearchOutcome, SearchStats};
pub use scenario::Scenario;
