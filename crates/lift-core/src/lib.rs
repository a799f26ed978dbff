//! `lift-core` — foundational types for the `rust_lift` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (`jiff`, `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ElevatorId`, `PassengerId`                           |
//! | [`time`]        | `Instant`, `Secs`, `SimClock`                         |
//! | [`config`]      | `SimConfig` and its defaults                          |
//! | [`rng`]         | `SimRng`                                              |
//! | [`passenger`]   | `Passenger` (arrival fact + recorded timestamps)      |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load `SimConfig` from a TOML/JSON file.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod passenger;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{ElevatorId, PassengerId};
pub use passenger::Passenger;
pub use rng::SimRng;
pub use time::{Instant, Secs, SimClock};
