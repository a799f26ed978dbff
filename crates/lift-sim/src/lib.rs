//! `lift-sim` — tick-driven engine for the rust_lift elevator simulator.
//!
//! # Tick protocol
//!
//! ```text
//! build: initial = min(arrival); cars 1..=N at start floor; policy.initialize
//! loop at now = initial, initial + tick, …:
//!   ① Guard      — error if a finished run is stepped past its finish.
//!   ② Advance    — every car: advance(now).
//!   ③ Disembark  — every stopped car releases riders for its floor.
//!   ④ Assign     — arrivals at exactly `now`, list order → policy.select
//!                  → that car's lobby queue.
//!   ⑤ Board      — every car idle at base with a queue: board FIFO up to
//!                  capacity.
//!   ⑥ Finish     — all passengers disembarked → Finished.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | `compare_policies` runs each policy on Rayon's pool.    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::SimConfig;
//! use lift_dispatch::LeastEstimatedWait;
//! use lift_sim::{NoopObserver, SimBuilder};
//!
//! let passengers = lift_arrivals::load_passengers_csv(path)?;
//! let mut sim = SimBuilder::new(SimConfig::default(), passengers, LeastEstimatedWait::new())
//!     .build()?;
//! let stats = sim.run(&mut NoopObserver)?;
//! println!("{stats}");
//! ```

pub mod builder;
pub mod compare;
pub mod error;
pub mod observer;
pub mod sim;
pub mod stats;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use compare::{PolicyRun, compare_policies, compare_policies_with};
pub use error::{SimError, SimResult};
pub use observer::{DisembarkEvent, NoopObserver, SimObserver};
pub use sim::{Sim, SimStatus};
pub use stats::{DurationSummary, SimStatistics};
