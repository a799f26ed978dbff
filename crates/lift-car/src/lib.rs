//! `lift-car` — the per-car state machine and its time estimates.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`state`]     | `MotionState`, `Rider`, `CarSnapshot`                      |
//! | [`car`]       | `Elevator`, `CarParams` — position, riders, lobby queue    |
//! | [`estimate`]  | Time-to-base and queue-delay estimates on `Elevator`       |
//! | [`error`]     | `CarError`, `CarResult<T>`                                 |
//!
//! # State machine (summary)
//!
//! ```text
//!              lobby non-empty (engine)
//!   IdleAtBase ────────────────────────▶ StoppedAscending ──dwell──▶ Ascending
//!       ▲                                     │  ▲                     │
//!       │                          no stop    │  └──── stop, more ─────┤
//!       │                          above      ▼                        │
//!       └──── at base ──────────── StoppedDescending ◀── last stop ────┘
//!       ▲                            │     ▲
//!       │                   dwell    ▼     │ base-bound riders
//!       └──── at base, empty ───── Descending
//! ```
//!
//! Every transition that completes a period (dwell or one floor of travel)
//! moves the car's clock mark forward by that period.

pub mod car;
pub mod error;
pub mod estimate;
pub mod state;


pub use car::{CarParams, Elevator};
pub use error::{CarError, CarResult};
pub use state::{CarSnapshot, MotionState, Rider};
