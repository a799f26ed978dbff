//! `lift-dispatch` — choosing which car serves an arriving passenger.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`policy`]      | `DispatchPolicy` trait                                    |
//! | [`round_robin`] | `RoundRobin` — rotate through the fleet                   |
//! | [`random`]      | `RandomChoice` — uniform pick                             |
//! | [`least_wait`]  | `LeastEstimatedWait` — smallest estimated round trip      |
//! | [`kind`]        | `PolicyKind` — name ↔ policy, boxed construction          |
//! | [`error`]       | `DispatchError`, `DispatchResult<T>`                      |
//!
//! # Design notes
//!
//! The engine owns the fleet and lends it to the policy on every call, so a
//! policy never holds a reference into engine state.  The only per-policy
//! state is the round-robin index and the random policy's RNG.

pub mod error;
pub mod kind;
pub mod least_wait;
pub mod policy;
pub mod random;
pub mod round_robin;


pub use error::{DispatchError, DispatchResult};
pub use kind::PolicyKind;
pub use least_wait::LeastEstimatedWait;
pub use policy::DispatchPolicy;
pub use random::RandomChoice;
pub use round_robin::RoundRobin;
