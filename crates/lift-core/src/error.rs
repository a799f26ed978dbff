//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where they need to surface it.

use thiserror::Error;

use crate::{Instant, PassengerId};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("{passenger}: cannot record {what} at {at} (already {existing})")]
    AlreadyRecorded {
        passenger: PassengerId,
        what:      &'static str,
        at:        Instant,
        existing:  Instant,
    },

    #[error("{passenger}: {what} at {at} precedes {earlier}")]
    OutOfOrder {
        passenger: PassengerId,
        what:      &'static str,
        at:        Instant,
        earlier:   Instant,
    },

    #[error("{0}: cannot disembark without having boarded")]
    NotBoarded(PassengerId),
}

/// Shorthand result type for `lift-core`.
pub type CoreResult<T> = Result<T, CoreError>;
