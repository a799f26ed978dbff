//! The `Passenger` record: an immutable arrival fact plus the two instants
//! the engine stamps as the passenger moves through the system.

use crate::{CoreError, CoreResult, Instant, PassengerId, Secs};

/// One person arriving at the base floor and travelling to
/// `destination_floor`.
///
/// `boarding` and `disembark` start as `None` and are each set exactly once
/// by the engine, via [`record_boarding`][Self::record_boarding] and
/// [`record_disembark`][Self::record_disembark].  Once all three instants
/// are present, `arrival <= boarding <= disembark` holds.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passenger {
    pub id:                PassengerId,
    pub name:              String,
    pub destination_floor: i32,
    pub arrival:           Instant,
    boarding:              Option<Instant>,
    disembark:             Option<Instant>,
}

impl Passenger {
    /// A passenger who has not yet boarded.
    pub fn new(
        id:                PassengerId,
        name:              impl Into<String>,
        destination_floor: i32,
        arrival:           Instant,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            destination_floor,
            arrival,
            boarding:  None,
            disembark: None,
        }
    }

    #[inline]
    pub fn boarding(&self) -> Option<Instant> {
        self.boarding
    }

    #[inline]
    pub fn disembark(&self) -> Option<Instant> {
        self.disembark
    }

    #[inline]
    pub fn has_boarded(&self) -> bool {
        self.boarding.is_some()
    }

    #[inline]
    pub fn has_disembarked(&self) -> bool {
        self.disembark.is_some()
    }

    /// Stamp the boarding instant.
    ///
    /// # Errors
    /// If already boarded, or if `at` precedes the arrival instant.
    pub fn record_boarding(&mut self, at: Instant) -> CoreResult<()> {
        if let Some(existing) = self.boarding {
            return Err(CoreError::AlreadyRecorded {
                passenger: self.id, what: "boarding", at, existing,
            });
        }
        if at < self.arrival {
            return Err(CoreError::OutOfOrder {
                passenger: self.id, what: "boarding", at, earlier: self.arrival,
            });
        }
        self.boarding = Some(at);
        Ok(())
    }

    /// Stamp the disembark instant.
    ///
    /// # Errors
    /// If not yet boarded, already disembarked, or `at` precedes boarding.
    pub fn record_disembark(&mut self, at: Instant) -> CoreResult<()> {
        let Some(boarded) = self.boarding else {
            return Err(CoreError::NotBoarded(self.id));
        };
        if let Some(existing) = self.disembark {
            return Err(CoreError::AlreadyRecorded {
                passenger: self.id, what: "disembark", at, existing,
            });
        }
        if at < boarded {
            return Err(CoreError::OutOfOrder {
                passenger: self.id, what: "disembark", at, earlier: boarded,
            });
        }
        self.disembark = Some(at);
        Ok(())
    }

    // ── Derived durations ─────────────────────────────────────────────────

    /// Time spent in the lobby queue: `boarding - arrival`.
    pub fn queue_wait(&self) -> Option<Secs> {
        self.boarding.map(|b| b - self.arrival)
    }

    /// Time spent riding: `disembark - boarding`.
    pub fn transit(&self) -> Option<Secs> {
        Some(self.disembark? - self.boarding?)
    }

    /// `queue_wait + transit`; defined only when both are.
    pub fn total(&self) -> Option<Secs> {
        Some(self.queue_wait()? + self.transit()?)
    }
}
