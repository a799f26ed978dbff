//! Motion states, riders, and the read-only car snapshot.

use std::fmt;

use lift_core::{ElevatorId, PassengerId};

/// Where a car is in its duty cycle.
///
/// A car starts `IdleAtBase` on the base floor and cycles through the other
/// four states while serving a group of riders.  There is no terminal state.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MotionState {
    /// Parked on the base floor with doors open, waiting for a lobby queue.
    #[default]
    IdleAtBase,
    /// Doors open at a floor; will continue upward after the dwell.
    StoppedAscending,
    /// Travelling up one floor.
    Ascending,
    /// Doors open at a floor; will head down after the dwell.
    StoppedDescending,
    /// Travelling down one floor.
    Descending,
}

impl MotionState {
    /// Doors open at a floor mid-cycle; riders may leave.
    #[inline]
    pub fn is_stopped(self) -> bool {
        matches!(self, MotionState::StoppedAscending | MotionState::StoppedDescending)
    }

    /// Between floors.
    #[inline]
    pub fn is_moving(self) -> bool {
        matches!(self, MotionState::Ascending | MotionState::Descending)
    }

    /// On the way up (stopped or moving).
    #[inline]
    pub fn is_up_leg(self) -> bool {
        matches!(self, MotionState::Ascending | MotionState::StoppedAscending)
    }

    /// On the way down (stopped or moving).
    #[inline]
    pub fn is_down_leg(self) -> bool {
        matches!(self, MotionState::Descending | MotionState::StoppedDescending)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MotionState::IdleAtBase        => "idle_at_base",
            MotionState::StoppedAscending  => "stopped_ascending",
            MotionState::Ascending         => "ascending",
            MotionState::StoppedDescending => "stopped_descending",
            MotionState::Descending        => "descending",
        }
    }
}

impl fmt::Display for MotionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A passenger as seen by a car: who, and where they are going.
///
/// The car only needs the destination; timestamps stay with the engine's
/// `Passenger` record and are looked up by `passenger` id.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rider {
    pub passenger:         PassengerId,
    pub destination_floor: i32,
}

impl Rider {
    #[inline]
    pub fn new(passenger: PassengerId, destination_floor: i32) -> Self {
        Self { passenger, destination_floor }
    }
}

impl From<&lift_core::Passenger> for Rider {
    fn from(p: &lift_core::Passenger) -> Self {
        Rider::new(p.id, p.destination_floor)
    }
}

/// A copy of one car's observable state at a given instant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarSnapshot {
    pub id:     ElevatorId,
    pub floor:  i32,
    pub state:  MotionState,
    pub riders: Vec<Rider>,
    /// Passengers waiting in this car's lobby queue.
    pub queued: usize,
}

impl fmt::Display for CarSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: floor={} state={} riders={}[",
            self.id, self.floor, self.state, self.riders.len()
        )?;
        for (i, r) in self.riders.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}->{}", r.passenger, r.destination_floor)?;
        }
        write!(f, "] queued={}", self.queued)
    }
}
