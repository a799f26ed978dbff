//! Time estimates used to rank cars for an arriving passenger.
//!
//! All results are signed [`Secs`].  The phase correction
//! ([`Elevator::remaining_phase_time`]) is negative while the current period
//! is still running and is added to the whole-floor terms as-is, so an
//! estimate may itself come out negative for a car that is about to arrive.

use std::collections::BTreeSet;

use lift_core::{Instant, Passenger, Secs};

use crate::{CarError, CarResult, Elevator, MotionState};

impl Elevator {
    /// Elapsed time since the mark minus the active period.
    ///
    /// Zero while idle at base.
    pub fn remaining_phase_time(&self, now: Instant) -> Secs {
        let elapsed = now - self.mark;
        match self.state {
            MotionState::Ascending | MotionState::Descending => elapsed - self.params.inter_floor,
            MotionState::StoppedAscending | MotionState::StoppedDescending => {
                elapsed - self.params.dwell
            }
            MotionState::IdleAtBase => Secs::ZERO,
        }
    }

    /// Time for the car to reach base and become free again.
    ///
    /// - down leg: remaining floors to base, less the one in transit
    /// - up leg: finish the climb to the last stop, dwell at each stop
    ///   still ahead, then descend empty
    /// - idle: zero
    pub fn estimate_time_to_base(&self, now: Instant) -> CarResult<Secs> {
        match self.state {
            MotionState::Descending | MotionState::StoppedDescending => self.descent_remaining(now),
            MotionState::Ascending | MotionState::StoppedAscending => {
                Ok(self.ascent_remaining(now)? + self.descent_after_ascent()?)
            }
            MotionState::IdleAtBase => Ok(Secs::ZERO),
        }
    }

    /// Remaining time on the way up, ending at the last pending stop.
    pub fn ascent_remaining(&self, now: Instant) -> CarResult<Secs> {
        if !self.state.is_up_leg() {
            return Err(self.wrong_state("ascent_remaining"));
        }
        let mut floors = (self.last_stop() - self.floor) as i64;
        if self.state == MotionState::Ascending {
            floors -= 1;
        }
        let stops = self.stops_above().len() as i64;
        Ok(self.params.inter_floor * floors + self.params.dwell * stops + self.remaining_phase_time(now))
    }

    /// Travel from the last pending stop down to base, ignoring the current
    /// phase.  Only meaningful before the car has turned around.
    pub fn descent_after_ascent(&self) -> CarResult<Secs> {
        if self.state.is_down_leg() {
            return Err(self.wrong_state("descent_after_ascent"));
        }
        let floors = (self.last_stop() - self.params.min_floor) as i64;
        Ok(self.params.inter_floor * floors)
    }

    /// Remaining time on the way down, assuming no further stops.
    pub fn descent_remaining(&self, now: Instant) -> CarResult<Secs> {
        if !self.state.is_down_leg() {
            return Err(self.wrong_state("descent_remaining"));
        }
        let mut floors = (self.floor - self.params.min_floor) as i64;
        if self.state == MotionState::Descending {
            floors -= 1;
        }
        Ok(self.params.inter_floor * floors + self.remaining_phase_time(now))
    }

    /// Total round-trip cost of serving this car's lobby queue plus
    /// `candidate`, one capacity-sized group per trip.
    ///
    /// Each group costs the climb to its highest destination, a dwell per
    /// distinct destination, and the empty descent back to base.  Groups are
    /// assumed to start only after the riders already aboard are delivered.
    pub fn estimate_queue_delay(&self, candidate: &Passenger) -> Secs {
        let max = self.params.max_floor;
        let destinations: Vec<i32> = self
            .lobby
            .iter()
            .map(|r| r.destination_floor)
            .filter(|&f| f <= max)
            .chain(std::iter::once(candidate.destination_floor))
            .collect();

        destinations
            .chunks(self.params.capacity.max(1))
            .map(|group| self.group_round_trip(group))
            .sum()
    }

    fn group_round_trip(&self, group: &[i32]) -> Secs {
        let top = group.iter().copied().max().unwrap_or(self.params.min_floor);
        let distinct = group.iter().collect::<BTreeSet<_>>().len() as i64;
        let travel = self.params.inter_floor * (top - self.params.min_floor) as i64;
        travel * 2 + self.params.dwell * distinct
    }

    fn wrong_state(&self, estimate: &'static str) -> CarError {
        CarError::WrongState { car: self.id, state: self.state, estimate }
    }
}
