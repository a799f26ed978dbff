//! The `Sim` struct and its tick protocol.

use std::collections::BTreeMap;
use std::fmt;

use lift_car::{CarSnapshot, Elevator, Rider};
use lift_core::{Instant, Passenger, PassengerId, SimClock, SimConfig};
use lift_dispatch::DispatchPolicy;
use tracing::{debug, info, trace};

use crate::{DisembarkEvent, SimError, SimObserver, SimResult, SimStatistics};

/// Outcome of one processed tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SimStatus {
    /// Some passenger has not yet disembarked.
    Running,
    /// Every passenger has disembarked.
    Finished,
}

impl fmt::Display for SimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SimStatus::Running  => "running",
            SimStatus::Finished => "finished",
        })
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation engine.
///
/// `Sim<P>` owns the fleet and the passenger list for one run and applies
/// the per-tick protocol at the clock's current instant:
///
/// 1. **Guard**: refuse an instant after the run's finish.
/// 2. **Advance**: every car advances its state machine to `now`.
/// 3. **Disembark**: every stopped car releases the riders bound for its
///    floor; each gets `disembark = now` and an observer event.
/// 4. **Assign**: every passenger arriving exactly at `now`, in list order,
///    is sent by the policy to a car's lobby queue.
/// 5. **Board**: every car idle at base with a queue boards it FIFO up to
///    capacity; each boarded passenger gets `boarding = now`.
/// 6. **Finish**: once nobody is left to disembark, record the finish.
///
/// Disembarking runs before boarding, so a passenger can never leave on the
/// tick they boarded.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: DispatchPolicy> {
    /// Configuration the run was built from.
    pub config: SimConfig,

    pub(crate) clock:       SimClock,
    pub(crate) fleet:       Vec<Elevator>,
    pub(crate) passengers:  Vec<Passenger>,
    pub(crate) policy:      P,
    /// Passengers keyed by arrival instant, list order within an instant.
    pub(crate) arrivals:    BTreeMap<Instant, Vec<PassengerId>>,
    /// Passengers without a disembark instant.
    pub(crate) outstanding: usize,
    pub(crate) finished:    Option<Instant>,
}

impl<P: DispatchPolicy> Sim<P> {
    // ── Accessors ─────────────────────────────────────────────────────────

    /// The instant the next `process_tick` will handle.
    #[inline]
    pub fn now(&self) -> Instant {
        self.clock.current
    }

    #[inline]
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// Cars in id order.
    #[inline]
    pub fn fleet(&self) -> &[Elevator] {
        &self.fleet
    }

    /// Passengers in id order.
    #[inline]
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    #[inline]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Instant of the last disembark, once every passenger is delivered.
    #[inline]
    pub fn finished(&self) -> Option<Instant> {
        self.finished
    }

    pub fn status(&self) -> SimStatus {
        if self.finished.is_some() { SimStatus::Finished } else { SimStatus::Running }
    }

    pub fn snapshot(&self) -> Vec<CarSnapshot> {
        self.fleet.iter().map(Elevator::snapshot).collect()
    }

    /// Statistics over the passengers as they stand now.  Pure: calling it
    /// twice without a tick in between gives equal results.
    pub fn statistics(&self) -> SimStatistics {
        SimStatistics::compute(self.policy.name(), &self.passengers, self.clock.initial, self.finished)
    }

    // ── Driving ───────────────────────────────────────────────────────────

    /// Process ticks until every passenger has disembarked.
    ///
    /// Returns the final statistics, which are also handed to
    /// [`SimObserver::on_sim_end`].  Calling `run` on a finished simulation
    /// only reports again.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimStatistics> {
        if self.finished.is_none() {
            info!(policy = self.policy.name(), start = %self.clock.current, "simulation started");
            loop {
                let now = self.clock.current;
                observer.on_tick_start(now);
                let status = self.process_tick(observer)?;
                observer.on_tick_end(now, status);
                if status == SimStatus::Finished {
                    break;
                }
                self.advance_tick();
            }
        }

        let stats = self.statistics();
        info!(
            policy   = %stats.policy,
            finished = ?stats.finished.map(|t| t.to_string()),
            "simulation finished"
        );
        observer.on_sim_end(&stats);
        Ok(stats)
    }

    /// Process at most `n` ticks, stopping early once the run finishes.
    ///
    /// The clock is left on the last processed instant if the run finished,
    /// otherwise on the next unprocessed one.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<SimStatus> {
        for _ in 0..n {
            if self.finished.is_some() {
                return Ok(SimStatus::Finished);
            }
            let now = self.clock.current;
            observer.on_tick_start(now);
            let status = self.process_tick(observer)?;
            observer.on_tick_end(now, status);
            if status == SimStatus::Finished {
                return Ok(status);
            }
            self.advance_tick();
        }
        Ok(self.status())
    }

    /// Move the clock forward by one tick.
    #[inline]
    pub fn advance_tick(&mut self) {
        self.clock.advance();
    }

    // ── Tick protocol ─────────────────────────────────────────────────────

    /// Apply the per-tick protocol at the clock's current instant.
    ///
    /// # Errors
    ///
    /// - [`SimError::SteppedPastFinish`] if the run finished earlier
    /// - [`SimError::UnknownElevator`] if the policy names a car outside the fleet
    /// - [`SimError::Car`] if a car leaves its shaft
    pub fn process_tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimStatus> {
        let now = self.clock.current;

        // ── 1. Guard ──────────────────────────────────────────────────────
        if let Some(finished) = self.finished {
            if now > finished {
                return Err(SimError::SteppedPastFinish { now, finished });
            }
        }

        // ── 2. Advance every car ──────────────────────────────────────────
        for car in &mut self.fleet {
            car.advance(now)?;
        }

        // ── 3. Disembark ──────────────────────────────────────────────────
        for i in 0..self.fleet.len() {
            let leaving = self.fleet[i].release_riders();
            if leaving.is_empty() {
                continue;
            }
            let car = self.fleet[i].id();
            for rider in &leaving {
                self.passenger_mut(rider.passenger)?.record_disembark(now)?;
                self.outstanding = self.outstanding.saturating_sub(1);
            }
            let fleet = self.snapshot();
            for rider in &leaving {
                let passenger = self.passenger(rider.passenger)?;
                debug!(%now, %car, passenger = %passenger.id, floor = rider.destination_floor, "disembark");
                observer.on_disembark(&DisembarkEvent { instant: now, car, passenger, fleet: &fleet });
            }
        }

        // ── 4. Assign arrivals ────────────────────────────────────────────
        if let Some(arriving) = self.arrivals.remove(&now) {
            for id in arriving {
                let passenger = self.passengers.get(id.index()).ok_or(SimError::UnknownPassenger(id))?;
                let chosen = self.policy.select(&self.fleet, passenger, now)?;
                let car = self
                    .fleet
                    .get_mut(chosen.fleet_index())
                    .filter(|c| c.id() == chosen)
                    .ok_or(SimError::UnknownElevator(chosen))?;
                debug!(%now, car = %chosen, passenger = %id, floor = passenger.destination_floor, "assigned");
                car.enqueue(Rider::from(passenger));
            }
        }

        // ── 5. Board at base ──────────────────────────────────────────────
        for i in 0..self.fleet.len() {
            let boarded = self.fleet[i].board_from_lobby(now);
            let car = self.fleet[i].id();
            for rider in boarded {
                let passenger = self.passenger_mut(rider.passenger)?;
                passenger.record_boarding(now)?;
                observer.on_board(now, car, passenger);
            }
        }

        // ── 6. Termination ────────────────────────────────────────────────
        if self.outstanding == 0 {
            if self.finished.is_none() {
                self.finished = Some(now);
            }
            return Ok(SimStatus::Finished);
        }
        trace!(%now, outstanding = self.outstanding, "tick done");
        Ok(SimStatus::Running)
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn passenger(&self, id: PassengerId) -> SimResult<&Passenger> {
        self.passengers.get(id.index()).ok_or(SimError::UnknownPassenger(id))
    }

    fn passenger_mut(&mut self, id: PassengerId) -> SimResult<&mut Passenger> {
        self.passengers.get_mut(id.index()).ok_or(SimError::UnknownPassenger(id))
    }
}
