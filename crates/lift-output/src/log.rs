//! `LogObserver` — renders simulation events as `tracing` events.

use lift_core::{ElevatorId, Instant, Passenger};
use lift_sim::{DisembarkEvent, SimObserver, SimStatistics};
use tracing::{debug, info};

use crate::row::fleet_summary;

/// A [`SimObserver`] that logs boards and disembarks at `debug` and the
/// final report at `info`.
///
/// Disembark events carry the fleet snapshot as a `fleet` field.
#[derive(Debug, Default)]
pub struct LogObserver {
    disembarks: usize,
}

impl LogObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Disembarks seen so far.
    pub fn disembarks(&self) -> usize {
        self.disembarks
    }
}

impl SimObserver for LogObserver {
    fn on_board(&mut self, now: Instant, car: ElevatorId, passenger: &Passenger) {
        debug!(
            %now,
            %car,
            passenger = %passenger.id,
            name      = %passenger.name,
            floor     = passenger.destination_floor,
            "board"
        );
    }

    fn on_disembark(&mut self, event: &DisembarkEvent<'_>) {
        self.disembarks += 1;
        let p = event.passenger;
        debug!(
            now       = %event.instant,
            car       = %event.car,
            passenger = %p.id,
            name      = %p.name,
            floor     = p.destination_floor,
            wait      = ?p.queue_wait().map(|s| s.as_i64()),
            transit   = ?p.transit().map(|s| s.as_i64()),
            fleet     = %fleet_summary(event.fleet),
            "disembark"
        );
    }

    fn on_sim_end(&mut self, stats: &SimStatistics) {
        info!(
            policy            = %stats.policy,
            passengers        = stats.passengers,
            makespan_secs     = ?stats.makespan().map(|s| s.as_i64()),
            queue_wait        = %stats.queue_wait,
            transit           = %stats.transit,
            total             = %stats.total,
            never_boarded     = stats.never_boarded,
            never_disembarked = stats.never_disembarked,
            "run complete"
        );
    }
}
