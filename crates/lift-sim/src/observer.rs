//! Simulation observer trait: the engine's event sink.

use lift_car::CarSnapshot;
use lift_core::{ElevatorId, Instant, Passenger};

use crate::{SimStatistics, SimStatus};

/// One passenger leaving a car, with the whole fleet as it stood right
/// after that car opened its doors.
#[derive(Clone, Debug)]
pub struct DisembarkEvent<'a> {
    pub instant:   Instant,
    pub car:       ElevatorId,
    pub passenger: &'a Passenger,
    pub fleet:     &'a [CarSnapshot],
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] and
/// [`Sim::process_tick`][crate::Sim::process_tick].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — count disembarks per car
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct PerCar(std::collections::BTreeMap<ElevatorId, usize>);
///
/// impl SimObserver for PerCar {
///     fn on_disembark(&mut self, event: &DisembarkEvent<'_>) {
///         *self.0.entry(event.car).or_default() += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any car moves.
    fn on_tick_start(&mut self, _now: Instant) {}

    /// Called for each passenger boarding a car at base.
    fn on_board(&mut self, _now: Instant, _car: ElevatorId, _passenger: &Passenger) {}

    /// Called for each passenger leaving a car.
    fn on_disembark(&mut self, _event: &DisembarkEvent<'_>) {}

    /// Called at the end of each tick with the tick's outcome.
    fn on_tick_end(&mut self, _now: Instant, _status: SimStatus) {}

    /// Called once when [`Sim::run`][crate::Sim::run] completes.
    fn on_sim_end(&mut self, _stats: &SimStatistics) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

impl<O: SimObserver + ?Sized> SimObserver for &mut O {
    fn on_tick_start(&mut self, now: Instant) {
        (**self).on_tick_start(now)
    }

    fn on_board(&mut self, now: Instant, car: ElevatorId, passenger: &Passenger) {
        (**self).on_board(now, car, passenger)
    }

    fn on_disembark(&mut self, event: &DisembarkEvent<'_>) {
        (**self).on_disembark(event)
    }

    fn on_tick_end(&mut self, now: Instant, status: SimStatus) {
        (**self).on_tick_end(now, status)
    }

    fn on_sim_end(&mut self, stats: &SimStatistics) {
        (**self).on_sim_end(stats)
    }
}

/// `None` ignores every callback.
impl<O: SimObserver> SimObserver for Option<O> {
    fn on_tick_start(&mut self, now: Instant) {
        if let Some(o) = self {
            o.on_tick_start(now);
        }
    }

    fn on_board(&mut self, now: Instant, car: ElevatorId, passenger: &Passenger) {
        if let Some(o) = self {
            o.on_board(now, car, passenger);
        }
    }

    fn on_disembark(&mut self, event: &DisembarkEvent<'_>) {
        if let Some(o) = self {
            o.on_disembark(event);
        }
    }

    fn on_tick_end(&mut self, now: Instant, status: SimStatus) {
        if let Some(o) = self {
            o.on_tick_end(now, status);
        }
    }

    fn on_sim_end(&mut self, stats: &SimStatistics) {
        if let Some(o) = self {
            o.on_sim_end(stats);
        }
    }
}

/// Fan every callback out to two observers, `A` first.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_tick_start(&mut self, now: Instant) {
        self.0.on_tick_start(now);
        self.1.on_tick_start(now);
    }

    fn on_board(&mut self, now: Instant, car: ElevatorId, passenger: &Passenger) {
        self.0.on_board(now, car, passenger);
        self.1.on_board(now, car, passenger);
    }

    fn on_disembark(&mut self, event: &DisembarkEvent<'_>) {
        self.0.on_disembark(event);
        self.1.on_disembark(event);
    }

    fn on_tick_end(&mut self, now: Instant, status: SimStatus) {
        self.0.on_tick_end(now, status);
        self.1.on_tick_end(now, status);
    }

    fn on_sim_end(&mut self, stats: &SimStatistics) {
        self.0.on_sim_end(stats);
        self.1.on_sim_end(stats);
    }
}
