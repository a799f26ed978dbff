//! The `DispatchPolicy` trait — the engine's extension point for car choice.

use lift_car::Elevator;
use lift_core::{ElevatorId, Instant, Passenger};

use crate::DispatchResult;

/// Pluggable dispatch strategy.
///
/// The engine calls [`initialize`][Self::initialize] once with the freshly
/// built fleet, then [`select`][Self::select] once per arriving passenger, in
/// passenger-list order, during step 4 of each tick.  The fleet is passed in
/// declaration order (car 1 first) on every call.
///
/// `select` must return the id of a car in `fleet`; the engine rejects
/// anything else.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysFirst;
///
/// impl DispatchPolicy for AlwaysFirst {
///     fn select(&mut self, fleet: &[Elevator], _: &Passenger, _: Instant) -> DispatchResult<ElevatorId> {
///         fleet.first().map(Elevator::id).ok_or(DispatchError::EmptyFleet)
///     }
///     fn name(&self) -> &str { "always-first" }
/// }
/// ```
pub trait DispatchPolicy: Send + 'static {
    /// Called once before the first tick.
    ///
    /// Default: does nothing.
    fn initialize(&mut self, _fleet: &[Elevator]) {}

    /// Pick the car that will serve `passenger`, who arrived at `now`.
    fn select(
        &mut self,
        fleet:     &[Elevator],
        passenger: &Passenger,
        now:       Instant,
    ) -> DispatchResult<ElevatorId>;

    /// Short name used in reports.
    fn name(&self) -> &str;
}

impl<P: DispatchPolicy + ?Sized> DispatchPolicy for Box<P> {
    fn initialize(&mut self, fleet: &[Elevator]) {
        (**self).initialize(fleet)
    }

    fn select(
        &mut self,
        fleet:     &[Elevator],
        passenger: &Passenger,
        now:       Instant,
    ) -> DispatchResult<ElevatorId> {
        (**self).select(fleet, passenger, now)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
