use lift_car::Elevator;
use lift_core::{ElevatorId, Instant, Passenger, Secs};
use tracing::trace;

use crate::{DispatchError, DispatchPolicy, DispatchResult};

/// Send each passenger to the car with the smallest estimated wait.
///
/// A car's cost is its time to reach base plus the round-trip cost of its
/// lobby queue with the passenger appended.  Cars are compared in fleet
/// order with a strict `<`, so the first minimum wins a tie.
#[derive(Clone, Debug, Default)]
pub struct LeastEstimatedWait;

impl LeastEstimatedWait {
    pub fn new() -> Self {
        Self
    }

    /// The cost this policy assigns to `car` for `passenger` at `now`.
    pub fn cost(car: &Elevator, passenger: &Passenger, now: Instant) -> DispatchResult<Secs> {
        Ok(car.estimate_time_to_base(now)? + car.estimate_queue_delay(passenger))
    }
}

impl DispatchPolicy for LeastEstimatedWait {
    fn select(&mut self, fleet: &[Elevator], passenger: &Passenger, now: Instant) -> DispatchResult<ElevatorId> {
        let mut best: Option<(ElevatorId, Secs)> = None;
        for car in fleet {
            let cost = Self::cost(car, passenger, now)?;
            trace!(car = %car.id(), passenger = %passenger.id, %cost, "estimated wait");
            match best {
                Some((_, best_cost)) if cost >= best_cost => {}
                _ => best = Some((car.id(), cost)),
            }
        }
        best.map(|(id, _)| id).ok_or(DispatchError::EmptyFleet)
    }

    fn name(&self) -> &str {
        "least-wait"
    }
}
