use lift_car::Elevator;
use lift_core::{ElevatorId, Instant, Passenger};

use crate::{DispatchError, DispatchPolicy, DispatchResult};

/// Rotate through the fleet in declaration order.
///
/// The index is incremented before each lookup, so the very first passenger
/// goes to the second car: with four cars the sequence is 2, 3, 4, 1, 2, …
#[derive(Clone, Debug, Default)]
pub struct RoundRobin {
    index: usize,
}

impl RoundRobin {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DispatchPolicy for RoundRobin {
    fn initialize(&mut self, _fleet: &[Elevator]) {
        self.index = 0;
    }

    fn select(&mut self, fleet: &[Elevator], _: &Passenger, _: Instant) -> DispatchResult<ElevatorId> {
        if fleet.is_empty() {
            return Err(DispatchError::EmptyFleet);
        }
        self.index = self.index.wrapping_add(1);
        Ok(fleet[self.index % fleet.len()].id())
    }

    fn name(&self) -> &str {
        "round-robin"
    }
}
