use lift_car::Elevator;
use lift_core::{ElevatorId, Instant, Passenger, SimRng};

use crate::{DispatchError, DispatchPolicy, DispatchResult};

/// Pick a car uniformly at random for every passenger.
pub struct RandomChoice {
    rng: SimRng,
}

impl RandomChoice {
    /// Seeded when `seed` is `Some`, otherwise drawn from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SimRng::new(seed),
            None => SimRng::from_entropy(),
        };
        Self { rng }
    }

    pub fn with_rng(rng: SimRng) -> Self {
        Self { rng }
    }
}

impl DispatchPolicy for RandomChoice {
    fn select(&mut self, fleet: &[Elevator], _: &Passenger, _: Instant) -> DispatchResult<ElevatorId> {
        let i = self.rng.index(fleet.len()).ok_or(DispatchError::EmptyFleet)?;
        Ok(fleet[i].id())
    }

    fn name(&self) -> &str {
        "random"
    }
}
