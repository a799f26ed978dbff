//! Fluent builder for constructing a [`Sim`].

use std::collections::BTreeMap;

use lift_car::{CarParams, Elevator};
use lift_core::{ElevatorId, Instant, Passenger, PassengerId, SimClock, SimConfig};
use lift_dispatch::DispatchPolicy;
use tracing::info;

use crate::{Sim, SimError, SimResult};

/// Builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — fleet size, floors, capacity, periods, tick
/// - `Vec<Passenger>` — ids must equal list positions (the arrivals loader
///   assigns them that way); no timestamps recorded yet
/// - `P: DispatchPolicy` — a concrete policy or a `Box<dyn DispatchPolicy>`
///
/// # Example
///
/// ```rust,ignore
/// let passengers = load_passengers_csv(path)?;
/// let mut sim = SimBuilder::new(config, passengers, LeastEstimatedWait::new()).build()?;
/// let stats = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: DispatchPolicy> {
    config:     SimConfig,
    passengers: Vec<Passenger>,
    policy:     P,
}

impl<P: DispatchPolicy> SimBuilder<P> {
    pub fn new(config: SimConfig, passengers: Vec<Passenger>, policy: P) -> Self {
        Self { config, passengers, policy }
    }

    /// Validate inputs, build the fleet, and return a ready-to-run [`Sim`].
    ///
    /// # Errors
    ///
    /// - [`SimError::Config`] if the configuration cannot produce a run
    /// - [`SimError::EmptyPassengers`] for an empty list
    /// - [`SimError::PassengerIndex`] / [`SimError::StalePassenger`] for a
    ///   list that was not freshly loaded
    /// - [`SimError::DestinationOutOfRange`] for a passenger no car can deliver
    /// - [`SimError::ArrivalOffGrid`] for an arrival the clock would step over
    pub fn build(mut self) -> SimResult<Sim<P>> {
        self.config.validate().map_err(|e| SimError::Config(e.to_string()))?;

        if self.passengers.is_empty() {
            return Err(SimError::EmptyPassengers);
        }

        // ── Validate passengers ───────────────────────────────────────────
        for (index, p) in self.passengers.iter().enumerate() {
            if p.id.index() != index {
                return Err(SimError::PassengerIndex { index, id: p.id });
            }
            if p.has_boarded() || p.has_disembarked() {
                return Err(SimError::StalePassenger(p.id));
            }
            if !self.config.serves(p.destination_floor) {
                return Err(SimError::DestinationOutOfRange {
                    passenger: p.id,
                    floor:     p.destination_floor,
                    min:       self.config.min_floor,
                    max:       self.config.max_floor,
                });
            }
        }

        let initial = self
            .passengers
            .iter()
            .map(|p| p.arrival)
            .min()
            .ok_or(SimError::NoInitialInstant)?;

        // Step 4 matches arrivals by exact instant, so every arrival must
        // land on a tick.
        let tick = self.config.tick();
        for p in &self.passengers {
            if (p.arrival - initial).as_i64() % tick.as_i64() != 0 {
                return Err(SimError::ArrivalOffGrid { passenger: p.id, arrival: p.arrival, tick });
            }
        }

        let mut arrivals: BTreeMap<Instant, Vec<PassengerId>> = BTreeMap::new();
        for p in &self.passengers {
            arrivals.entry(p.arrival).or_default().push(p.id);
        }

        // ── Build the fleet ───────────────────────────────────────────────
        let params = CarParams::from_config(&self.config);
        let start_floor = self.config.start_floor();
        let fleet = (1..=self.config.elevator_count)
            .map(|n| -> SimResult<Elevator> {
                let id = ElevatorId::try_from(n)
                    .map_err(|_| SimError::Config(format!("car number {n} exceeds the car id range")))?;
                Ok(Elevator::new(id, params, start_floor, initial)?)
            })
            .collect::<SimResult<Vec<_>>>()?;

        self.policy.initialize(&fleet);

        info!(
            policy     = self.policy.name(),
            elevators  = fleet.len(),
            passengers = self.passengers.len(),
            %initial,
            "simulation built"
        );

        let outstanding = self.passengers.len();
        Ok(Sim {
            clock:      SimClock::new(initial, tick),
            config:     self.config,
            fleet,
            passengers: self.passengers,
            policy:     self.policy,
            arrivals,
            outstanding,
            finished:   None,
        })
    }
}
