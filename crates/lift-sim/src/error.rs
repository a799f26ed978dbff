use lift_car::CarError;
use lift_core::{CoreError, ElevatorId, Instant, PassengerId, Secs};
use lift_dispatch::DispatchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("no passengers to simulate")]
    EmptyPassengers,

    #[error("no arrival instant could be derived from the passenger list")]
    NoInitialInstant,

    #[error("passenger at index {index} has id {id}; ids must match list positions")]
    PassengerIndex { index: usize, id: PassengerId },

    #[error("{0} already has recorded timestamps; pass a fresh copy per run")]
    StalePassenger(PassengerId),

    #[error("{passenger} is bound for floor {floor}, outside [{min}, {max}]")]
    DestinationOutOfRange {
        passenger: PassengerId,
        floor:     i32,
        min:       i32,
        max:       i32,
    },

    #[error("{passenger} arrives at {arrival}, which is not on the {tick} tick grid")]
    ArrivalOffGrid {
        passenger: PassengerId,
        arrival:   Instant,
        tick:      Secs,
    },

    #[error("cannot process {now}: the run already finished at {finished}")]
    SteppedPastFinish { now: Instant, finished: Instant },

    #[error("dispatch chose {0}, which is not in the fleet")]
    UnknownElevator(ElevatorId),

    #[error("{0} is not in the passenger list")]
    UnknownPassenger(PassengerId),

    #[error(transparent)]
    Car(#[from] CarError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

pub type SimResult<T> = Result<T, SimError>;
