use lift_core::ElevatorId;
use thiserror::Error;

use crate::MotionState;

/// Invariant violations inside a car.  Any of these means the dispatch or
/// state-machine logic is wrong; the run cannot continue.
#[derive(Debug, Error)]
pub enum CarError {
    #[error("{car} moved to floor {floor}, above the top floor {max}")]
    AboveTop { car: ElevatorId, floor: i32, max: i32 },

    #[error("{car} moved to floor {floor}, below the base floor {min}")]
    BelowBase { car: ElevatorId, floor: i32, min: i32 },

    #[error("{car} cannot estimate {estimate} while {state}")]
    WrongState {
        car:      ElevatorId,
        state:    MotionState,
        estimate: &'static str,
    },

    #[error("{car} cannot start on floor {floor}: outside [{min}, {max}]")]
    StartFloor { car: ElevatorId, floor: i32, min: i32, max: i32 },

    #[error("{0} has zero capacity")]
    ZeroCapacity(ElevatorId),
}

pub type CarResult<T> = Result<T, CarError>;
