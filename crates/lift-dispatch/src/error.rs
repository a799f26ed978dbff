use lift_car::CarError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("cannot dispatch to an empty fleet")]
    EmptyFleet,

    #[error("unknown dispatch policy {0:?} (expected round-robin, random, or least-wait)")]
    UnknownPolicy(String),

    #[error(transparent)]
    Car(#[from] CarError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
