use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArrivalsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("arrivals CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("more than {0} arrivals; passenger ids are exhausted")]
    TooManyPassengers(usize),
}

pub type ArrivalsResult<T> = Result<T, ArrivalsError>;
