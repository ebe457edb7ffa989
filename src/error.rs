use thiserror::Error;

pub type RingCapResult<T, E = RingCapError> = Result<T, E>;

#[derive(Debug, Error)]
pub enum RingCapError {
    #[error("Invalid capacity: {0}, must be at least 1")]
    InvalidCapacity(usize),
}
