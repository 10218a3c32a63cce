use flock_core::{FlockError, GroupId};
use flock_steer::SteerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("group {0} not found")]
    GroupNotFound(GroupId),

    #[error("steering dispatch failed: {0}")]
    Dispatch(#[from] SteerError),
}

impl From<FlockError> for SimError {
    fn from(err: FlockError) -> Self {
        match err {
            FlockError::Config(msg) => SimError::Config(msg),
            FlockError::GroupNotFound(id) => SimError::GroupNotFound(id),
        }
    }
}

pub type SimResult<T> = Result<T, SimError>;
