use thiserror::Error;

use crate::actor_framework::FrameworkError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookingError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for BookingError {
    fn from(err: FrameworkError) -> Self {
        BookingError::ActorCommunicationError(err.to_string())
    }
}
