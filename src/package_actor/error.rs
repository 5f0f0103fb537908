use thiserror::Error;

use crate::actor_framework::FrameworkError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PackageError {
    #[error("Package not found: {0}")]
    NotFound(String),
    #[error("Package validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for PackageError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => PackageError::NotFound(id),
            FrameworkError::Rejected(reason) => PackageError::ValidationError(reason),
            other => PackageError::ActorCommunicationError(other.to_string()),
        }
    }
}
