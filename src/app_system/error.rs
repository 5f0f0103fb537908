use thiserror::Error;

use crate::booking_actor::BookingError;
use crate::package_actor::PackageError;
use crate::user_actor::UserError;

/// Any failure surfaced to the dashboard by the API layer.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DashboardError {
    #[error(transparent)]
    Users(#[from] UserError),
    #[error(transparent)]
    Packages(#[from] PackageError),
    #[error(transparent)]
    Bookings(#[from] BookingError),
}

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    TaskFailed(String),
}
