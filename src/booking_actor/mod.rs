//! Bookings are served read-only.

pub mod entity;
pub mod error;

pub use error::*;
