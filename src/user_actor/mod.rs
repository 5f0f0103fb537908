//! User-specific entity rules shared by trainer and client flavored operations.

pub mod entity;
pub mod error;

pub use error::*;
