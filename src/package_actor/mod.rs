//! Package-specific entity rules (pricing validation).

pub mod entity;
pub mod error;

pub use error::*;
