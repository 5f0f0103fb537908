//! System orchestration, startup, and shutdown logic.

pub mod dashboard_system;
pub mod error;
pub mod seed;
pub mod telemetry;

pub use dashboard_system::*;
pub use error::*;
pub use seed::*;
pub use telemetry::*;
