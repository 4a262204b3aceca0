//! System composition and tracing setup.

pub mod user_system;
pub mod telemetry;

pub use user_system::*;
pub use telemetry::*;
