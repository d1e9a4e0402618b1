//! Infrastructure adapters and runtime bootstrap.

pub mod error;
pub mod items;
pub mod telemetry;
