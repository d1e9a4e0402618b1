//! Domain layer types and invariants.

pub mod calendar;
pub mod error;
pub mod schedule;
pub mod types;
