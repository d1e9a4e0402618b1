//! Application services wiring configuration, the scheduling engine and output.

pub mod commands;
pub mod error;
pub mod output;
pub mod planner;
