//! Deterministic distribution of approved content across posting dates.
//!
//! The [`domain::schedule`] module holds the engine: weekly-pattern date
//! generation, slot assignment with overflow accounting, and grouping by date.
//! The remaining layers load configuration, read items and render plans.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
