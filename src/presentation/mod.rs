//! Presentation layer: view models and text templates for command output.

pub mod preview;
