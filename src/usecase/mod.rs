//! Usecase layer: application workflows + events.

pub mod analyze;
pub mod event;
pub mod stats;
