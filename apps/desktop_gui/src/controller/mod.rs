//! Controller layer: queued UI commands, their outcomes, and command orchestration.

pub mod commands;
pub mod events;
pub mod orchestration;
