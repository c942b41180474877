//! Application layer
//!
//! Contains the flair pipeline and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod batch_runner;
pub mod catalog_loader;
pub mod flair_composer;
pub mod notifications;
pub mod ticket_labeler;
pub mod ticket_parser;

pub use batch_runner::{BatchRunner, RunOutcome, RunSettings};
pub use catalog_loader::LaneNames;
