//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The mocks are hand-written rather than generated so tests can seed board
//! and forum state directly and inspect what the bot did to it afterwards.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
