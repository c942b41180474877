//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod board;
pub mod forum;

pub use board::{BoardCard, BoardClient, BoardLabel, BoardLane};
pub use forum::{ForumClient, ForumFlairTemplate};
