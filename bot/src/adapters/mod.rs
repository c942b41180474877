//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod http;
pub mod reddit;
pub mod trello;

pub use reddit::{RedditClientImpl, RedditSettings};
pub use trello::TrelloClientImpl;
