//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models for requests, templates and tickets
//! - `ports`: Trait definitions for the board and forum APIs

pub mod entities;
pub mod ports;
