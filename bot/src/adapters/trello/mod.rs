//! Trello adapter
//!
//! Implementation of the board client against the Trello REST API.

pub mod client;

pub use client::TrelloClientImpl;
