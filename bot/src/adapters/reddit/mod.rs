//! Reddit adapter
//!
//! Implementation of the forum client against the Reddit OAuth API.

pub mod client;

pub use client::{RedditClientImpl, RedditSettings};
