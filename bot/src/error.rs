//! Unified error types for the flair bot
//!
//! This module defines error types for each layer:
//! - `BoardError`: Trello API client errors
//! - `ForumError`: Reddit API client errors
//! - `CatalogError`: lookups against the catalogs loaded at the start of a run
//! - `LabelError`: ticket classification inconsistencies, reported but never fatal
//! - `ConfigError`: missing or malformed settings
//! - `AppError`: errors that abort a run (board, forum and catalog failures)

use thiserror::Error;

/// Trello API client errors
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized - invalid key or token")]
    Unauthorized,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Reddit API client errors
#[derive(Debug, Error)]
pub enum ForumError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized - invalid or expired access token")]
    Unauthorized,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Lookup failures against the template, label and lane catalogs
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("No flair template named '{0}'")]
    TemplateNotFound(String),

    #[error("No board label named '{0}'")]
    LabelNotFound(String),

    #[error("No board list named '{0}'")]
    LaneNotFound(String),
}

/// Ticket classification errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LabelError {
    #[error("Role count {0} is outside the supported 1-4 range")]
    RoleCountOutOfRange(usize),
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Application layer errors - anything that aborts a run
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Board error: {0}")]
    Board(#[from] BoardError),

    #[error("Forum error: {0}")]
    Forum(#[from] ForumError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}
