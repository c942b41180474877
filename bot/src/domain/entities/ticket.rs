//! Ticket domain entity
//!
//! A flair request card on the Trello board. Tickets are created by the
//! intake form; this bot reads each one once and files it once.

use serde::Serialize;

/// A pending flair request card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    /// Trello card id
    pub id: String,
    /// Card title, e.g. "Flair Request for alice"
    pub title: String,
    /// Form submission text
    pub description: String,
}

/// Terminal lane a ticket is filed into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TicketLane {
    Completed,
    UnableToComplete,
}

impl std::fmt::Display for TicketLane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicketLane::Completed => write!(f, "completed"),
            TicketLane::UnableToComplete => write!(f, "unable_to_complete"),
        }
    }
}

/// Board list ids the bot works with, resolved once per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lanes {
    pub pending: String,
    pub completed: String,
    pub unable: String,
}

impl Lanes {
    pub fn id_for(&self, lane: TicketLane) -> &str {
        match lane {
            TicketLane::Completed => &self.completed,
            TicketLane::UnableToComplete => &self.unable,
        }
    }
}
