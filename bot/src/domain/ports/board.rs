//! Board client port trait
//!
//! Defines the subset of the Trello API the bot relies on.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entities::Ticket;
use crate::error::BoardError;

/// Helper to deserialize null as default (empty string, etc.)
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// Trello list representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardLane {
    pub id: String,
    pub name: String,
}

/// Trello card representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardCard {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub desc: String,
    #[serde(rename = "idList", default)]
    pub id_list: String,
    #[serde(rename = "idLabels", default, deserialize_with = "deserialize_null_default")]
    pub id_labels: Vec<String>,
}

impl From<BoardCard> for Ticket {
    fn from(card: BoardCard) -> Self {
        Ticket {
            id: card.id,
            title: card.name,
            description: card.desc,
        }
    }
}

/// Trello label representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardLabel {
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name: String,
    pub color: Option<String>,
}

/// Port trait for board operations
#[async_trait]
pub trait BoardClient: Send + Sync {
    /// Lists on the configured board, in board order
    async fn list_lanes(&self) -> Result<Vec<BoardLane>, BoardError>;

    /// Open cards in a list, in list order
    async fn list_cards(&self, lane_id: &str) -> Result<Vec<BoardCard>, BoardError>;

    /// Labels defined on the configured board
    async fn list_labels(&self) -> Result<Vec<BoardLabel>, BoardError>;

    /// Search cards on the configured board
    async fn search_cards(&self, query: &str) -> Result<Vec<BoardCard>, BoardError>;

    /// Attach an existing board label to a card
    async fn add_label(&self, card_id: &str, label_id: &str) -> Result<(), BoardError>;

    /// Mark the card's due date complete
    async fn set_due_complete(&self, card_id: &str) -> Result<(), BoardError>;

    /// Move a card to another list
    async fn move_card(&self, card_id: &str, lane_id: &str) -> Result<(), BoardError>;

    /// Put a card at the top of its list
    async fn move_to_top(&self, card_id: &str) -> Result<(), BoardError>;
}
