//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use super::fixtures::{label_id, test_forum_templates, STANDARD_LABELS, STANDARD_TEMPLATES};
use crate::domain::ports::{
    BoardCard, BoardClient, BoardLabel, BoardLane, ForumClient, ForumFlairTemplate,
};
use crate::error::{BoardError, ForumError};

// ============================================================================
// In-Memory Board
// ============================================================================

/// Board whose cards live in a single ordered vector; a card's list is its
/// `id_list` and its position is its index among cards of that list
#[derive(Default)]
pub struct InMemoryBoard {
    lanes: Vec<BoardLane>,
    labels: Vec<BoardLabel>,
    cards: Arc<RwLock<Vec<BoardCard>>>,
    due_complete: Arc<RwLock<HashSet<String>>>,
}

impl InMemoryBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Board with the New Requests, Completed and Unable to Complete lists
    /// and every standard label
    pub fn with_standard_lanes() -> Self {
        let mut board = Self::new()
            .with_lane("lane-archive", "Archive")
            .with_lane("lane-new", "New Requests")
            .with_lane("lane-done", "Completed")
            .with_lane("lane-unable", "Unable to Complete");
        for name in STANDARD_LABELS {
            board = board.with_label(&label_id(name), name);
        }
        board
    }

    pub fn with_lane(mut self, id: &str, name: &str) -> Self {
        self.lanes.push(BoardLane {
            id: id.to_string(),
            name: name.to_string(),
        });
        self
    }

    pub fn with_label(mut self, id: &str, name: &str) -> Self {
        self.labels.push(BoardLabel {
            id: id.to_string(),
            name: name.to_string(),
            color: None,
        });
        self
    }

    /// Append a card to the bottom of a list
    pub fn with_card(self, lane_id: &str, id: &str, name: &str, desc: &str) -> Self {
        self.cards.write().unwrap().push(BoardCard {
            id: id.to_string(),
            name: name.to_string(),
            desc: desc.to_string(),
            id_list: lane_id.to_string(),
            id_labels: Vec::new(),
        });
        self
    }

    /// Names of the labels on a card, in the order they were added
    pub fn label_names(&self, card_id: &str) -> Vec<String> {
        let by_id: HashMap<&str, &str> = self
            .labels
            .iter()
            .map(|l| (l.id.as_str(), l.name.as_str()))
            .collect();
        self.cards
            .read()
            .unwrap()
            .iter()
            .find(|c| c.id == card_id)
            .map(|c| {
                c.id_labels
                    .iter()
                    .map(|id| by_id.get(id.as_str()).unwrap_or(&"?").to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn is_due_complete(&self, card_id: &str) -> bool {
        self.due_complete.read().unwrap().contains(card_id)
    }

    /// Card ids in a list, top first
    pub fn lane_card_ids(&self, lane_id: &str) -> Vec<String> {
        self.cards
            .read()
            .unwrap()
            .iter()
            .filter(|c| c.id_list == lane_id)
            .map(|c| c.id.clone())
            .collect()
    }

    fn with_card_mut<T>(
        &self,
        card_id: &str,
        f: impl FnOnce(&mut BoardCard) -> T,
    ) -> Result<T, BoardError> {
        let mut cards = self.cards.write().unwrap();
        cards
            .iter_mut()
            .find(|c| c.id == card_id)
            .map(f)
            .ok_or_else(|| BoardError::Api {
                status: 404,
                message: format!("card {} not found", card_id),
            })
    }
}

#[async_trait]
impl BoardClient for InMemoryBoard {
    async fn list_lanes(&self) -> Result<Vec<BoardLane>, BoardError> {
        Ok(self.lanes.clone())
    }

    async fn list_cards(&self, lane_id: &str) -> Result<Vec<BoardCard>, BoardError> {
        Ok(self
            .cards
            .read()
            .unwrap()
            .iter()
            .filter(|c| c.id_list == lane_id)
            .cloned()
            .collect())
    }

    async fn list_labels(&self) -> Result<Vec<BoardLabel>, BoardError> {
        Ok(self.labels.clone())
    }

    /// Supports the `name:"<phrase>"` form only
    async fn search_cards(&self, query: &str) -> Result<Vec<BoardCard>, BoardError> {
        let phrase = query
            .strip_prefix("name:")
            .unwrap_or(query)
            .trim_matches('"');
        Ok(self
            .cards
            .read()
            .unwrap()
            .iter()
            .filter(|c| c.name.contains(phrase))
            .cloned()
            .collect())
    }

    async fn add_label(&self, card_id: &str, label_id: &str) -> Result<(), BoardError> {
        self.with_card_mut(card_id, |c| c.id_labels.push(label_id.to_string()))
    }

    async fn set_due_complete(&self, card_id: &str) -> Result<(), BoardError> {
        self.with_card_mut(card_id, |_| ())?;
        self.due_complete
            .write()
            .unwrap()
            .insert(card_id.to_string());
        Ok(())
    }

    async fn move_card(&self, card_id: &str, lane_id: &str) -> Result<(), BoardError> {
        self.with_card_mut(card_id, |c| c.id_list = lane_id.to_string())
    }

    async fn move_to_top(&self, card_id: &str) -> Result<(), BoardError> {
        let mut cards = self.cards.write().unwrap();
        let index = cards
            .iter()
            .position(|c| c.id == card_id)
            .ok_or_else(|| BoardError::Api {
                status: 404,
                message: format!("card {} not found", card_id),
            })?;
        let card = cards.remove(index);
        cards.insert(0, card);
        Ok(())
    }
}

// ============================================================================
// Mock Forum Client
// ============================================================================

/// A message or modmail captured by `MockForumClient`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Default)]
pub struct MockForumClient {
    templates: Vec<ForumFlairTemplate>,
    emojis: Vec<String>,
    missing_users: HashSet<String>,
    fail_flair: bool,
    fail_modmail: bool,
    /// (username, text, template id)
    flairs: Arc<RwLock<Vec<(String, String, String)>>>,
    messages: Arc<RwLock<Vec<SentMessage>>>,
    modmails: Arc<RwLock<Vec<SentMessage>>>,
    lookups: Arc<RwLock<Vec<String>>>,
}

impl MockForumClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forum configured with the standard templates and matching emoji
    pub fn with_standard_templates() -> Self {
        let emojis: Vec<&str> = STANDARD_TEMPLATES
            .iter()
            .map(|(_, code)| code.trim_matches(':'))
            .collect();
        Self::new()
            .with_templates(test_forum_templates())
            .with_emojis(&emojis)
    }

    pub fn with_templates(mut self, templates: Vec<ForumFlairTemplate>) -> Self {
        self.templates = templates;
        self
    }

    pub fn with_emojis(mut self, names: &[&str]) -> Self {
        self.emojis = names.iter().map(|n| n.to_string()).collect();
        self
    }

    /// Make account lookups for this user fail with not found
    pub fn with_missing_user(mut self, username: &str) -> Self {
        self.missing_users.insert(username.to_string());
        self
    }

    pub fn with_failing_flair(mut self) -> Self {
        self.fail_flair = true;
        self
    }

    pub fn with_failing_modmail(mut self) -> Self {
        self.fail_modmail = true;
        self
    }

    pub fn flairs(&self) -> Vec<(String, String, String)> {
        self.flairs.read().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<SentMessage> {
        self.messages.read().unwrap().clone()
    }

    pub fn modmails(&self) -> Vec<SentMessage> {
        self.modmails.read().unwrap().clone()
    }

    /// Usernames passed to `account_id`, in call order
    pub fn account_lookups(&self) -> Vec<String> {
        self.lookups.read().unwrap().clone()
    }

    fn mock_failure() -> ForumError {
        ForumError::Api {
            status: 500,
            message: "Mock failure".to_string(),
        }
    }
}

#[async_trait]
impl ForumClient for MockForumClient {
    async fn list_flair_templates(&self) -> Result<Vec<ForumFlairTemplate>, ForumError> {
        Ok(self.templates.clone())
    }

    async fn list_custom_emojis(&self) -> Result<Vec<String>, ForumError> {
        Ok(self.emojis.clone())
    }

    async fn account_id(&self, username: &str) -> Result<String, ForumError> {
        self.lookups.write().unwrap().push(username.to_string());
        if self.missing_users.contains(username) {
            return Err(ForumError::UserNotFound(username.to_string()));
        }
        Ok(format!("t2_{}", username))
    }

    async fn set_user_flair(
        &self,
        username: &str,
        text: &str,
        template_id: &str,
    ) -> Result<(), ForumError> {
        if self.fail_flair {
            return Err(Self::mock_failure());
        }
        self.flairs.write().unwrap().push((
            username.to_string(),
            text.to_string(),
            template_id.to_string(),
        ));
        Ok(())
    }

    async fn send_direct_message(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), ForumError> {
        self.messages.write().unwrap().push(SentMessage {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }

    async fn send_modmail(&self, to: &str, subject: &str, body: &str) -> Result<(), ForumError> {
        if self.fail_modmail {
            return Err(Self::mock_failure());
        }
        self.modmails.write().unwrap().push(SentMessage {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}
