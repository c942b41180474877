//! Forum client port trait
//!
//! Defines the subset of the Reddit API the bot relies on.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ForumError;

/// One element of a flair template's rich text.
///
/// Text elements carry `t`, emoji elements carry `a` (the `:code:` form).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RichTextElement {
    #[serde(rename = "e")]
    pub kind: String,
    #[serde(rename = "t", default)]
    pub text: Option<String>,
    #[serde(rename = "a", default)]
    pub emoji: Option<String>,
}

#[cfg(test)]
impl RichTextElement {
    pub fn text(t: &str) -> Self {
        Self {
            kind: "text".to_string(),
            text: Some(t.to_string()),
            emoji: None,
        }
    }

    pub fn emoji(a: &str) -> Self {
        Self {
            kind: "emoji".to_string(),
            text: None,
            emoji: Some(a.to_string()),
        }
    }
}

/// Subreddit user flair template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumFlairTemplate {
    pub id: String,
    #[serde(default)]
    pub richtext: Vec<RichTextElement>,
}

/// Port trait for forum operations
#[async_trait]
pub trait ForumClient: Send + Sync {
    /// User flair templates configured on the subreddit
    async fn list_flair_templates(&self) -> Result<Vec<ForumFlairTemplate>, ForumError>;

    /// Names of the subreddit's custom emoji
    async fn list_custom_emojis(&self) -> Result<Vec<String>, ForumError>;

    /// Resolve an account id; `ForumError::UserNotFound` if the account is gone
    async fn account_id(&self, username: &str) -> Result<String, ForumError>;

    /// Set a user's flair text and template
    async fn set_user_flair(
        &self,
        username: &str,
        text: &str,
        template_id: &str,
    ) -> Result<(), ForumError>;

    /// Private message from the bot account
    async fn send_direct_message(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), ForumError>;

    /// Start a modmail conversation with a user on behalf of the subreddit
    async fn send_modmail(&self, to: &str, subject: &str, body: &str) -> Result<(), ForumError>;
}
