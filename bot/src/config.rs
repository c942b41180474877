use std::env;
use std::time::Duration;

use crate::error::ConfigError;

/// Delay between consecutive tickets when `PACING_SECS` is unset
const DEFAULT_PACING_SECS: u64 = 3;

#[derive(Clone)]
pub struct Config {
    pub trello_api_url: String,
    pub trello_api_key: String,
    pub trello_token: String,
    /// Board holding the flair request cards
    pub trello_board_id: String,
    pub reddit_auth_url: String,
    pub reddit_api_url: String,
    pub reddit_client_id: String,
    pub reddit_client_secret: String,
    pub reddit_username: String,
    pub reddit_password: String,
    pub reddit_user_agent: String,
    /// Community whose flair is managed
    pub subreddit: String,
    /// Account that receives the end-of-run error tally
    pub operator_user: String,
    pub pending_lane: String,
    pub completed_lane: String,
    pub unable_lane: String,
    pub pacing: Duration,
    /// Intake form linked from the emoji mismatch message
    pub flair_form_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            trello_api_url: env::var("TRELLO_API_URL")
                .unwrap_or_else(|_| "https://api.trello.com".to_string()),
            trello_api_key: required("TRELLO_API_KEY")?,
            trello_token: required("TRELLO_TOKEN")?,
            trello_board_id: required("TRELLO_BOARD_ID")?,
            reddit_auth_url: env::var("REDDIT_AUTH_URL")
                .unwrap_or_else(|_| "https://www.reddit.com".to_string()),
            reddit_api_url: env::var("REDDIT_API_URL")
                .unwrap_or_else(|_| "https://oauth.reddit.com".to_string()),
            reddit_client_id: required("REDDIT_CLIENT_ID")?,
            reddit_client_secret: required("REDDIT_CLIENT_SECRET")?,
            reddit_username: required("REDDIT_USERNAME")?,
            reddit_password: required("REDDIT_PASSWORD")?,
            reddit_user_agent: required("REDDIT_USER_AGENT")?,
            subreddit: required("REDDIT_SUBREDDIT")?,
            operator_user: required("REDDIT_OPERATOR_USER")?,
            pending_lane: env::var("PENDING_LANE").unwrap_or_else(|_| "New Requests".to_string()),
            completed_lane: env::var("COMPLETED_LANE")
                .unwrap_or_else(|_| "Completed".to_string()),
            unable_lane: env::var("UNABLE_LANE")
                .unwrap_or_else(|_| "Unable to Complete".to_string()),
            pacing: parse_pacing(env::var("PACING_SECS").ok())?,
            flair_form_url: env::var("FLAIR_FORM_URL")
                .unwrap_or_else(|_| "https://marchingband.page.link/flair".to_string()),
        })
    }
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key)),
    }
}

fn parse_pacing(raw: Option<String>) -> Result<Duration, ConfigError> {
    match raw {
        None => Ok(Duration::from_secs(DEFAULT_PACING_SECS)),
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| ConfigError::Invalid {
                key: "PACING_SECS",
                value,
            }),
    }
}
