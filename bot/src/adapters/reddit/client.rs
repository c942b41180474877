//! Reddit API client implementation
//!
//! Authenticates once with the password grant (script app) and reuses the
//! bearer token for the rest of the run.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde::Deserialize;
use urlencoding::encode;

use crate::adapters::http::handle_response;
use crate::domain::ports::{ForumClient, ForumFlairTemplate};
use crate::error::ForumError;

/// Key of Reddit's global emoji set in the emoji listing
const SNOOMOJI_KEY: &str = "snoomojis";

/// Credentials and endpoints for a Reddit script app
#[derive(Debug, Clone)]
pub struct RedditSettings {
    pub auth_url: String,
    pub api_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub username: String,
    pub password: String,
    pub user_agent: String,
    pub subreddit: String,
}

/// Implementation of the Reddit API client, scoped to one subreddit
pub struct RedditClientImpl {
    http: Client,
    base_url: String,
    subreddit: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error: Option<String>,
}

#[derive(Deserialize)]
struct AccountResponse {
    data: AccountData,
}

#[derive(Deserialize)]
struct AccountData {
    /// Absent for suspended accounts
    id: Option<String>,
}

/// Envelope returned by form endpoints called with `api_type=json`
#[derive(Deserialize)]
struct JsonEnvelope {
    json: JsonErrors,
}

#[derive(Deserialize)]
struct JsonErrors {
    #[serde(default)]
    errors: Vec<serde_json::Value>,
}

impl RedditClientImpl {
    /// Obtain an access token and build an authenticated client
    pub async fn connect(settings: &RedditSettings) -> Result<Self, ForumError> {
        let auth_http = Client::builder().user_agent(&settings.user_agent).build()?;

        let resp = auth_http
            .post(format!(
                "{}/api/v1/access_token",
                settings.auth_url.trim_end_matches('/')
            ))
            .basic_auth(&settings.client_id, Some(&settings.client_secret))
            .form(&[
                ("grant_type", "password"),
                ("username", settings.username.as_str()),
                ("password", settings.password.as_str()),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(ForumError::Auth(format!(
                "token request returned {}",
                resp.status()
            )));
        }

        let token: TokenResponse = resp
            .json()
            .await
            .map_err(|e| ForumError::Deserialization(e.to_string()))?;
        let access_token = match (token.access_token, token.error) {
            (Some(t), _) => t,
            (None, Some(e)) => return Err(ForumError::Auth(e)),
            (None, None) => return Err(ForumError::Auth("no access token issued".to_string())),
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", access_token))
                .map_err(|e| ForumError::Auth(e.to_string()))?,
        );

        let http = Client::builder()
            .user_agent(&settings.user_agent)
            .default_headers(headers)
            .build()?;

        tracing::info!(user = %settings.username, subreddit = %settings.subreddit, "Authenticated with Reddit");

        Ok(Self {
            http,
            base_url: settings.api_url.trim_end_matches('/').to_string(),
            subreddit: settings.subreddit.clone(),
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Form endpoints report failures inside a 200 body
    async fn handle_json_errors(&self, response: reqwest::Response) -> Result<(), ForumError> {
        let envelope: JsonEnvelope = handle_response::<_, ForumError>(response).await?;
        if envelope.json.errors.is_empty() {
            Ok(())
        } else {
            Err(ForumError::Api {
                status: 200,
                message: serde_json::Value::Array(envelope.json.errors).to_string(),
            })
        }
    }
}

/// Flatten the emoji listing into subreddit emoji names, skipping the global set
fn custom_emoji_names(listing: HashMap<String, HashMap<String, serde_json::Value>>) -> Vec<String> {
    let mut names: Vec<String> = listing
        .into_iter()
        .filter(|(key, _)| key != SNOOMOJI_KEY)
        .flat_map(|(_, emojis)| emojis.into_keys())
        .collect();
    names.sort();
    names
}

#[async_trait]
impl ForumClient for RedditClientImpl {
    async fn list_flair_templates(&self) -> Result<Vec<ForumFlairTemplate>, ForumError> {
        let resp = self
            .http
            .get(self.api_url(&format!("/r/{}/api/user_flair_v2", encode(&self.subreddit))))
            .send()
            .await?;

        handle_response(resp).await
    }

    async fn list_custom_emojis(&self) -> Result<Vec<String>, ForumError> {
        let resp = self
            .http
            .get(self.api_url(&format!("/api/v1/{}/emojis/all", encode(&self.subreddit))))
            .send()
            .await?;

        let listing: HashMap<String, HashMap<String, serde_json::Value>> =
            handle_response::<_, ForumError>(resp).await?;
        Ok(custom_emoji_names(listing))
    }

    async fn account_id(&self, username: &str) -> Result<String, ForumError> {
        let resp = self
            .http
            .get(self.api_url(&format!("/user/{}/about", encode(username))))
            .send()
            .await?;

        if resp.status().as_u16() == 404 {
            return Err(ForumError::UserNotFound(username.to_string()));
        }

        let account: AccountResponse = handle_response::<_, ForumError>(resp).await?;
        account
            .data
            .id
            .ok_or_else(|| ForumError::UserNotFound(username.to_string()))
    }

    async fn set_user_flair(
        &self,
        username: &str,
        text: &str,
        template_id: &str,
    ) -> Result<(), ForumError> {
        let resp = self
            .http
            .post(self.api_url(&format!("/r/{}/api/selectflair", encode(&self.subreddit))))
            .form(&[
                ("api_type", "json"),
                ("name", username),
                ("text", text),
                ("flair_template_id", template_id),
            ])
            .send()
            .await?;

        self.handle_json_errors(resp).await
    }

    async fn send_direct_message(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), ForumError> {
        let resp = self
            .http
            .post(self.api_url("/api/compose"))
            .form(&[
                ("api_type", "json"),
                ("to", to),
                ("subject", subject),
                ("text", body),
            ])
            .send()
            .await?;

        self.handle_json_errors(resp).await
    }

    async fn send_modmail(&self, to: &str, subject: &str, body: &str) -> Result<(), ForumError> {
        let resp = self
            .http
            .post(self.api_url("/api/mod/conversations"))
            .form(&[
                ("srName", self.subreddit.as_str()),
                ("to", to),
                ("subject", subject),
                ("body", body),
                ("isAuthorHidden", "false"),
            ])
            .send()
            .await?;

        let _conversation: serde_json::Value =
            handle_response::<_, ForumError>(resp).await?;
        Ok(())
    }
}
