//! Trello API client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use urlencoding::encode;

use crate::adapters::http::{handle_empty_response, handle_response};
use crate::domain::ports::{BoardCard, BoardClient, BoardLabel, BoardLane};
use crate::error::BoardError;

/// Card fields requested from every card endpoint
const CARD_FIELDS: &str = "name,desc,idList,idLabels";

/// Upper bound Trello accepts for `cards_limit` on search
const SEARCH_CARDS_LIMIT: &str = "1000";

/// Implementation of the Trello API client, scoped to one board
pub struct TrelloClientImpl {
    http: Client,
    base_url: String,
    api_key: String,
    token: String,
    board_id: String,
}

impl TrelloClientImpl {
    pub fn new(base_url: String, api_key: String, token: String, board_id: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            token,
            board_id,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/1{}", self.base_url, path)
    }

    fn auth(&self) -> [(&str, &str); 2] {
        [("key", self.api_key.as_str()), ("token", self.token.as_str())]
    }

    /// PUT a single field on a card
    async fn update_card(&self, card_id: &str, field: &str, value: &str) -> Result<(), BoardError> {
        let resp = self
            .http
            .put(self.api_url(&format!("/cards/{}", encode(card_id))))
            .query(&self.auth())
            .query(&[(field, value)])
            .send()
            .await?;

        handle_empty_response(resp).await
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    cards: Vec<BoardCard>,
}

#[async_trait]
impl BoardClient for TrelloClientImpl {
    async fn list_lanes(&self) -> Result<Vec<BoardLane>, BoardError> {
        let resp = self
            .http
            .get(self.api_url(&format!("/boards/{}/lists", encode(&self.board_id))))
            .query(&self.auth())
            .query(&[("fields", "name")])
            .send()
            .await?;

        handle_response(resp).await
    }

    async fn list_cards(&self, lane_id: &str) -> Result<Vec<BoardCard>, BoardError> {
        let resp = self
            .http
            .get(self.api_url(&format!("/lists/{}/cards", encode(lane_id))))
            .query(&self.auth())
            .query(&[("fields", CARD_FIELDS)])
            .send()
            .await?;

        handle_response(resp).await
    }

    async fn list_labels(&self) -> Result<Vec<BoardLabel>, BoardError> {
        let resp = self
            .http
            .get(self.api_url(&format!("/boards/{}/labels", encode(&self.board_id))))
            .query(&self.auth())
            .send()
            .await?;

        handle_response(resp).await
    }

    async fn search_cards(&self, query: &str) -> Result<Vec<BoardCard>, BoardError> {
        let resp = self
            .http
            .get(self.api_url("/search"))
            .query(&self.auth())
            .query(&[
                ("query", query),
                ("idBoards", self.board_id.as_str()),
                ("modelTypes", "cards"),
                ("card_fields", CARD_FIELDS),
                ("cards_limit", SEARCH_CARDS_LIMIT),
            ])
            .send()
            .await?;

        let results: SearchResponse = handle_response::<_, BoardError>(resp).await?;
        Ok(results.cards)
    }

    async fn add_label(&self, card_id: &str, label_id: &str) -> Result<(), BoardError> {
        let resp = self
            .http
            .post(self.api_url(&format!("/cards/{}/idLabels", encode(card_id))))
            .query(&self.auth())
            .query(&[("value", label_id)])
            .send()
            .await?;

        handle_empty_response(resp).await
    }

    async fn set_due_complete(&self, card_id: &str) -> Result<(), BoardError> {
        self.update_card(card_id, "dueComplete", "true").await
    }

    async fn move_card(&self, card_id: &str, lane_id: &str) -> Result<(), BoardError> {
        self.update_card(card_id, "idList", lane_id).await
    }

    async fn move_to_top(&self, card_id: &str) -> Result<(), BoardError> {
        self.update_card(card_id, "pos", "top").await
    }
}
