//! Flair Bot
//!
//! Processes pending flair requests from a Trello board: composes each
//! member's flair, applies it on the subreddit and files the request card.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.
//!
//! Meant to be run once per invocation by an external scheduler.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;

#[cfg(test)]
mod test_utils;

use adapters::{RedditClientImpl, RedditSettings, TrelloClientImpl};
use app::{BatchRunner, LaneNames, RunOutcome, RunSettings};
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,flair_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting flair bot...");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Create adapters
    let board = Arc::new(TrelloClientImpl::new(
        config.trello_api_url.clone(),
        config.trello_api_key.clone(),
        config.trello_token.clone(),
        config.trello_board_id.clone(),
    ));

    let forum = Arc::new(
        RedditClientImpl::connect(&RedditSettings {
            auth_url: config.reddit_auth_url.clone(),
            api_url: config.reddit_api_url.clone(),
            client_id: config.reddit_client_id.clone(),
            client_secret: config.reddit_client_secret.clone(),
            username: config.reddit_username.clone(),
            password: config.reddit_password.clone(),
            user_agent: config.reddit_user_agent.clone(),
            subreddit: config.subreddit.clone(),
        })
        .await
        .context("Failed to authenticate with Reddit")?,
    );

    let runner = BatchRunner::new(
        board,
        forum,
        RunSettings {
            lanes: LaneNames {
                pending: config.pending_lane.clone(),
                completed: config.completed_lane.clone(),
                unable: config.unable_lane.clone(),
            },
            pacing: config.pacing,
            form_url: config.flair_form_url.clone(),
            subreddit: config.subreddit.clone(),
            operator_user: config.operator_user.clone(),
        },
    );

    match runner.run().await.context("Flair run aborted")? {
        RunOutcome::NoNewRequests => {
            tracing::info!("No new requests!");
        }
        RunOutcome::Processed(summary) => {
            tracing::info!(
                processed = summary.processed,
                errors = summary.errors,
                "Completed processing {} request(s)",
                summary.processed
            );
        }
    }

    Ok(())
}
