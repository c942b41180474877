//! Batch runner
//!
//! Processes every pending flair request once, in board order:
//! - the requester account is checked first; gone accounts are filed as
//!   "User Not Found" without composing anything
//! - composed flair is applied on the forum and the ticket filed as completed
//! - rejected requests are filed as unable to complete, and emoji mismatches
//!   get a modmail explaining the options
//!
//! Tickets that end in any error state are tallied, and a single alert is
//! sent to the operator at the end of the run.

use std::sync::Arc;
use std::time::Duration;

use crate::app::catalog_loader::{
    load_emoji_set, load_label_catalog, load_template_catalog, resolve_lanes,
    templates_missing_emoji, LaneNames,
};
use crate::app::flair_composer::compose;
use crate::app::notifications::{
    emoji_mismatch_message, operator_alert_message, EMOJI_MISMATCH_SUBJECT, OPERATOR_ALERT_SUBJECT,
};
use crate::app::ticket_labeler::TicketLabeler;
use crate::app::ticket_parser::parse_ticket;
use crate::domain::entities::{
    FlairError, FlairErrorKind, FlairOutcome, FlairRequest, RequestLabel, TemplateCatalog, Ticket,
};
use crate::domain::ports::{BoardClient, ForumClient};
use crate::error::{AppError, CatalogError, ForumError, LabelError};

/// Settings for a run
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub lanes: LaneNames,
    /// Delay between consecutive tickets
    pub pacing: Duration,
    pub form_url: String,
    pub subreddit: String,
    /// Account that receives the error tally
    pub operator_user: String,
}

/// How one ticket ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketOutcome {
    /// Flair applied and ticket filed as completed
    Completed {
        text: String,
        labels: Vec<RequestLabel>,
        anomaly: Option<LabelError>,
    },
    /// Ticket filed as unable to complete with these labels
    Failed(Vec<RequestLabel>),
    /// Ticket left in the pending list because the catalog could not serve it
    Skipped(CatalogError),
}

impl TicketOutcome {
    /// Whether this ticket counts toward the operator's error tally
    pub fn is_error(&self) -> bool {
        match self {
            TicketOutcome::Completed { anomaly, .. } => anomaly.is_some(),
            TicketOutcome::Failed(_) | TicketOutcome::Skipped(_) => true,
        }
    }
}

/// Totals for a run that had work to do
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub completed: usize,
    pub failed: usize,
    pub skipped: usize,
    /// Tickets that ended in any error state
    pub errors: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &TicketOutcome) {
        self.processed += 1;
        match outcome {
            TicketOutcome::Completed { .. } => self.completed += 1,
            TicketOutcome::Failed(_) => self.failed += 1,
            TicketOutcome::Skipped(_) => self.skipped += 1,
        }
        if outcome.is_error() {
            self.errors += 1;
        }
    }
}

/// Result of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    NoNewRequests,
    Processed(RunSummary),
}

/// Service that drives one batch of flair requests
pub struct BatchRunner<B, F>
where
    B: BoardClient,
    F: ForumClient,
{
    board: Arc<B>,
    forum: Arc<F>,
    settings: RunSettings,
}

impl<B, F> BatchRunner<B, F>
where
    B: BoardClient,
    F: ForumClient,
{
    pub fn new(board: Arc<B>, forum: Arc<F>, settings: RunSettings) -> Self {
        Self {
            board,
            forum,
            settings,
        }
    }

    /// Process all pending tickets
    pub async fn run(&self) -> Result<RunOutcome, AppError> {
        let catalog = load_template_catalog(self.forum.as_ref()).await?;
        let emojis = load_emoji_set(self.forum.as_ref()).await?;
        for template in templates_missing_emoji(&catalog, &emojis) {
            tracing::warn!(
                name = %template.display_name,
                emoji = %template.emoji_code,
                "Flair template uses an emoji that is not a custom subreddit emoji"
            );
        }

        let labels = load_label_catalog(self.board.as_ref()).await?;
        let lanes = resolve_lanes(self.board.as_ref(), &self.settings.lanes).await?;
        let labeler = TicketLabeler::new(self.board.clone(), labels, lanes);

        let cards = self.board.list_cards(&labeler.lanes().pending).await?;
        if cards.is_empty() {
            tracing::info!("No new requests");
            return Ok(RunOutcome::NoNewRequests);
        }
        tracing::info!(count = cards.len(), "Processing new requests");

        let mut summary = RunSummary::default();
        for (index, card) in cards.into_iter().enumerate() {
            if index > 0 && !self.settings.pacing.is_zero() {
                tokio::time::sleep(self.settings.pacing).await;
            }

            let ticket = Ticket::from(card);
            let outcome = self.process_ticket(&ticket, &catalog, &labeler).await?;
            summary.record(&outcome);
        }

        if summary.errors > 0 {
            self.forum
                .send_direct_message(
                    &self.settings.operator_user,
                    OPERATOR_ALERT_SUBJECT,
                    &operator_alert_message(summary.errors),
                )
                .await?;
            tracing::info!(errors = summary.errors, operator = %self.settings.operator_user, "Sent error alert");
        }

        tracing::info!(
            processed = summary.processed,
            completed = summary.completed,
            failed = summary.failed,
            skipped = summary.skipped,
            errors = summary.errors,
            "All requests processed"
        );
        Ok(RunOutcome::Processed(summary))
    }

    /// Take one ticket from parsing to its terminal list
    pub async fn process_ticket(
        &self,
        ticket: &Ticket,
        catalog: &TemplateCatalog,
        labeler: &TicketLabeler<B>,
    ) -> Result<TicketOutcome, AppError> {
        tracing::info!(ticket = %ticket.id, title = %ticket.title, "Processing ticket");
        let request = parse_ticket(&ticket.description);

        if !self.account_exists(&request.username).await? {
            tracing::warn!(ticket = %ticket.id, username = %request.username, "Requester account not found");
            let labels = vec![RequestLabel::UserNotFound];
            labeler.mark_failed(ticket, &labels).await?;
            return Ok(TicketOutcome::Failed(labels));
        }

        let outcome = match compose(&request, catalog) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(ticket = %ticket.id, error = %e, "Cannot compose flair, leaving ticket pending");
                return Ok(TicketOutcome::Skipped(e));
            }
        };

        match outcome {
            FlairOutcome::Composed(flair) => {
                self.forum
                    .set_user_flair(&request.username, &flair.text, &flair.template.source_id)
                    .await?;
                tracing::info!(
                    username = %request.username,
                    text = %flair.text,
                    template_id = %flair.template.source_id,
                    "Set flair"
                );

                let report = labeler.mark_completed(ticket, &request).await?;
                Ok(TicketOutcome::Completed {
                    text: flair.text,
                    labels: report.labels,
                    anomaly: report.anomaly,
                })
            }
            FlairOutcome::Rejected(error) => {
                if error.has(FlairErrorKind::EmojiMismatch) {
                    self.notify_emoji_mismatch(&request, &error).await;
                }

                let labels: Vec<RequestLabel> =
                    error.kinds.iter().map(|&k| RequestLabel::Flair(k)).collect();
                labeler.mark_failed(ticket, &labels).await?;
                Ok(TicketOutcome::Failed(labels))
            }
        }
    }

    async fn account_exists(&self, username: &str) -> Result<bool, ForumError> {
        if username.is_empty() {
            return Ok(false);
        }
        match self.forum.account_id(username).await {
            Ok(_) => Ok(true),
            Err(ForumError::UserNotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Sent once; a failed send is logged and the ticket is still filed
    async fn notify_emoji_mismatch(&self, request: &FlairRequest, error: &FlairError) {
        let body = emoji_mismatch_message(
            request,
            error.partial_text.as_deref().unwrap_or_default(),
            &self.settings.form_url,
            &self.settings.subreddit,
        );

        match self
            .forum
            .send_modmail(&request.username, EMOJI_MISMATCH_SUBJECT, &body)
            .await
        {
            Ok(()) => tracing::info!(username = %request.username, "Sent emoji mismatch modmail"),
            Err(e) => {
                tracing::error!(username = %request.username, error = %e, "Failed to send emoji mismatch modmail")
            }
        }
    }
}
