//! Ticket labeler
//!
//! Labels a processed ticket and files it into its terminal list:
//! - successful requests get first/subsequent and role combo labels and go to
//!   the completed list
//! - failed requests get one label per failure and go to the unable list
//!
//! Filed tickets are marked due-complete and pinned to the top of their list.

use std::sync::Arc;

use crate::domain::entities::{
    FlairRequest, LabelCatalog, Lanes, RequestLabel, Ticket, TicketLane,
};
use crate::domain::ports::BoardClient;
use crate::error::{AppError, BoardError, LabelError};

/// Title prefix the intake form gives every request card
pub const REQUEST_TITLE_PREFIX: &str = "Flair Request for";

/// Labels applied to a completed ticket, plus any classification problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionReport {
    pub labels: Vec<RequestLabel>,
    /// Set when the role count had no combo label; the ticket is still filed
    pub anomaly: Option<LabelError>,
}

/// Service that applies labels and moves tickets between lists
pub struct TicketLabeler<B>
where
    B: BoardClient,
{
    board: Arc<B>,
    labels: LabelCatalog,
    lanes: Lanes,
}

impl<B> TicketLabeler<B>
where
    B: BoardClient,
{
    pub fn new(board: Arc<B>, labels: LabelCatalog, lanes: Lanes) -> Self {
        Self {
            board,
            labels,
            lanes,
        }
    }

    pub fn lanes(&self) -> &Lanes {
        &self.lanes
    }

    /// Whether this is the only request card on the board for the user
    pub async fn is_first_request(&self, username: &str) -> Result<bool, BoardError> {
        let query = format!("name:\"{} {}\"", REQUEST_TITLE_PREFIX, username);
        let matches = self
            .board
            .search_cards(&query)
            .await?
            .iter()
            .filter(|card| card.name.contains(username))
            .count();

        tracing::debug!(username = %username, matches, "Searched for previous requests");
        Ok(matches == 1)
    }

    /// Label a successful request and file it as completed
    pub async fn mark_completed(
        &self,
        ticket: &Ticket,
        request: &FlairRequest,
    ) -> Result<CompletionReport, AppError> {
        let mut labels = Vec::with_capacity(2);
        labels.push(if self.is_first_request(&request.username).await? {
            RequestLabel::FirstRequest
        } else {
            RequestLabel::SubsequentRequest
        });

        let role_count = request.role_count();
        let anomaly = match RequestLabel::role_combo(role_count) {
            Ok(label) => {
                labels.push(label);
                None
            }
            Err(e) => {
                tracing::error!(
                    ticket = %ticket.id,
                    username = %request.username,
                    role_count,
                    "Role count has no combo label"
                );
                Some(e)
            }
        };

        self.apply_labels(ticket, &labels).await?;
        self.file(ticket, TicketLane::Completed).await?;

        Ok(CompletionReport { labels, anomaly })
    }

    /// Label a failed request and file it as unable to complete
    pub async fn mark_failed(
        &self,
        ticket: &Ticket,
        labels: &[RequestLabel],
    ) -> Result<(), AppError> {
        self.apply_labels(ticket, labels).await?;
        self.file(ticket, TicketLane::UnableToComplete).await
    }

    /// Resolve every label before touching the card so a missing label
    /// leaves it unmodified
    async fn apply_labels(&self, ticket: &Ticket, labels: &[RequestLabel]) -> Result<(), AppError> {
        let ids = labels
            .iter()
            .map(|&label| self.labels.id_of(label))
            .collect::<Result<Vec<_>, _>>()?;

        for (label, id) in labels.iter().zip(ids) {
            self.board.add_label(&ticket.id, id).await?;
            tracing::debug!(ticket = %ticket.id, label = %label, "Applied label");
        }
        Ok(())
    }

    async fn file(&self, ticket: &Ticket, lane: TicketLane) -> Result<(), AppError> {
        self.board.set_due_complete(&ticket.id).await?;
        self.board
            .move_card(&ticket.id, self.lanes.id_for(lane))
            .await?;
        self.board.move_to_top(&ticket.id).await?;

        tracing::info!(ticket = %ticket.id, title = %ticket.title, lane = %lane, "Filed ticket");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ComboCount, FlairErrorKind, RoleTier};
    use crate::error::CatalogError;
    use crate::test_utils::{test_label_catalog, test_lanes, test_request, test_ticket, InMemoryBoard};

    fn create_labeler(board: Arc<InMemoryBoard>) -> TicketLabeler<InMemoryBoard> {
        TicketLabeler::new(board, test_label_catalog(), test_lanes())
    }

    fn board_with_request(card_id: &str, username: &str) -> InMemoryBoard {
        InMemoryBoard::with_standard_lanes().with_card(
            "lane-new",
            card_id,
            &format!("{} {}", REQUEST_TITLE_PREFIX, username),
            "",
        )
    }

    // =========================================================================
    // first/subsequent classification
    // =========================================================================

    #[tokio::test]
    async fn single_card_is_first_request() {
        let board = Arc::new(board_with_request("c1", "alice"));
        let labeler = create_labeler(board);

        assert!(labeler.is_first_request("alice").await.unwrap());
    }

    #[tokio::test]
    async fn earlier_card_makes_subsequent_request() {
        let board = Arc::new(board_with_request("c2", "alice").with_card(
            "lane-done",
            "c1",
            "Flair Request for alice",
            "",
        ));
        let labeler = create_labeler(board);

        assert!(!labeler.is_first_request("alice").await.unwrap());
    }

    #[tokio::test]
    async fn other_users_cards_do_not_count() {
        let board = Arc::new(board_with_request("c1", "alice").with_card(
            "lane-done",
            "c0",
            "Flair Request for bob",
            "",
        ));
        let labeler = create_labeler(board);

        assert!(labeler.is_first_request("alice").await.unwrap());
    }

    // =========================================================================
    // mark_completed
    // =========================================================================

    #[tokio::test]
    async fn completed_ticket_is_labeled_and_filed() {
        let board = Arc::new(board_with_request("c1", "bob"));
        let labeler = create_labeler(board.clone());
        let request = test_request("bob")
            .with_role(RoleTier::Basic, "Trumpet")
            .with_role(RoleTier::Basic, "Mellophone")
            .with_emoji("Trumpet");

        let report = labeler
            .mark_completed(&test_ticket("c1", "bob", ""), &request)
            .await
            .unwrap();

        assert_eq!(
            report.labels,
            vec![RequestLabel::FirstRequest, RequestLabel::RoleCombo(ComboCount::Two)]
        );
        assert!(report.anomaly.is_none());
        assert_eq!(
            board.label_names("c1"),
            vec!["First Request", "Two Role Combo"]
        );
        assert!(board.is_due_complete("c1"));
        assert_eq!(board.lane_card_ids("lane-done"), vec!["c1"]);
        assert!(board.lane_card_ids("lane-new").is_empty());
    }

    #[tokio::test]
    async fn completed_ticket_is_pinned_to_top() {
        let board = Arc::new(
            board_with_request("c2", "carol").with_card("lane-done", "c1", "Flair Request for dan", ""),
        );
        let labeler = create_labeler(board.clone());
        let request = test_request("carol").with_role(RoleTier::Admin, "Director");

        labeler
            .mark_completed(&test_ticket("c2", "carol", ""), &request)
            .await
            .unwrap();

        assert_eq!(board.lane_card_ids("lane-done"), vec!["c2", "c1"]);
    }

    #[tokio::test]
    async fn role_count_outside_range_is_reported_not_labeled() {
        let board = Arc::new(board_with_request("c1", "eve"));
        let labeler = create_labeler(board.clone());
        let mut request = test_request("eve").with_role(RoleTier::Admin, "Director");
        for name in ["Trumpet", "Mellophone", "Tuba", "Flute"] {
            request = request.with_role(RoleTier::Basic, name);
        }

        let report = labeler
            .mark_completed(&test_ticket("c1", "eve", ""), &request)
            .await
            .unwrap();

        assert_eq!(report.anomaly, Some(LabelError::RoleCountOutOfRange(5)));
        assert_eq!(report.labels, vec![RequestLabel::FirstRequest]);
        assert_eq!(board.label_names("c1"), vec!["First Request"]);
        assert_eq!(board.lane_card_ids("lane-done"), vec!["c1"]);
    }

    // =========================================================================
    // mark_failed
    // =========================================================================

    #[tokio::test]
    async fn failed_ticket_gets_error_labels() {
        let board = Arc::new(board_with_request("c1", "ivy"));
        let labeler = create_labeler(board.clone());

        labeler
            .mark_failed(
                &test_ticket("c1", "ivy", ""),
                &[RequestLabel::Flair(FlairErrorKind::EmojiMismatch)],
            )
            .await
            .unwrap();

        assert_eq!(board.label_names("c1"), vec!["Emoji"]);
        assert!(board.is_due_complete("c1"));
        assert_eq!(board.lane_card_ids("lane-unable"), vec!["c1"]);
    }

    #[tokio::test]
    async fn missing_label_leaves_card_untouched() {
        let board = Arc::new(board_with_request("c1", "zed"));
        let labeler = TicketLabeler::new(board.clone(), LabelCatalog::new(), test_lanes());

        let err = labeler
            .mark_failed(&test_ticket("c1", "zed", ""), &[RequestLabel::UserNotFound])
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Catalog(CatalogError::LabelNotFound(ref name)) if name == "User Not Found"
        ));
        assert!(board.label_names("c1").is_empty());
        assert!(!board.is_due_complete("c1"));
        assert_eq!(board.lane_card_ids("lane-new"), vec!["c1"]);
    }
}
