//! Catalog loading
//!
//! Everything looked up by name during a run is fetched once, up front, and
//! passed by reference to the stages that need it.

use std::collections::HashSet;

use crate::domain::entities::{BadgeTemplate, LabelCatalog, Lanes, TemplateCatalog};
use crate::domain::ports::{BoardClient, ForumClient, ForumFlairTemplate};
use crate::error::{AppError, BoardError, CatalogError, ForumError};

/// Names of the board lists the bot reads from and files into
#[derive(Debug, Clone)]
pub struct LaneNames {
    pub pending: String,
    pub completed: String,
    pub unable: String,
}

/// Convert one forum template. Element 0 of the rich text is the display
/// name, element 1 the emoji code; anything shorter is unusable.
pub fn badge_template(template: &ForumFlairTemplate) -> Option<BadgeTemplate> {
    let name = template.richtext.first()?.text.as_deref()?.trim();
    let emoji = template.richtext.get(1)?.emoji.as_deref()?.trim();
    if name.is_empty() || emoji.is_empty() {
        return None;
    }
    Some(BadgeTemplate::new(name, emoji, &template.id))
}

/// Build the template catalog from the subreddit's user flair templates
pub async fn load_template_catalog<F: ForumClient + ?Sized>(
    forum: &F,
) -> Result<TemplateCatalog, ForumError> {
    let mut catalog = TemplateCatalog::new();

    for template in forum.list_flair_templates().await? {
        let Some(badge) = badge_template(&template) else {
            tracing::warn!(template_id = %template.id, "Skipping flair template without name and emoji");
            continue;
        };
        let name = badge.display_name.clone();
        if !catalog.insert(badge) {
            tracing::warn!(name = %name, template_id = %template.id, "Duplicate flair template name, keeping the first");
        }
    }

    if catalog.is_empty() {
        tracing::warn!("No usable flair templates on the subreddit");
    }
    tracing::info!(count = catalog.len(), "Loaded flair templates");
    Ok(catalog)
}

/// Load the subreddit's custom emoji as `:name:` codes
pub async fn load_emoji_set<F: ForumClient + ?Sized>(
    forum: &F,
) -> Result<HashSet<String>, ForumError> {
    let emojis: HashSet<String> = forum
        .list_custom_emojis()
        .await?
        .into_iter()
        .map(|name| format!(":{}:", name))
        .collect();

    tracing::info!(count = emojis.len(), "Loaded custom emoji");
    Ok(emojis)
}

/// Templates whose emoji code is not among the subreddit's custom emoji
pub fn templates_missing_emoji<'a>(
    catalog: &'a TemplateCatalog,
    emojis: &HashSet<String>,
) -> Vec<&'a BadgeTemplate> {
    catalog
        .iter()
        .filter(|t| !emojis.contains(&t.emoji_code))
        .collect()
}

/// Build the label catalog from the board's labels
pub async fn load_label_catalog<B: BoardClient + ?Sized>(
    board: &B,
) -> Result<LabelCatalog, BoardError> {
    let labels = board.list_labels().await?;
    let catalog: LabelCatalog = labels
        .iter()
        .filter(|l| !l.name.is_empty())
        .map(|l| (l.name.as_str(), l.id.as_str()))
        .collect();

    if catalog.is_empty() {
        tracing::warn!("Board has no named labels");
    }
    tracing::info!(count = catalog.len(), "Loaded board labels");
    Ok(catalog)
}

/// Resolve the pending, completed and unable lists by name
pub async fn resolve_lanes<B: BoardClient + ?Sized>(
    board: &B,
    names: &LaneNames,
) -> Result<Lanes, AppError> {
    let lanes = board.list_lanes().await?;
    let find = |name: &str| {
        lanes
            .iter()
            .find(|l| l.name == name)
            .map(|l| l.id.clone())
            .ok_or_else(|| CatalogError::LaneNotFound(name.to_string()))
    };

    Ok(Lanes {
        pending: find(&names.pending)?,
        completed: find(&names.completed)?,
        unable: find(&names.unable)?,
    })
}
