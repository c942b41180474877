//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::app::catalog_loader::LaneNames;
use crate::domain::entities::{
    BadgeTemplate, FlairRequest, LabelCatalog, Lanes, TemplateCatalog, Ticket,
};
use crate::domain::ports::forum::RichTextElement;
use crate::domain::ports::ForumFlairTemplate;

/// (display name, emoji code) for every template in the standard fixture set
pub const STANDARD_TEMPLATES: &[(&str, &str)] = &[
    ("Director", ":director:"),
    ("Staff", ":staff:"),
    ("Drum Corps", ":drumcorps:"),
    ("Graduate", ":graduate:"),
    ("Section Leader", ":sectionleader:"),
    ("Drum Major", ":drummajor:"),
    ("Trumpet", ":trumpet:"),
    ("Mellophone", ":mellophone:"),
    ("Clarinet", ":clarinet:"),
    ("Alto Clarinet", ":altoclarinet:"),
    ("Flute", ":flute:"),
    ("Piccolo", ":piccolo:"),
];

/// Every label the bot can apply
pub const STANDARD_LABELS: &[&str] = &[
    "First Request",
    "Subsequent Request",
    "One Role Combo",
    "Two Role Combo",
    "Three Role Combo",
    "Four Role Combo",
    "Emoji",
    "Character Limit",
    "User Not Found",
];

/// Template id used for a display name in the fixtures, e.g. `tmpl-drum-corps`
pub fn template_id(name: &str) -> String {
    format!("tmpl-{}", slug(name))
}

/// Label id used for a label name in the fixtures
pub fn label_id(name: &str) -> String {
    format!("label-{}", slug(name))
}

fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Template catalog built from `STANDARD_TEMPLATES`
pub fn test_catalog() -> TemplateCatalog {
    STANDARD_TEMPLATES
        .iter()
        .map(|(name, emoji)| BadgeTemplate::new(name, emoji, &template_id(name)))
        .collect()
}

/// Forum-side templates matching `STANDARD_TEMPLATES`
pub fn test_forum_templates() -> Vec<ForumFlairTemplate> {
    STANDARD_TEMPLATES
        .iter()
        .map(|(name, emoji)| ForumFlairTemplate {
            id: template_id(name),
            richtext: vec![
                RichTextElement::text(&format!("{} ", name)),
                RichTextElement::emoji(emoji),
            ],
        })
        .collect()
}

/// Label catalog holding every standard label
pub fn test_label_catalog() -> LabelCatalog {
    let ids: Vec<(String, String)> = STANDARD_LABELS
        .iter()
        .map(|name| (name.to_string(), label_id(name)))
        .collect();
    ids.iter()
        .map(|(name, id)| (name.as_str(), id.as_str()))
        .collect()
}

pub fn test_lane_names() -> LaneNames {
    LaneNames {
        pending: "New Requests".to_string(),
        completed: "Completed".to_string(),
        unable: "Unable to Complete".to_string(),
    }
}

pub fn test_lanes() -> Lanes {
    Lanes {
        pending: "lane-new".to_string(),
        completed: "lane-done".to_string(),
        unable: "lane-unable".to_string(),
    }
}

/// Create an empty request for a user
pub fn test_request(username: &str) -> FlairRequest {
    FlairRequest::new(username)
}

/// Create a ticket with a request-style title
pub fn test_ticket(id: &str, username: &str, description: &str) -> Ticket {
    Ticket {
        id: id.to_string(),
        title: format!("Flair Request for {}", username),
        description: description.to_string(),
    }
}

/// Join form lines into a card description
pub fn description(lines: &[&str]) -> String {
    lines.join("\n")
}
