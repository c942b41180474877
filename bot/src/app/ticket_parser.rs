//! Ticket parser
//!
//! Turns the form-generated card description into a `FlairRequest`. The form
//! writes one field per line using a bold marker, for example:
//!
//! ```text
//! **From** alice
//! **Administrative Role** Director
//! **Standard Role** Trumpet, Mellophone
//! **Requested Emoji**: **Trumpet**
//! ```
//!
//! Parsing never fails. Missing or malformed lines leave their field empty.

use unicode_normalization::UnicodeNormalization;

use crate::domain::entities::{FlairRequest, Role, RoleTier};

/// Form value meaning the member left a section blank
pub const NOT_APPLICABLE: &str = "Not Applicable";

/// Sections the intake form can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    From,
    Role(RoleTier),
    RequestedEmoji,
}

/// Markers in match order. `From` is last since the word can occur inside
/// other values.
const MARKERS: [(&str, Section); 6] = [
    ("Requested Emoji", Section::RequestedEmoji),
    ("Administrative Role", Section::Role(RoleTier::Admin)),
    ("Supplementary Role", Section::Role(RoleTier::Supplementary)),
    ("Student Leader Role", Section::Role(RoleTier::Leader)),
    ("Standard Role", Section::Role(RoleTier::Basic)),
    ("From", Section::From),
];

/// Find the section a line belongs to, if any
pub fn detect_section(line: &str) -> Option<Section> {
    MARKERS
        .iter()
        .find(|(marker, _)| line.contains(marker))
        .map(|&(_, section)| section)
}

/// Text after the closing `** ` of the marker
fn field_value(line: &str) -> Option<&str> {
    line.split_once("** ").map(|(_, rest)| rest.trim())
}

/// Requested emoji value: the bold text after `": **"`. An empty bold pair
/// (`****`) means nothing was requested.
fn emoji_value(line: &str) -> Option<String> {
    if line.contains("****") {
        return None;
    }
    let (_, rest) = line.split_once(": **")?;
    meaningful(rest.replace("**", "").trim())
}

fn meaningful(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value == NOT_APPLICABLE {
        None
    } else {
        Some(value.to_string())
    }
}

/// Parse a ticket description into a flair request
pub fn parse_ticket(description: &str) -> FlairRequest {
    let mut request = FlairRequest::default();

    for raw in description.lines() {
        let line: String = raw.nfkd().collect();

        let Some(section) = detect_section(&line) else {
            continue;
        };

        match section {
            Section::From => {
                if let Some(username) = field_value(&line) {
                    request.username = username.to_string();
                }
            }
            Section::RequestedEmoji => {
                request.requested_emoji = emoji_value(&line);
            }
            Section::Role(RoleTier::Basic) => {
                // A later Standard Role line replaces an earlier one
                request.basic = field_value(&line)
                    .map(|v| {
                        v.split(',')
                            .filter_map(meaningful)
                            .map(|name| Role::new(RoleTier::Basic, name))
                            .collect()
                    })
                    .unwrap_or_default();
            }
            Section::Role(tier) => {
                if let Some(name) = field_value(&line).and_then(meaningful) {
                    request.push_role(Role::new(tier, name));
                }
            }
        }
    }

    tracing::debug!(
        username = %request.username,
        admin = ?names(&request.admin),
        supplementary = ?names(&request.supplementary),
        leader = ?names(&request.leader),
        basic = ?names(&request.basic),
        emoji = ?request.requested_emoji,
        "Parsed flair request"
    );

    request
}

fn names(roles: &[Role]) -> Vec<&str> {
    roles.iter().map(|r| r.name.as_str()).collect()
}
