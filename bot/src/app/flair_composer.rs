//! Flair composer
//!
//! Builds flair text from a request. Higher tiers contribute their first role
//! in precedence order, basic roles are all listed, and the emoji comes from
//! the template of the highest-precedence role (or the requested basic role
//! when no higher tier is present).

use crate::domain::entities::{
    ComposedFlair, FlairError, FlairOutcome, FlairRequest, RoleTier, TemplateCatalog,
    MAX_FLAIR_CHARS,
};
use crate::error::CatalogError;

/// Separator between two adjacent tiers
const TIER_SEPARATOR: &str = " - ";

/// Separator before a third tier once an outer tier has already used `" - "`
const NESTED_SEPARATOR: &str = "; ";

/// Compose flair text without the emoji suffix
pub fn compose_text(request: &FlairRequest) -> String {
    let admin = request.is_present(RoleTier::Admin);
    let supp = request.is_present(RoleTier::Supplementary);
    let leader = request.is_present(RoleTier::Leader);
    let basic = request.is_present(RoleTier::Basic);

    let mut text = String::from(" ");

    if let Some(role) = request.lead_role(RoleTier::Admin) {
        text.push_str(&role.name);
        if supp || leader || basic {
            text.push_str(TIER_SEPARATOR);
        }
    }

    if let Some(role) = request.lead_role(RoleTier::Supplementary) {
        text.push_str(&role.name);
        if admin && (leader || basic) {
            text.push_str(NESTED_SEPARATOR);
        } else if leader || basic {
            text.push_str(TIER_SEPARATOR);
        }
    }

    if let Some(role) = request.lead_role(RoleTier::Leader) {
        text.push_str(&role.name);
        if (admin || supp) && basic {
            text.push_str(NESTED_SEPARATOR);
        } else if basic {
            text.push_str(TIER_SEPARATOR);
        }
    }

    if basic {
        let names: Vec<&str> = request.basic.iter().map(|r| r.name.as_str()).collect();
        text.push_str(&names.join(", "));
        text = text.trim().to_string();
    }

    text
}

/// Compose a request into flair, or the reason it cannot be composed.
///
/// A role with no matching template is a catalog problem rather than a
/// request problem, so it is returned as `Err` for the caller to handle.
pub fn compose(
    request: &FlairRequest,
    catalog: &TemplateCatalog,
) -> Result<FlairOutcome, CatalogError> {
    let mut text = compose_text(request);

    let template = match request
        .highest_present_tier()
        .and_then(|tier| request.lead_role(tier))
    {
        Some(role) => catalog.find(&role.name)?,
        None => match &request.requested_emoji {
            Some(emoji) if request.emoji_matches_basic_role() => catalog.find(emoji)?,
            _ => {
                tracing::warn!(
                    username = %request.username,
                    requested = ?request.requested_emoji,
                    "Requested emoji is not one of the listed basic roles"
                );
                return Ok(FlairOutcome::Rejected(FlairError::emoji_mismatch(text)));
            }
        },
    };

    text.push(' ');
    text.push_str(&template.emoji_code);

    let length = text.chars().count();
    if length > MAX_FLAIR_CHARS {
        tracing::warn!(
            username = %request.username,
            length,
            max = MAX_FLAIR_CHARS,
            "Flair text is too long"
        );
        return Ok(FlairOutcome::Rejected(FlairError::length_exceeded(length)));
    }

    tracing::debug!(
        username = %request.username,
        text = %text,
        template = %template.display_name,
        "Composed flair"
    );

    Ok(FlairOutcome::Composed(ComposedFlair {
        text,
        template: template.clone(),
    }))
}
