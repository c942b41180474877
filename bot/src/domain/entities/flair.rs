//! Composed flair and validation failures

use std::collections::BTreeSet;

use serde::Serialize;

use super::template::BadgeTemplate;

/// Hard platform limit on flair text, emoji code included
pub const MAX_FLAIR_CHARS: usize = 64;

/// Successfully composed flair text and the template that supplies its emoji
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposedFlair {
    pub text: String,
    pub template: BadgeTemplate,
}

/// Reasons a request cannot be turned into flair
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum FlairErrorKind {
    /// The requested emoji is not one of the listed basic roles
    EmojiMismatch,
    /// The composed text is over `MAX_FLAIR_CHARS`
    LengthExceeded,
}

impl FlairErrorKind {
    /// Name of the board label applied for this error
    pub fn label_name(&self) -> &'static str {
        match self {
            FlairErrorKind::EmojiMismatch => "Emoji",
            FlairErrorKind::LengthExceeded => "Character Limit",
        }
    }
}

impl std::fmt::Display for FlairErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label_name())
    }
}

/// A rejected request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlairError {
    pub kinds: BTreeSet<FlairErrorKind>,
    /// Text composed before the emoji was resolved, kept for the requester message
    pub partial_text: Option<String>,
    /// Measured length when the limit was exceeded
    pub length: Option<usize>,
}

impl FlairError {
    pub fn emoji_mismatch(partial_text: String) -> Self {
        Self {
            kinds: BTreeSet::from([FlairErrorKind::EmojiMismatch]),
            partial_text: Some(partial_text),
            length: None,
        }
    }

    pub fn length_exceeded(length: usize) -> Self {
        Self {
            kinds: BTreeSet::from([FlairErrorKind::LengthExceeded]),
            partial_text: None,
            length: Some(length),
        }
    }

    pub fn has(&self, kind: FlairErrorKind) -> bool {
        self.kinds.contains(&kind)
    }
}

/// Exactly one of these is produced per composed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FlairOutcome {
    Composed(ComposedFlair),
    Rejected(FlairError),
}

#[cfg(test)]
impl FlairOutcome {
    pub fn is_composed(&self) -> bool {
        matches!(self, FlairOutcome::Composed(_))
    }
}
