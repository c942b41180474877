//! Board labels
//!
//! Every label the bot applies is one of a fixed set, looked up by name in
//! the board's label list.

use std::collections::HashMap;

use super::flair::FlairErrorKind;
use crate::error::{CatalogError, LabelError};

/// Number of flair items on a completed request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComboCount {
    One,
    Two,
    Three,
    Four,
}

impl TryFrom<usize> for ComboCount {
    type Error = LabelError;

    fn try_from(count: usize) -> Result<Self, Self::Error> {
        match count {
            1 => Ok(ComboCount::One),
            2 => Ok(ComboCount::Two),
            3 => Ok(ComboCount::Three),
            4 => Ok(ComboCount::Four),
            _ => Err(LabelError::RoleCountOutOfRange(count)),
        }
    }
}

/// Labels applied to filed tickets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestLabel {
    FirstRequest,
    SubsequentRequest,
    RoleCombo(ComboCount),
    Flair(FlairErrorKind),
    UserNotFound,
}

impl RequestLabel {
    /// Combo label for a role count, which must be 1 through 4
    pub fn role_combo(count: usize) -> Result<Self, LabelError> {
        ComboCount::try_from(count).map(RequestLabel::RoleCombo)
    }

    /// Label name as it appears on the board
    pub fn name(&self) -> &'static str {
        match self {
            RequestLabel::FirstRequest => "First Request",
            RequestLabel::SubsequentRequest => "Subsequent Request",
            RequestLabel::RoleCombo(ComboCount::One) => "One Role Combo",
            RequestLabel::RoleCombo(ComboCount::Two) => "Two Role Combo",
            RequestLabel::RoleCombo(ComboCount::Three) => "Three Role Combo",
            RequestLabel::RoleCombo(ComboCount::Four) => "Four Role Combo",
            RequestLabel::Flair(kind) => kind.label_name(),
            RequestLabel::UserNotFound => "User Not Found",
        }
    }
}

impl std::fmt::Display for RequestLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Board label name to label id
#[derive(Debug, Clone, Default)]
pub struct LabelCatalog {
    ids: HashMap<String, String>,
}

impl LabelCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, id: &str) {
        self.ids
            .entry(name.to_string())
            .or_insert_with(|| id.to_string());
    }

    pub fn id_of(&self, label: RequestLabel) -> Result<&str, CatalogError> {
        self.ids
            .get(label.name())
            .map(String::as_str)
            .ok_or_else(|| CatalogError::LabelNotFound(label.name().to_string()))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for LabelCatalog {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut catalog = LabelCatalog::new();
        for (name, id) in iter {
            catalog.insert(name, id);
        }
        catalog
    }
}
