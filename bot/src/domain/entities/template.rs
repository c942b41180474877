//! Badge template catalog
//!
//! Templates come from the subreddit's configured user flair options. Each
//! pairs a display name with the emoji code rendered next to it.
//!
//! Display names are stored in NFKD form, the same form ticket lines are
//! parsed in, so accented and composed glyphs compare equal on lookup.

use std::collections::HashMap;

use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

use super::role::RoleTier;
use crate::error::CatalogError;

/// A forum flair template, immutable once loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeTemplate {
    pub display_name: String,
    /// Emoji code such as `:trumpet:`
    pub emoji_code: String,
    pub tier: RoleTier,
    /// Forum-side template id
    pub source_id: String,
}

impl BadgeTemplate {
    pub fn new(display_name: &str, emoji_code: &str, source_id: &str) -> Self {
        let display_name: String = display_name.nfkd().collect();
        Self {
            tier: RoleTier::classify(&display_name),
            display_name,
            emoji_code: emoji_code.to_string(),
            source_id: source_id.to_string(),
        }
    }
}

/// Name-indexed set of badge templates
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    templates: Vec<BadgeTemplate>,
    by_name: HashMap<String, usize>,
}

impl TemplateCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template. Returns false and keeps the existing entry if the
    /// display name is already taken.
    pub fn insert(&mut self, template: BadgeTemplate) -> bool {
        if self.by_name.contains_key(&template.display_name) {
            return false;
        }
        self.by_name
            .insert(template.display_name.clone(), self.templates.len());
        self.templates.push(template);
        true
    }

    /// Look up a template by its full display name.
    ///
    /// Only exact matches count: "Clarinet" never resolves to "Alto Clarinet"
    /// or the other way around.
    pub fn find(&self, name: &str) -> Result<&BadgeTemplate, CatalogError> {
        let key: String = name.nfkd().collect();
        self.by_name
            .get(&key)
            .map(|&i| &self.templates[i])
            .ok_or(CatalogError::TemplateNotFound(key))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BadgeTemplate> {
        self.templates.iter()
    }
}

impl FromIterator<BadgeTemplate> for TemplateCatalog {
    fn from_iter<I: IntoIterator<Item = BadgeTemplate>>(iter: I) -> Self {
        let mut catalog = TemplateCatalog::new();
        for template in iter {
            catalog.insert(template);
        }
        catalog
    }
}
