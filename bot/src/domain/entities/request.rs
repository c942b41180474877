//! Flair request entity
//!
//! The structured form of one ticket: who asked, which roles they listed
//! under each tier, and which emoji they want.

use serde::Serialize;

use super::role::{Role, RoleTier};

/// A parsed flair request. An empty tier means "not applicable".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlairRequest {
    pub username: String,
    pub admin: Vec<Role>,
    pub supplementary: Vec<Role>,
    pub leader: Vec<Role>,
    pub basic: Vec<Role>,
    pub requested_emoji: Option<String>,
}

impl FlairRequest {
    pub fn push_role(&mut self, role: Role) {
        self.roles_mut(role.tier).push(role);
    }

    /// Roles listed under a tier, in ticket order
    pub fn roles(&self, tier: RoleTier) -> &[Role] {
        match tier {
            RoleTier::Admin => &self.admin,
            RoleTier::Supplementary => &self.supplementary,
            RoleTier::Leader => &self.leader,
            RoleTier::Basic => &self.basic,
        }
    }

    pub(crate) fn roles_mut(&mut self, tier: RoleTier) -> &mut Vec<Role> {
        match tier {
            RoleTier::Admin => &mut self.admin,
            RoleTier::Supplementary => &mut self.supplementary,
            RoleTier::Leader => &mut self.leader,
            RoleTier::Basic => &mut self.basic,
        }
    }

    pub fn is_present(&self, tier: RoleTier) -> bool {
        !self.roles(tier).is_empty()
    }

    /// First role of a tier, if the tier is present
    pub fn lead_role(&self, tier: RoleTier) -> Option<&Role> {
        self.roles(tier).first()
    }

    /// Highest-precedence tier among Admin, Supplementary and Leader
    pub fn highest_present_tier(&self) -> Option<RoleTier> {
        RoleTier::HIGHER.into_iter().find(|&t| self.is_present(t))
    }

    /// Whether the requested emoji names one of the listed basic roles
    pub fn emoji_matches_basic_role(&self) -> bool {
        match &self.requested_emoji {
            Some(emoji) => self.basic.iter().any(|r| &r.name == emoji),
            None => false,
        }
    }

    /// Number of flair items: one per present higher tier plus every basic role
    pub fn role_count(&self) -> usize {
        let higher = RoleTier::HIGHER
            .into_iter()
            .filter(|&t| self.is_present(t))
            .count();
        higher + self.basic.len()
    }
}

/// Builders used to assemble requests in tests
#[cfg(test)]
impl FlairRequest {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }

    pub fn with_role(mut self, tier: RoleTier, name: &str) -> Self {
        self.push_role(Role::new(tier, name));
        self
    }

    pub fn with_emoji(mut self, emoji: &str) -> Self {
        self.requested_emoji = Some(emoji.to_string());
        self
    }
}
