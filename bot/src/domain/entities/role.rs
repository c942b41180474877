//! Role domain entity
//!
//! Roles are grouped into four precedence tiers. The tier decides which role
//! leads the flair text and which template supplies the emoji.

use serde::{Deserialize, Serialize};

/// Administrative roles, highest precedence
pub const ADMIN_ROLES: &[&str] = &["Director", "Staff", "Support Team"];

/// Supplementary roles
pub const SUPPLEMENTARY_ROLES: &[&str] = &["College Marcher", "Drum Corps", "Military", "Graduate"];

/// Student leader roles
pub const LEADER_ROLES: &[&str] = &["Drum Major", "Field Commander", "Captain", "Section Leader"];

/// Role precedence tier
///
/// Variants are declared in precedence order, so `Admin < Basic` under `Ord`
/// and sorting yields the order roles are written into flair text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleTier {
    Admin,
    Supplementary,
    Leader,
    Basic,
}

impl RoleTier {
    /// All tiers, highest precedence first
    #[cfg(test)]
    pub const ALL: [RoleTier; 4] = [
        RoleTier::Admin,
        RoleTier::Supplementary,
        RoleTier::Leader,
        RoleTier::Basic,
    ];

    /// Tiers whose first role alone represents the tier in flair text
    pub const HIGHER: [RoleTier; 3] = [RoleTier::Admin, RoleTier::Supplementary, RoleTier::Leader];

    /// Classify a role or template name.
    ///
    /// Matching is by containment so that names like "Former Staff" still land
    /// in the admin tier. Anything not matched is Basic.
    pub fn classify(name: &str) -> RoleTier {
        let matches = |known: &[&str]| known.iter().any(|k| name.contains(k));

        if matches(ADMIN_ROLES) {
            RoleTier::Admin
        } else if matches(SUPPLEMENTARY_ROLES) {
            RoleTier::Supplementary
        } else if matches(LEADER_ROLES) {
            RoleTier::Leader
        } else {
            RoleTier::Basic
        }
    }
}

impl std::fmt::Display for RoleTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoleTier::Admin => write!(f, "admin"),
            RoleTier::Supplementary => write!(f, "supplementary"),
            RoleTier::Leader => write!(f, "leader"),
            RoleTier::Basic => write!(f, "basic"),
        }
    }
}

impl std::str::FromStr for RoleTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" | "administrative" => Ok(RoleTier::Admin),
            "supplementary" | "supp" => Ok(RoleTier::Supplementary),
            "leader" | "student leader" => Ok(RoleTier::Leader),
            "basic" | "standard" => Ok(RoleTier::Basic),
            _ => Err(format!("Unknown role tier: {}", s)),
        }
    }
}

/// A role as requested on a ticket, tagged with the tier it was listed under
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Role {
    pub tier: RoleTier,
    pub name: String,
}

impl Role {
    pub fn new(tier: RoleTier, name: impl Into<String>) -> Self {
        Self {
            tier,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
