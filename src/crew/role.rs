use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Specialist category owning a set of work items
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Positioning,
    Finance,
    Marketing,
}

impl Role {
    /// All roles, in dispatch order
    pub const ALL: [Role; 3] = [Role::Positioning, Role::Finance, Role::Marketing];

    pub fn key(&self) -> &'static str {
        match self {
            Role::Positioning => "positioning",
            Role::Finance => "finance",
            Role::Marketing => "marketing",
        }
    }

    /// Prefix of the files a result of this role is saved to
    pub fn file_prefix(&self) -> &'static str {
        match self {
            Role::Positioning => "positionnement",
            Role::Finance => "fiscalite",
            Role::Marketing => "marketing",
        }
    }

    /// Section title used when displaying a result
    pub fn title(&self) -> &'static str {
        match self {
            Role::Positioning => "Analyse de Positionnement & Offre",
            Role::Finance => "Analyse Fiscale & Trésorerie",
            Role::Marketing => "Stratégie Marketing & Prospection",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.key() == s)
            .ok_or_else(|| format!("Unknown role '{}'", s))
    }
}

/// Static description of the agent playing a role
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleDescriptor {
    pub role: Role,
    /// Role title presented to the model
    pub name: &'static str,
    pub goal: &'static str,
    pub backstory: &'static str,
    /// Names of the tools the agent may call
    pub tools: Vec<String>,
    pub allow_delegation: bool,
}

impl RoleDescriptor {
    pub fn for_role(role: Role, tools: Vec<String>) -> Self {
        let (name, goal, backstory) = match role {
            Role::Positioning => (
                POSITIONING_ROLE_NAME,
                POSITIONING_GOAL,
                POSITIONING_BACKSTORY,
            ),
            Role::Finance => (FINANCE_ROLE_NAME, FINANCE_GOAL, FINANCE_BACKSTORY),
            Role::Marketing => (MARKETING_ROLE_NAME, MARKETING_GOAL, MARKETING_BACKSTORY),
        };

        Self {
            role,
            name,
            goal,
            backstory,
            tools,
            allow_delegation: false,
        }
    }
}
