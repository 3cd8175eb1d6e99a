use super::templates::build_for;
use super::{Role, WorkItem};
use crate::constants::SINGLE_ROLE_QUOTA;
use crate::profile::Profile;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Agent category requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentType {
    Single(Role),
    All,
}

impl FromStr for AgentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(AgentType::All);
        }
        s.parse::<Role>()
            .map(AgentType::Single)
            .map_err(|_| format!("Unknown agent type '{}'", s))
    }
}

impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentType::Single(role) => write!(f, "{}", role),
            AgentType::All => write!(f, "all"),
        }
    }
}

/// Roles and ordered work items handed to the execution engine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub roles: BTreeSet<Role>,
    pub items: Vec<WorkItem>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Builds the work items for `agent_type` and truncates them to their quota
///
/// A single role keeps the first two items of its list. `all` keeps the first
/// item of each role, in dispatch order. Any other value yields an empty
/// selection.
pub fn select(profile: &Profile, agent_type: &str) -> Selection {
    let selection = match agent_type.parse::<AgentType>() {
        Ok(AgentType::Single(role)) => Selection {
            roles: BTreeSet::from([role]),
            items: build_for(role, profile)
                .into_iter()
                .take(SINGLE_ROLE_QUOTA)
                .collect(),
        },
        Ok(AgentType::All) => Selection {
            roles: Role::ALL.into_iter().collect(),
            items: Role::ALL
                .into_iter()
                .filter_map(|role| build_for(role, profile).into_iter().next())
                .collect(),
        },
        Err(e) => {
            warn!("{}, nothing to select", e);
            Selection::default()
        }
    };

    debug!(
        "Selected {} work items for '{}' (roles: {:?})",
        selection.items.len(),
        agent_type,
        selection.roles
    );
    selection
}
