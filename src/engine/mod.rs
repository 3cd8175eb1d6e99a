//! Execution engine turning roles and work items into result text

mod prompt;
mod sequential;
#[cfg(test)]
pub mod testing;

pub use sequential::*;

use crate::crew::{RoleDescriptor, WorkItem};
use crate::errors::ExecutionError;
use async_trait::async_trait;
use serde::Serialize;

/// How work items are dispatched to their agents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Process {
    /// One item after another, in list order
    #[default]
    Sequential,
}

#[async_trait]
pub trait ExecutionEngine: std::fmt::Debug + Send + Sync {
    /// Runs `items` with the agents described by `roles` and returns the crew output
    async fn kickoff(
        &self,
        roles: &[RoleDescriptor],
        items: &[WorkItem],
        process: Process,
    ) -> Result<String, ExecutionError>;
}
