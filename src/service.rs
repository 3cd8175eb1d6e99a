//! Entry point of the freelance assistant: select the work items for a
//! profile, hand them to the execution engine and return the produced text.

use crate::config::AppConfig;
use crate::constants::EXECUTION_ERROR_PREFIX;
use crate::crew::{select, Role, RoleDescriptor};
use crate::engine::{ExecutionEngine, Process, SequentialCrew};
use crate::errors::ExecutionError;
use crate::llm::{LlmClient, LlmError};
use crate::profile::Profile;
use crate::tools::ToolManager;
use crate::utils::sanitize_output;
use tracing::{error, info, warn};

#[derive(Debug)]
pub struct FreelanceCrew {
    engine: Box<dyn ExecutionEngine>,
    tool_names: Vec<String>,
}

impl FreelanceCrew {
    /// Builds the LLM client, the tools and the sequential engine from `config`
    pub fn new(config: &AppConfig) -> Result<Self, LlmError> {
        let llm_client = LlmClient::from_config(config)?;
        let tools = ToolManager::from_config(config);
        let engine = SequentialCrew::new(llm_client, tools, config.max_tool_calls);
        let tool_names = engine.tool_names();
        info!("Crew ready with tools: {:?}", tool_names);

        Ok(Self::with_engine(Box::new(engine), tool_names))
    }

    pub fn with_engine(engine: Box<dyn ExecutionEngine>, tool_names: Vec<String>) -> Self {
        Self { engine, tool_names }
    }

    /// Runs the agents selected by `agent_type` on `profile`
    ///
    /// # Returns
    /// * `Result<String, ExecutionError>` - Crew output, or the failure with its kind
    pub async fn execute(
        &self,
        profile: &Profile,
        agent_type: &str,
    ) -> Result<String, ExecutionError> {
        let selection = select(profile, agent_type);
        if selection.is_empty() {
            warn!("No work item selected for agent type '{}'", agent_type);
        }
        let roles: Vec<RoleDescriptor> = selection
            .roles
            .iter()
            .map(|role| RoleDescriptor::for_role(*role, self.tool_names.clone()))
            .collect();

        info!(
            "Running '{}' with {} agent(s) and {} work item(s)",
            agent_type,
            roles.len(),
            selection.items.len()
        );

        let output = self
            .engine
            .kickoff(&roles, &selection.items, Process::Sequential)
            .await?;
        Ok(sanitize_output(&output))
    }

    /// Same as [`FreelanceCrew::execute`], but never fails: an error becomes a
    /// message starting with `Erreur lors de l'exécution: `
    pub async fn run(&self, profile: &Profile, agent_type: &str) -> String {
        match self.execute(profile, agent_type).await {
            Ok(output) => output,
            Err(e) => {
                error!("Execution of '{}' failed ({}): {}", agent_type, e.kind, e);
                format!("{}{}", EXECUTION_ERROR_PREFIX, e.message)
            }
        }
    }

    /// Runs every role on its own, one after another, in dispatch order
    pub async fn run_all(&self, profile: &Profile) -> Vec<(Role, String)> {
        let mut results = Vec::with_capacity(Role::ALL.len());
        for (index, role) in Role::ALL.into_iter().enumerate() {
            info!("Agent {}/{}: {}", index + 1, Role::ALL.len(), role);
            results.push((role, self.run(profile, role.key()).await));
        }
        results
    }
}
