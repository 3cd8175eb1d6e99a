use super::prompt::{item_prompt, system_prompt};
use super::{ExecutionEngine, Process};
use crate::constants::TOOLS_EXHAUSTED_PROMPT;
use crate::crew::{RoleDescriptor, WorkItem};
use crate::errors::ExecutionError;
use crate::llm::{ChatMessage, LlmClient};
use crate::tools::ToolManager;
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// Crew running every work item in order on the agent of its role
///
/// Outputs of completed items are passed as context to the following ones and
/// the output of the last item is the crew output.
#[derive(Debug)]
pub struct SequentialCrew {
    llm_client: LlmClient,
    tools: ToolManager,
    max_tool_calls: usize,
}

impl SequentialCrew {
    pub fn new(llm_client: LlmClient, tools: ToolManager, max_tool_calls: usize) -> Self {
        Self {
            llm_client,
            tools,
            max_tool_calls,
        }
    }

    /// Names of the tools every agent gets
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.names()
    }

    /// Runs one work item, serving the tool requests of the model
    ///
    /// # Arguments
    /// * `descriptor` - Agent owning the item
    /// * `item` - Work item to run
    /// * `context` - Outputs of the items already completed
    async fn execute_item(
        &self,
        descriptor: &RoleDescriptor,
        item: &WorkItem,
        context: &[String],
    ) -> Result<String, ExecutionError> {
        let mut messages = vec![
            ChatMessage::system(&system_prompt(descriptor, &self.tools)),
            ChatMessage::user(&item_prompt(item, context)),
        ];
        let mut tool_calls = 0;
        let mut tools_exhausted = false;

        loop {
            let response = self.llm_client.call_llm_api(messages.clone()).await?;
            debug!("LLM response: {}", response);

            let request = if descriptor.tools.is_empty() {
                None
            } else {
                self.tools.parse_request(&response)
            };
            let Some(request) = request else {
                return Ok(response);
            };

            if tools_exhausted {
                warn!(
                    "Agent '{}' still asks for tool '{}' after its last call, keeping the answer",
                    descriptor.role, request.tool
                );
                return Ok(response);
            }

            messages.push(ChatMessage::assistant(&response));

            if tool_calls >= self.max_tool_calls {
                tools_exhausted = true;
                messages.push(ChatMessage::user(TOOLS_EXHAUSTED_PROMPT));
                continue;
            }

            tool_calls += 1;
            info!(
                "Agent '{}' uses tool '{}' ({}/{})",
                descriptor.role, request.tool, tool_calls, self.max_tool_calls
            );
            let observation = self.tools.run(&request).await;
            messages.push(ChatMessage::user(&observation));
        }
    }
}

#[async_trait]
impl ExecutionEngine for SequentialCrew {
    async fn kickoff(
        &self,
        roles: &[RoleDescriptor],
        items: &[WorkItem],
        process: Process,
    ) -> Result<String, ExecutionError> {
        match process {
            Process::Sequential => {}
        }

        if items.is_empty() {
            return Err(ExecutionError::engine("no work items to execute"));
        }

        let mut outputs: Vec<String> = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let descriptor = roles
                .iter()
                .find(|d| d.role == item.role())
                .ok_or_else(|| {
                    ExecutionError::engine(format!("no agent assigned to role '{}'", item.role()))
                })?;

            info!(
                "[{}/{}] {} started: {}",
                index + 1,
                items.len(),
                descriptor.name,
                item.description().lines().next().unwrap_or_default()
            );
            let output = self.execute_item(descriptor, item, &outputs).await?;
            info!("[{}/{}] {} finished", index + 1, items.len(), descriptor.name);
            outputs.push(output);
        }

        outputs
            .pop()
            .ok_or_else(|| ExecutionError::engine("crew produced no output"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crew::Role;
    use crate::engine::testing::{ScriptedProvider, StaticTool};
    use crate::errors::ErrorKind;
    use crate::tools::Tool;

    fn crew(provider: ScriptedProvider, tools: ToolManager, max_tool_calls: usize) -> SequentialCrew {
        SequentialCrew::new(
            LlmClient::with_provider(Box::new(provider)),
            tools,
            max_tool_calls,
        )
    }

    fn descriptors(tools: Vec<String>) -> Vec<RoleDescriptor> {
        Role::ALL
            .into_iter()
            .map(|role| RoleDescriptor::for_role(role, tools.clone()))
            .collect()
    }

    #[tokio::test]
    async fn test_items_run_in_order_and_last_output_wins() {
        let provider = ScriptedProvider::new(&["niche", "statuts", "canaux"]);
        let calls = provider.calls();
        let crew = crew(provider, ToolManager::empty(), 2);

        let items = vec![
            WorkItem::new(Role::Positioning, "Identifier la niche", "Niche"),
            WorkItem::new(Role::Finance, "Comparer les statuts", "Tableau"),
            WorkItem::new(Role::Marketing, "Choisir les canaux", "Liste"),
        ];
        let output = crew
            .kickoff(&descriptors(vec![]), &items, Process::Sequential)
            .await
            .unwrap();

        assert_eq!(output, "canaux");
        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 3);
        assert!(calls[0][0].content.contains("Expert en Positionnement"));
        assert!(calls[1][0].content.contains("Expert en Fiscalité"));
        assert!(calls[2][1].content.contains("Choisir les canaux"));
        assert!(calls[2][1].content.contains("niche\n\n----------\n\nstatuts"));
    }

    #[tokio::test]
    async fn test_empty_items_fail() {
        let crew = crew(ScriptedProvider::new(&[]), ToolManager::empty(), 2);
        let err = crew
            .kickoff(&descriptors(vec![]), &[], Process::Sequential)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Engine);
    }

    #[tokio::test]
    async fn test_item_without_agent_fails() {
        let crew = crew(ScriptedProvider::new(&["ok"]), ToolManager::empty(), 2);
        let roles = vec![RoleDescriptor::for_role(Role::Finance, vec![])];
        let items = vec![WorkItem::new(Role::Marketing, "Posts", "5 posts")];
        let err = crew
            .kickoff(&roles, &items, Process::Sequential)
            .await
            .unwrap_err();
        assert_eq!(err.message, "no agent assigned to role 'marketing'");
    }

    #[tokio::test]
    async fn test_tool_requests_are_served_then_bounded() {
        let provider = ScriptedProvider::new(&[
            "TOOL_REQUEST: static tarifs",
            "TOOL_REQUEST: static encore",
            "TOOL_REQUEST: static toujours",
            "Réponse finale",
        ]);
        let calls = provider.calls();
        let tools = ToolManager::new(vec![Box::new(StaticTool) as Box<dyn Tool>]);
        let crew = crew(provider, tools, 2);

        let items = vec![WorkItem::new(Role::Finance, "Simuler", "Simulation")];
        let output = crew
            .kickoff(
                &descriptors(vec!["static".to_string()]),
                &items,
                Process::Sequential,
            )
            .await
            .unwrap();

        assert_eq!(output, "Réponse finale");
        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 4);
        assert!(calls[0][0].content.contains("- static: "));
        assert_eq!(calls[1].last().unwrap().content, "Result of tool 'static':\nstatic result");
        assert_eq!(calls[3].last().unwrap().content, TOOLS_EXHAUSTED_PROMPT);
    }

    #[tokio::test]
    async fn test_llm_failure_is_engine_error() {
        let crew = crew(ScriptedProvider::new(&[]), ToolManager::empty(), 2);
        let items = vec![WorkItem::new(Role::Finance, "Simuler", "Simulation")];
        let err = crew
            .kickoff(&descriptors(vec![]), &items, Process::Sequential)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Engine);
    }
}
