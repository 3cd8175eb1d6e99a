use crate::config::AppConfig;
use crate::constants::MAX_TOOL_OUTPUT_CHARS;
use crate::errors::ExecutionError;
use crate::tools::{parse_tool_request, ScrapeWebsiteTool, SerperSearchTool, Tool, ToolRequest};
use crate::utils::truncate_chars;
use tracing::{debug, warn};

/// Holds the tools shared by every agent
#[derive(Debug, Default)]
pub struct ToolManager {
    pub tools: Vec<Box<dyn Tool>>,
}

impl ToolManager {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(tools: Vec<Box<dyn Tool>>) -> Self {
        Self { tools }
    }

    /// Initializes the search and scrape tools
    ///
    /// # Returns
    /// * `Result<ToolManager, ExecutionError>` - Both tools, or a `ToolInit` error when one of them
    ///   cannot be built
    pub fn try_from_config(config: &AppConfig) -> Result<Self, ExecutionError> {
        if !config.tools_enabled {
            debug!("Tools disabled by configuration");
            return Ok(Self::empty());
        }

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .user_agent(concat!("freelance-copilot/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ExecutionError::tool_init(e.to_string()))?;

        let search = SerperSearchTool::new(client.clone(), config.serper_api_key.clone(), None)?;
        let scrape = ScrapeWebsiteTool::new(client);

        Ok(Self::new(vec![
            Box::new(search) as Box<dyn Tool>,
            Box::new(scrape) as Box<dyn Tool>,
        ]))
    }

    /// Same as [`ToolManager::try_from_config`], falling back to no tools on failure
    pub fn from_config(config: &AppConfig) -> Self {
        match Self::try_from_config(config) {
            Ok(manager) => manager,
            Err(e) => {
                warn!("Tool initialization failed: {}. Agents will run without tools", e);
                Self::empty()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.tools.iter().map(|t| t.name().to_string()).collect()
    }

    pub fn get_tool(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.iter().find(|t| t.name() == name).map(|t| &**t)
    }

    /// Tool list presented to the model
    pub fn catalogue(&self) -> String {
        self.tools
            .iter()
            .map(|t| format!("- {}: {}", t.name(), t.usage()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Tool request contained in a model response, if any tool is available
    pub fn parse_request(&self, response: &str) -> Option<ToolRequest> {
        if self.is_empty() {
            return None;
        }
        parse_tool_request(response)
    }

    /// Runs a tool request and renders its outcome as text for the model
    ///
    /// Tool failures are reported to the model rather than aborting the work item.
    pub async fn run(&self, request: &ToolRequest) -> String {
        let Some(tool) = self.get_tool(&request.tool) else {
            return format!(
                "Tool '{}' does not exist. Available tools: {}",
                request.tool,
                self.names().join(", ")
            );
        };

        match tool.invoke(&request.args).await {
            Ok(output) => format!(
                "Result of tool '{}':\n{}",
                request.tool,
                truncate_chars(&output, MAX_TOOL_OUTPUT_CHARS)
            ),
            Err(e) => {
                warn!("Tool '{}' failed: {}", request.tool, e);
                format!("Tool '{}' failed: {}", request.tool, e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Debug)]
    struct UpperTool;

    #[async_trait]
    impl Tool for UpperTool {
        fn name(&self) -> &str {
            "upper"
        }

        fn usage(&self) -> &str {
            "Uppercase text. Usage: upper <text>"
        }

        async fn invoke(&self, args: &[String]) -> Result<String, String> {
            if args.is_empty() {
                return Err("nothing to uppercase".into());
            }
            Ok(args.join(" ").to_uppercase())
        }
    }

    #[test]
    fn test_missing_serper_key_falls_back_to_no_tools() {
        let config = AppConfig::default();
        assert!(ToolManager::try_from_config(&config).is_err());
        assert!(ToolManager::from_config(&config).is_empty());
    }

    #[test]
    fn test_configured_tools() {
        let config = AppConfig {
            serper_api_key: Some("serper-test".to_string()),
            ..AppConfig::default()
        };
        let manager = ToolManager::from_config(&config);
        assert_eq!(manager.names(), vec!["search", "scrape"]);
        assert!(manager.catalogue().contains("- scrape: "));

        let disabled = AppConfig {
            tools_enabled: false,
            ..config
        };
        assert!(ToolManager::from_config(&disabled).is_empty());
    }

    #[test]
    fn test_no_request_parsed_without_tools() {
        let manager = ToolManager::empty();
        assert_eq!(manager.parse_request("TOOL_REQUEST: search x"), None);
    }

    #[tokio::test]
    async fn test_run_reports_results_and_failures() {
        let manager = ToolManager::new(vec![Box::new(UpperTool)]);

        let ok = ToolRequest {
            tool: "upper".to_string(),
            args: vec!["sasu".to_string()],
        };
        assert_eq!(manager.run(&ok).await, "Result of tool 'upper':\nSASU");

        let failing = ToolRequest {
            tool: "upper".to_string(),
            args: vec![],
        };
        assert_eq!(
            manager.run(&failing).await,
            "Tool 'upper' failed: nothing to uppercase"
        );

        let unknown = ToolRequest {
            tool: "search".to_string(),
            args: vec![],
        };
        assert!(manager.run(&unknown).await.contains("Available tools: upper"));
    }
}
