//! Capability tools shared by every agent of the crew.
//!
//! The model asks for a tool with a line `TOOL_REQUEST: <tool> <args...>`;
//! the engine runs it and feeds the result back into the conversation.

mod scrape_tool;
mod search_tool;
mod tool_manager;

pub use scrape_tool::*;
pub use search_tool::*;
pub use tool_manager::*;

use crate::constants::TOOL_REQUEST_PREFIX;

#[async_trait::async_trait]
pub trait Tool: std::fmt::Debug + Send + Sync {
    fn name(&self) -> &str;
    /// One line usage shown to the model
    fn usage(&self) -> &str;
    async fn invoke(&self, args: &[String]) -> Result<String, String>;
}

/// A tool invocation asked for by the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRequest {
    pub tool: String,
    pub args: Vec<String>,
}

/// Extracts the first tool request found in a model response
pub fn parse_tool_request(response: &str) -> Option<ToolRequest> {
    response.lines().find_map(|line| {
        let start = line.find(TOOL_REQUEST_PREFIX)?;
        let mut parts = line[start + TOOL_REQUEST_PREFIX.len()..]
            .split_whitespace()
            .map(|s| s.to_string());
        let tool = parts.next()?;
        Some(ToolRequest {
            tool,
            args: parts.collect(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tool_request() {
        let response = "Je vais chercher.\nTOOL_REQUEST: search tarifs freelance react 2024\n";
        let request = parse_tool_request(response).unwrap();
        assert_eq!(request.tool, "search");
        assert_eq!(request.args, vec!["tarifs", "freelance", "react", "2024"]);
    }

    #[test]
    fn test_parse_tool_request_absent_or_empty() {
        assert_eq!(parse_tool_request("Voici la réponse finale."), None);
        assert_eq!(parse_tool_request("TOOL_REQUEST:   "), None);
    }
}
