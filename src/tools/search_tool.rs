use crate::errors::ExecutionError;
use crate::tools::Tool;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, info};

const SERPER_ENDPOINT: &str = "https://google.serper.dev/search";
const MAX_RESULTS: usize = 5;

/// Web search backed by the Serper API
#[derive(Debug)]
pub struct SerperSearchTool {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl SerperSearchTool {
    /// Fails when no Serper API key is configured
    pub fn new(
        client: Client,
        api_key: Option<String>,
        endpoint: Option<String>,
    ) -> Result<Self, ExecutionError> {
        let api_key =
            api_key.ok_or_else(|| ExecutionError::tool_init("SERPER_API_KEY is not configured"))?;
        Ok(Self {
            client,
            api_key,
            endpoint: endpoint.unwrap_or_else(|| SERPER_ENDPOINT.to_string()),
        })
    }
}

/// Renders the organic results of a Serper response
fn format_results(body: &Value) -> String {
    let results: Vec<String> = body["organic"]
        .as_array()
        .map(|organic| {
            organic
                .iter()
                .take(MAX_RESULTS)
                .map(|r| {
                    format!(
                        "Title: {}\nLink: {}\nSnippet: {}",
                        r["title"].as_str().unwrap_or_default(),
                        r["link"].as_str().unwrap_or_default(),
                        r["snippet"].as_str().unwrap_or_default()
                    )
                })
                .collect()
        })
        .unwrap_or_default();

    if results.is_empty() {
        "No results found".to_string()
    } else {
        results.join("\n---\n")
    }
}

#[async_trait]
impl Tool for SerperSearchTool {
    fn name(&self) -> &str {
        "search"
    }

    fn usage(&self) -> &str {
        "Search the web. Usage: search <query>"
    }

    async fn invoke(&self, args: &[String]) -> Result<String, String> {
        if args.is_empty() {
            return Err("Usage: search <query>".into());
        }
        let query = args.join(" ");
        debug!("Searching the web for '{}'", query);

        let resp = self
            .client
            .post(&self.endpoint)
            .header("X-API-KEY", &self.api_key)
            .json(&json!({ "q": query, "num": MAX_RESULTS }))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(format!("Search failed with status {}: {}", status, text));
        }

        let body: Value = resp.json().await.map_err(|e| e.to_string())?;
        info!("search '{}' -> status: {}", query, status);
        Ok(format_results(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use mockito::{Matcher, Server};

    #[test]
    fn test_missing_key_is_tool_init_error() {
        let err = SerperSearchTool::new(Client::new(), None, None).unwrap_err();
        assert_eq!(err.kind, ErrorKind::ToolInit);
    }

    #[tokio::test]
    async fn test_search_formats_organic_results() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/search")
            .match_header("x-api-key", "serper-test")
            .match_body(Matcher::PartialJson(json!({"q": "TJM développeur react"})))
            .with_status(200)
            .with_body(
                r#"{"organic": [
                    {"title": "Baromètre TJM", "link": "https://example.com/tjm", "snippet": "450€ en moyenne"},
                    {"title": "Malt", "link": "https://example.com/malt"}
                ]}"#,
            )
            .create_async()
            .await;

        let tool = SerperSearchTool::new(
            Client::new(),
            Some("serper-test".to_string()),
            Some(format!("{}/search", server.url())),
        )
        .unwrap();
        let args: Vec<String> = ["TJM", "développeur", "react"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let output = tool.invoke(&args).await.unwrap();

        assert!(output.starts_with("Title: Baromètre TJM\nLink: https://example.com/tjm"));
        assert!(output.contains("Snippet: 450€ en moyenne"));
        assert!(output.contains("\n---\nTitle: Malt"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_without_query() {
        let tool =
            SerperSearchTool::new(Client::new(), Some("serper-test".to_string()), None).unwrap();
        assert!(tool.invoke(&[]).await.is_err());
    }
}
