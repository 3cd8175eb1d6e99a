use super::{read_json_response, LlmError, LlmProvider};
use crate::llm::ChatMessage;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";

/// Provider implementation for Anthropic's API
#[derive(Debug)]
pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    model: String,
    temperature: f32,
    base_url: String,
}

impl AnthropicProvider {
    pub fn new(
        client: Client,
        api_key: String,
        model: &str,
        temperature: f32,
        base_url: Option<String>,
    ) -> Self {
        AnthropicProvider {
            client,
            api_key,
            model: model.to_string(),
            temperature,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

#[async_trait]
impl LlmProvider for AnthropicProvider {
    /// Calls Anthropic's messages API
    ///
    /// System messages are moved to the top-level `system` field.
    async fn call_llm_api(&self, messages: Vec<ChatMessage>) -> Result<String, LlmError> {
        let (system_messages, messages): (Vec<_>, Vec<_>) =
            messages.into_iter().partition(|msg| msg.role == "system");
        let system_content = system_messages
            .into_iter()
            .map(|m| m.content)
            .collect::<Vec<_>>()
            .join("\n");

        let request_body = json!({
            "model": self.model,
            "system": system_content,
            "max_tokens": 4096,
            "temperature": self.temperature,
            "messages": messages
        });

        let res = self
            .client
            .post(format!("{}/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&request_body)
            .send()
            .await?;

        let json_resp = read_json_response("Anthropic", res).await?;
        if let Some(content) = json_resp["content"][0]["text"].as_str() {
            debug!("Anthropic response: {}", content);
            Ok(content.trim().to_string())
        } else {
            Err(LlmError::EmptyResponse("Anthropic"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn test_anthropic_moves_system_prompt() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/messages")
            .match_header("x-api-key", "sk-ant-test")
            .match_body(Matcher::PartialJson(json!({
                "system": "Vous êtes un expert",
                "messages": [{"role": "user", "content": "Bonjour"}]
            })))
            .with_status(200)
            .with_body(r#"{"content": [{"type": "text", "text": "Persona: CTO de PME"}]}"#)
            .create_async()
            .await;

        let provider = AnthropicProvider::new(
            Client::new(),
            "sk-ant-test".to_string(),
            "claude-3-5-haiku-latest",
            0.7,
            Some(server.url()),
        );
        let response = provider
            .call_llm_api(vec![
                ChatMessage::system("Vous êtes un expert"),
                ChatMessage::user("Bonjour"),
            ])
            .await
            .unwrap();

        assert_eq!(response, "Persona: CTO de PME");
        mock.assert_async().await;
    }
}
