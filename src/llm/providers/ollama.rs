use super::{read_json_response, LlmError, LlmProvider};
use crate::llm::ChatMessage;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Provider implementation for Ollama's local API
#[derive(Debug)]
pub struct OllamaProvider {
    client: Client,
    /// Model identifier to use (e.g. "llama3", "mistral")
    model: String,
    base_url: String,
}

impl OllamaProvider {
    /// `base_url` is the Ollama host, e.g. `http://gpu-box:11434`
    pub fn new(client: Client, model: &str, base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        OllamaProvider {
            client,
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl LlmProvider for OllamaProvider {
    /// Calls Ollama's chat API without streaming
    async fn call_llm_api(&self, messages: Vec<ChatMessage>) -> Result<String, LlmError> {
        let request_body = json!({
            "model": self.model,
            "stream": false,
            "messages": messages
        });

        let res = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&request_body)
            .send()
            .await?;

        let json_resp = read_json_response("Ollama", res).await?;
        if let Some(content) = json_resp["message"]["content"].as_str() {
            Ok(content.trim().to_string())
        } else {
            Err(LlmError::EmptyResponse("Ollama"))
        }
    }
}
