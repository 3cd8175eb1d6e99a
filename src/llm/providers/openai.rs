use super::{read_json_response, LlmError, LlmProvider};
use crate::llm::ChatMessage;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Provider implementation for OpenAI's API
#[derive(Debug)]
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    /// Model identifier to use (e.g. "gpt-4o-mini")
    model: String,
    temperature: f32,
    base_url: String,
}

impl OpenAiProvider {
    /// Creates a new OpenAI provider instance
    ///
    /// # Arguments
    /// * `client` - Shared HTTP client
    /// * `api_key` - OpenAI API key
    /// * `model` - The model identifier to use
    /// * `temperature` - Sampling temperature
    /// * `base_url` - Endpoint override, defaults to the public API
    pub fn new(
        client: Client,
        api_key: String,
        model: &str,
        temperature: f32,
        base_url: Option<String>,
    ) -> Self {
        OpenAiProvider {
            client,
            api_key,
            model: model.to_string(),
            temperature,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    /// Calls OpenAI's chat completions API
    async fn call_llm_api(&self, messages: Vec<ChatMessage>) -> Result<String, LlmError> {
        let request_body = json!({
          "model": self.model,
          "messages": messages,
          "temperature": self.temperature
        });

        let res = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let json_resp = read_json_response("OpenAI", res).await?;
        if let Some(content) = json_resp["choices"][0]["message"]["content"].as_str() {
            Ok(content.trim().to_string())
        } else {
            Err(LlmError::EmptyResponse("OpenAI"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn test_openai_chat_completion() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer sk-test")
            .match_body(Matcher::PartialJson(json!({"model": "gpt-4o-mini"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices": [{"message": {"role": "assistant", "content": "  Niche: SaaS B2B \n"}}]}"#)
            .create_async()
            .await;

        let provider = OpenAiProvider::new(
            Client::new(),
            "sk-test".to_string(),
            "gpt-4o-mini",
            0.7,
            Some(server.url()),
        );
        let response = provider
            .call_llm_api(vec![ChatMessage::user("Bonjour")])
            .await
            .unwrap();

        assert_eq!(response, "Niche: SaaS B2B");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_openai_error_status() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .with_body(r#"{"error": {"message": "Incorrect API key"}}"#)
            .create_async()
            .await;

        let provider = OpenAiProvider::new(
            Client::new(),
            "bad".to_string(),
            "gpt-4o-mini",
            0.7,
            Some(server.url()),
        );
        let err = provider
            .call_llm_api(vec![ChatMessage::user("Bonjour")])
            .await
            .unwrap_err();

        match err {
            LlmError::Api { status, body, .. } => {
                assert_eq!(status, 401);
                assert!(body.contains("Incorrect API key"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_openai_missing_content() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices": []}"#)
            .create_async()
            .await;

        let provider = OpenAiProvider::new(
            Client::new(),
            "sk-test".to_string(),
            "gpt-4o-mini",
            0.7,
            Some(server.url()),
        );
        let err = provider.call_llm_api(vec![]).await.unwrap_err();
        assert!(matches!(err, LlmError::EmptyResponse("OpenAI")));
    }
}
