use crate::llm::ChatMessage;
use async_trait::async_trait;
use std::fmt::Debug;

pub mod anthropic;
pub mod ollama;
pub mod openai;

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Unknown provider '{0}'")]
    UnknownProvider(String),
    #[error("{0} is not configured")]
    MissingApiKey(&'static str),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{provider} API error ({status}): {body}")]
    Api {
        provider: &'static str,
        status: u16,
        body: String,
    },
    #[error("Invalid JSON in {0} response: {1}")]
    Json(&'static str, serde_json::Error),
    #[error("No content in {0} LLM response")]
    EmptyResponse(&'static str),
    #[error("Response is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

#[async_trait]
pub trait LlmProvider: Debug + Send + Sync {
    async fn call_llm_api(&self, messages: Vec<ChatMessage>) -> Result<String, LlmError>;
}

/// Reads a provider response, failing on non-success status or invalid UTF-8
pub(crate) async fn read_json_response(
    provider: &'static str,
    res: reqwest::Response,
) -> Result<serde_json::Value, LlmError> {
    let status = res.status();
    let body = String::from_utf8(res.bytes().await?.to_vec())?;

    if !status.is_success() {
        return Err(LlmError::Api {
            provider,
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body).map_err(|e| LlmError::Json(provider, e))
}
