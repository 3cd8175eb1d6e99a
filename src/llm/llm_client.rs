use crate::config::AppConfig;
use crate::llm::providers::{
    anthropic::AnthropicProvider, ollama::OllamaProvider, openai::OpenAiProvider, LlmError,
    LlmProvider,
};
use crate::llm::ChatMessage;
use tracing::debug;

/// Generic LLM client that delegates work to a concrete provider.
#[derive(Debug)]
pub struct LlmClient {
    provider: Box<dyn LlmProvider>,
}

impl LlmClient {
    /// Creates a client for the provider and model named in the configuration.
    ///
    /// # Arguments
    /// * `config` - Application configuration holding provider, model, keys and timeouts
    ///
    /// # Returns
    /// * `Result<LlmClient, LlmError>` - New client, or an error if the provider is unknown
    ///   or its API key is missing
    pub fn from_config(config: &AppConfig) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        let base_url = config.llm_base_url.clone();

        let provider: Box<dyn LlmProvider> = match config.llm_provider.as_str() {
            "openai" => {
                let api_key = config
                    .openai_api_key
                    .clone()
                    .ok_or(LlmError::MissingApiKey("OPENAI_API_KEY"))?;
                Box::new(OpenAiProvider::new(
                    http,
                    api_key,
                    &config.llm_model,
                    config.temperature,
                    base_url,
                ))
            }
            "anthropic" => {
                let api_key = config
                    .anthropic_api_key
                    .clone()
                    .ok_or(LlmError::MissingApiKey("ANTHROPIC_API_KEY"))?;
                Box::new(AnthropicProvider::new(
                    http,
                    api_key,
                    &config.llm_model,
                    config.temperature,
                    base_url,
                ))
            }
            "ollama" => Box::new(OllamaProvider::new(http, &config.llm_model, base_url)),
            other => return Err(LlmError::UnknownProvider(other.to_string())),
        };

        debug!(
            "LLM client ready (provider: {}, model: {})",
            config.llm_provider, config.llm_model
        );
        Ok(LlmClient { provider })
    }

    /// Wraps an already built provider
    #[cfg(test)]
    pub fn with_provider(provider: Box<dyn LlmProvider>) -> Self {
        LlmClient { provider }
    }

    /// Sends the conversation to the model and returns the raw response text.
    pub async fn call_llm_api(&self, messages: Vec<ChatMessage>) -> Result<String, LlmError> {
        self.provider.call_llm_api(messages).await
    }
}
