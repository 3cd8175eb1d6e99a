mod parser;
use serde::{Deserialize, Serialize};

pub use parser::{load_app_config, load_profile};

/// Application configuration, passed explicitly to every component that talks to
/// an external service
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Name of the LLM provider ("openai", "anthropic" or "ollama")
    pub llm_provider: String,
    /// Model identifier used with the provider
    pub llm_model: String,
    /// Overrides the provider endpoint, e.g. for a proxy or a local gateway
    pub llm_base_url: Option<String>,
    /// Sampling temperature sent to the model
    pub temperature: f32,
    /// OpenAI API key
    pub openai_api_key: Option<String>,
    /// Anthropic API key
    pub anthropic_api_key: Option<String>,
    /// Serper API key, required by the search tool
    pub serper_api_key: Option<String>,
    /// Whether the agents get the search and scrape tools
    pub tools_enabled: bool,
    /// Maximum number of tool invocations per work item
    pub max_tool_calls: usize,
    /// Timeout applied to every outbound HTTP request
    pub request_timeout_secs: u64,
    /// Port of the HTTP API
    pub api_port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            llm_provider: "openai".to_string(),
            llm_model: "gpt-4o-mini".to_string(),
            llm_base_url: None,
            temperature: 0.7,
            openai_api_key: None,
            anthropic_api_key: None,
            serper_api_key: None,
            tools_enabled: true,
            max_tool_calls: 3,
            request_timeout_secs: 300,
            api_port: 3000,
        }
    }
}

impl AppConfig {
    /// Applies the values found in the process environment on top of this configuration
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides read through `lookup`; empty values are ignored
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("LLM_PROVIDER") {
            self.llm_provider = v;
        }
        if let Some(v) = get("LLM_MODEL") {
            self.llm_model = v;
        }
        if let Some(v) = get("LLM_BASE_URL") {
            self.llm_base_url = Some(v);
        }
        if let Some(v) = get("OPENAI_API_KEY") {
            self.openai_api_key = Some(v);
        }
        if let Some(v) = get("ANTHROPIC_API_KEY") {
            self.anthropic_api_key = Some(v);
        }
        if let Some(v) = get("SERPER_API_KEY") {
            self.serper_api_key = Some(v);
        }
        self
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_secs)
    }
}
