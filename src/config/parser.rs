use super::AppConfig;
use crate::errors::ConfigError;
use crate::profile::Profile;
use std::fs;

use tracing::info;

/// Loads the application configuration from a YAML file
///
/// Keys absent from the file keep their default value.
pub fn load_app_config(file_path: &str) -> Result<AppConfig, ConfigError> {
    let yaml_str = fs::read_to_string(file_path)?;
    let config: AppConfig = serde_yaml::from_str(&yaml_str)?;
    info!(
        "Loaded configuration from {} (provider: {}, model: {})",
        file_path, config.llm_provider, config.llm_model
    );
    Ok(config)
}

/// Loads a freelance profile from a YAML or JSON file
pub fn load_profile(file_path: &str) -> Result<Profile, ConfigError> {
    let content = fs::read_to_string(file_path)?;
    let profile: Profile = serde_yaml::from_str(&content)?;
    info!("Loaded profile from {}", file_path);
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_app_config_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "llm_provider: ollama\nllm_model: llama3\nmax_tool_calls: 1").unwrap();

        let config = load_app_config(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.llm_provider, "ollama");
        assert_eq!(config.llm_model, "llama3");
        assert_eq!(config.max_tool_calls, 1);
        assert_eq!(config.api_port, 3000);
        assert!(config.tools_enabled);
    }

    #[test]
    fn test_load_profile_accepts_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"nom": "Ana", "revenu_cible": 6000}}"#).unwrap();

        let profile = load_profile(file.path().to_str().unwrap()).unwrap();
        assert_eq!(profile.name.as_deref(), Some("Ana"));
        assert_eq!(profile.target_income, Some(6000.0));
    }

    #[test]
    fn test_load_app_config_missing_file() {
        let err = load_app_config("/nonexistent/freelance.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
