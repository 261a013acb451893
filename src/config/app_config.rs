use serde::Deserialize;

use crate::domain::ToolValves;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Tool settings (valves)
    pub tools: ToolValves,
    pub logging: LoggingConfig,
    pub embedding: EmbeddingSettings,
    /// JSON catalog seeding the in-memory host backends
    pub catalog_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

/// Which embedding provider backs the host embedding function
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingBackend {
    #[default]
    Hashing,
    OpenAi,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmbeddingSettings {
    pub provider: EmbeddingBackend,
    pub model: String,
    pub base_url: Option<String>,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    pub dimensions: Option<usize>,
    pub timeout_secs: u64,
}

impl Default for EmbeddingSettings {
    fn default() -> Self {
        Self {
            provider: EmbeddingBackend::default(),
            model: "text-embedding-3-small".to_string(),
            base_url: None,
            api_key_env: "OPENAI_API_KEY".to_string(),
            dimensions: None,
            timeout_secs: 30,
        }
    }
}

impl AppConfig {
    /// Layered load: `config/default`, `config/local`, then `KB_TOOLS__*` env vars
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("KB_TOOLS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_json(value: serde_json::Value) -> Result<AppConfig, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(
                &value.to_string(),
                config::FileFormat::Json,
            ))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.tools.top_k(), 5);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.embedding.provider, EmbeddingBackend::Hashing);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = from_json(serde_json::json!({
            "tools": { "default_knowledge_bases": "kb_policies, kb_docs", "top_k": 8 },
            "logging": { "format": "json" },
            "embedding": { "provider": "openai", "dimensions": 512 }
        }))
        .unwrap();

        assert_eq!(
            config.tools.default_knowledge_base_ids(),
            vec!["kb_policies", "kb_docs"]
        );
        assert_eq!(config.tools.top_k(), 8);
        assert_eq!(config.tools.relevance_threshold(), 0.0);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.embedding.provider, EmbeddingBackend::OpenAi);
        assert_eq!(config.embedding.dimensions, Some(512));
        assert_eq!(config.embedding.api_key_env, "OPENAI_API_KEY");
    }

    #[test]
    fn test_invalid_valves_are_rejected() {
        let result = from_json(serde_json::json!({
            "tools": { "relevance_threshold": 2.0 }
        }));

        assert!(result.is_err());
    }
}
