//! Builds the configured embedding provider

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use super::{HashingEmbeddingProvider, HttpClient, OpenAiEmbeddingProvider};
use crate::config::{EmbeddingBackend, EmbeddingSettings};
use crate::domain::{DomainError, EmbeddingProvider};

/// Create the embedding provider described by `settings`.
///
/// The OpenAI backend reads its key from the environment variable named in
/// `api_key_env`.
pub fn create_embedding_provider(
    settings: &EmbeddingSettings,
) -> Result<Arc<dyn EmbeddingProvider>, DomainError> {
    match settings.provider {
        EmbeddingBackend::Hashing => {
            let provider = match settings.dimensions {
                Some(dimensions) => HashingEmbeddingProvider::new(dimensions)?,
                None => HashingEmbeddingProvider::default(),
            };

            info!(dimensions = provider.dimensions(), "Using hashing embedding provider");
            Ok(Arc::new(provider))
        }
        EmbeddingBackend::OpenAi => {
            let api_key = std::env::var(&settings.api_key_env).map_err(|_| {
                DomainError::configuration(format!(
                    "Environment variable '{}' is not set",
                    settings.api_key_env
                ))
            })?;

            let client = HttpClient::with_timeout(Duration::from_secs(settings.timeout_secs))?;
            let mut provider = match &settings.base_url {
                Some(base_url) => OpenAiEmbeddingProvider::with_base_url(client, api_key, base_url),
                None => OpenAiEmbeddingProvider::new(client, api_key),
            }
            .with_model(&settings.model);

            if let Some(dimensions) = settings.dimensions {
                provider = provider.with_dimensions(dimensions);
            }

            info!(model = %settings.model, "Using OpenAI-compatible embedding provider");
            Ok(Arc::new(provider))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashing_backend() {
        let settings = EmbeddingSettings {
            dimensions: Some(64),
            ..EmbeddingSettings::default()
        };

        let provider = create_embedding_provider(&settings).unwrap();

        assert_eq!(provider.provider_name(), "hashing");
    }

    #[test]
    fn test_openai_backend_requires_key() {
        let settings = EmbeddingSettings {
            provider: EmbeddingBackend::OpenAi,
            api_key_env: "KB_TOOLS_TEST_UNSET_KEY".to_string(),
            ..EmbeddingSettings::default()
        };

        let err = create_embedding_provider(&settings).unwrap_err();

        assert!(err.to_string().contains("KB_TOOLS_TEST_UNSET_KEY"));
    }

    #[test]
    fn test_hashing_backend_rejects_zero_dimensions() {
        let settings = EmbeddingSettings {
            dimensions: Some(0),
            ..EmbeddingSettings::default()
        };

        assert!(create_embedding_provider(&settings).is_err());
    }
}
