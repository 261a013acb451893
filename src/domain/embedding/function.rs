//! Embedding callback handed to the retrieval capability

use std::fmt;
use std::sync::Arc;

use super::{EmbeddingProvider, EmbeddingRequest};
use crate::domain::user::User;
use crate::domain::DomainError;

/// An embedding provider bound to the user a request runs on behalf of.
///
/// Retrieval backends call [`EmbeddingFunction::embed`] for query (and, for
/// some backends, document) vectors. The bound user travels with every call.
#[derive(Clone)]
pub struct EmbeddingFunction {
    provider: Arc<dyn EmbeddingProvider>,
    user: Option<User>,
}

impl EmbeddingFunction {
    pub fn new(provider: Arc<dyn EmbeddingProvider>, user: Option<User>) -> Self {
        Self { provider, user }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.provider_name()
    }

    /// Embed `texts` in order, optionally applying `prefix`
    pub async fn embed(
        &self,
        texts: &[String],
        prefix: Option<&str>,
    ) -> Result<Vec<Vec<f32>>, DomainError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let mut request = EmbeddingRequest::new(texts.to_vec());

        if let Some(prefix) = prefix {
            request = request.with_prefix(prefix);
        }

        if let Some(user) = &self.user {
            request = request.with_user(user.clone());
        }

        let response = self.provider.embed(request).await?;

        if response.len() != texts.len() {
            return Err(DomainError::provider(
                self.provider.provider_name(),
                format!(
                    "Expected {} embeddings, received {}",
                    texts.len(),
                    response.len()
                ),
            ));
        }

        Ok(response.into_vectors())
    }
}

impl fmt::Debug for EmbeddingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddingFunction")
            .field("provider", &self.provider.provider_name())
            .field("user", &self.user.as_ref().map(|u| u.id().as_str()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::embedding::MockEmbeddingProvider;
    use crate::domain::user::UserId;

    #[tokio::test]
    async fn test_embed_passes_user_and_prefix() {
        let provider = Arc::new(MockEmbeddingProvider::new("mock", 8));
        let user = User::new(UserId::new("user-1").unwrap(), "Alice");
        let function = EmbeddingFunction::new(provider.clone(), Some(user));

        let vectors = function
            .embed(&["hello".to_string()], Some("query: "))
            .await
            .unwrap();

        assert_eq!(vectors.len(), 1);
        assert_eq!(vectors[0].len(), 8);

        let requests = provider.requests();
        assert_eq!(requests[0].prefix(), Some("query: "));
        assert_eq!(requests[0].user().unwrap().id().as_str(), "user-1");
    }

    #[tokio::test]
    async fn test_embed_empty_input_skips_provider() {
        let provider = Arc::new(MockEmbeddingProvider::new("mock", 8));
        let function = EmbeddingFunction::new(provider.clone(), None);

        let vectors = function.embed(&[], None).await.unwrap();

        assert!(vectors.is_empty());
        assert!(provider.requests().is_empty());
    }

    #[tokio::test]
    async fn test_embed_propagates_provider_error() {
        let provider = Arc::new(MockEmbeddingProvider::new("mock", 8).with_error("down"));
        let function = EmbeddingFunction::new(provider, None);

        let err = function.embed(&["x".to_string()], None).await.unwrap_err();

        assert_eq!(err.to_string(), "Provider error: mock - down");
    }
}
