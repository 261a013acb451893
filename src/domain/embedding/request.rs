//! Embedding request types

use crate::domain::user::User;

/// Request to generate embeddings
#[derive(Debug, Clone)]
pub struct EmbeddingRequest {
    /// Texts to embed, in order
    inputs: Vec<String>,
    /// Optional instruction prefix prepended by prefix-aware models
    prefix: Option<String>,
    /// Resolved user the embedding is generated on behalf of
    user: Option<User>,
    /// Optional output dimensions (for models that support it)
    dimensions: Option<usize>,
}

impl EmbeddingRequest {
    /// Create a request for a batch of texts
    pub fn new(inputs: Vec<String>) -> Self {
        Self {
            inputs,
            prefix: None,
            user: None,
            dimensions: None,
        }
    }

    /// Create a request for a single text
    pub fn single(text: impl Into<String>) -> Self {
        Self::new(vec![text.into()])
    }

    /// Set the prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Scope the request to a user
    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    /// Set the output dimensions
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn dimensions(&self) -> Option<usize> {
        self.dimensions
    }

    /// Inputs with the prefix applied, for providers without native prefix support
    pub fn prefixed_inputs(&self) -> Vec<String> {
        match self.prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => self
                .inputs
                .iter()
                .map(|text| format!("{}{}", prefix, text))
                .collect(),
            _ => self.inputs.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserId;

    #[test]
    fn test_single_request() {
        let request = EmbeddingRequest::single("hello");

        assert_eq!(request.len(), 1);
        assert_eq!(request.inputs(), &["hello".to_string()]);
        assert!(request.prefix().is_none());
        assert!(request.user().is_none());
    }

    #[test]
    fn test_prefixed_inputs() {
        let request = EmbeddingRequest::new(vec!["a".into(), "b".into()]).with_prefix("query: ");

        assert_eq!(request.prefixed_inputs(), vec!["query: a", "query: b"]);
    }

    #[test]
    fn test_empty_prefix_is_ignored() {
        let request = EmbeddingRequest::single("a").with_prefix("");

        assert_eq!(request.prefixed_inputs(), vec!["a"]);
    }

    #[test]
    fn test_user_scoping() {
        let user = User::new(UserId::new("user-1").unwrap(), "Alice");
        let request = EmbeddingRequest::single("a").with_user(user);

        assert_eq!(request.user().unwrap().id().as_str(), "user-1");
    }
}
