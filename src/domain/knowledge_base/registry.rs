//! Knowledge base registry trait

use std::fmt::Debug;

use async_trait::async_trait;

use super::entity::{AccessPermission, KnowledgeBase};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Host registry of knowledge bases.
///
/// Implementations return descriptors in their own order; callers must not
/// assume any sorting.
#[async_trait]
pub trait KnowledgeBaseRegistry: Send + Sync + Debug {
    /// Every knowledge base, regardless of caller
    async fn list_all(&self) -> Result<Vec<KnowledgeBase>, DomainError>;

    /// Knowledge bases on which `user_id` holds `permission`
    async fn list_for_user(
        &self,
        user_id: &UserId,
        permission: AccessPermission,
    ) -> Result<Vec<KnowledgeBase>, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Which registry query was issued
    #[derive(Debug, Clone, PartialEq)]
    pub enum RegistryCall {
        All,
        ForUser(String, AccessPermission),
    }

    /// Mock registry returning fixed descriptors
    #[derive(Debug, Default)]
    pub struct MockKnowledgeBaseRegistry {
        all: Vec<KnowledgeBase>,
        per_user: Vec<KnowledgeBase>,
        error: Option<String>,
        calls: Mutex<Vec<RegistryCall>>,
    }

    impl MockKnowledgeBaseRegistry {
        pub fn new() -> Self {
            Self::default()
        }

        /// Descriptors returned by `list_all`
        pub fn with_all(mut self, knowledge_bases: Vec<KnowledgeBase>) -> Self {
            self.all = knowledge_bases;
            self
        }

        /// Descriptors returned by `list_for_user`
        pub fn with_user_visible(mut self, knowledge_bases: Vec<KnowledgeBase>) -> Self {
            self.per_user = knowledge_bases;
            self
        }

        pub fn with_error(mut self, error: impl Into<String>) -> Self {
            self.error = Some(error.into());
            self
        }

        pub fn calls(&self) -> Vec<RegistryCall> {
            self.calls.lock().unwrap().clone()
        }

        fn check_error(&self) -> Result<(), DomainError> {
            match &self.error {
                Some(error) => Err(DomainError::registry(error.clone())),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl KnowledgeBaseRegistry for MockKnowledgeBaseRegistry {
        async fn list_all(&self) -> Result<Vec<KnowledgeBase>, DomainError> {
            self.calls.lock().unwrap().push(RegistryCall::All);
            self.check_error()?;
            Ok(self.all.clone())
        }

        async fn list_for_user(
            &self,
            user_id: &UserId,
            permission: AccessPermission,
        ) -> Result<Vec<KnowledgeBase>, DomainError> {
            self.calls
                .lock()
                .unwrap()
                .push(RegistryCall::ForUser(user_id.as_str().to_string(), permission));
            self.check_error()?;
            Ok(self.per_user.clone())
        }
    }
}
