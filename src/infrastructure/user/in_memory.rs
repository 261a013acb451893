//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository with initial users
    pub fn with_users(users: Vec<User>) -> Self {
        let users_map = users
            .into_iter()
            .map(|user| (user.id().as_str().to_string(), user))
            .collect();

        Self {
            users: Arc::new(RwLock::new(users_map)),
        }
    }

    /// Insert or replace a user
    pub async fn save(&self, user: User) {
        self.users
            .write()
            .await
            .insert(user.id().as_str().to_string(), user);
    }

    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(id.as_str()).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserRole;

    fn user(id: &str) -> User {
        User::new(UserId::new(id).unwrap(), id.to_uppercase())
    }

    #[tokio::test]
    async fn test_get_existing_and_missing() {
        let repo = InMemoryUserRepository::with_users(vec![user("alice")]);

        let found = repo.get(&UserId::new("alice").unwrap()).await.unwrap();
        let missing = repo.get(&UserId::new("bob").unwrap()).await.unwrap();

        assert_eq!(found.unwrap().name(), "ALICE");
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_save_replaces_user() {
        let repo = InMemoryUserRepository::new();
        repo.save(user("alice")).await;
        repo.save(user("alice").with_role(UserRole::Admin)).await;

        let found = repo.get(&UserId::new("alice").unwrap()).await.unwrap();

        assert_eq!(repo.count().await, 1);
        assert!(found.unwrap().is_admin());
        assert!(repo.exists(&UserId::new("alice").unwrap()).await.unwrap());
    }
}
