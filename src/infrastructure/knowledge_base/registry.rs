//! In-memory knowledge base registry with per-user access grants

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::domain::knowledge_base::{AccessPermission, KnowledgeBase, KnowledgeBaseRegistry};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Who may see or change a knowledge base
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBaseAccess {
    /// Owner has read and write access
    #[serde(default)]
    pub owner: Option<UserId>,
    /// Users granted read access
    #[serde(default)]
    pub readers: Vec<UserId>,
    /// Readable by every user
    #[serde(default)]
    pub public: bool,
}

impl KnowledgeBaseAccess {
    pub fn owned_by(owner: UserId) -> Self {
        Self {
            owner: Some(owner),
            ..Self::default()
        }
    }

    pub fn public() -> Self {
        Self {
            public: true,
            ..Self::default()
        }
    }

    pub fn with_reader(mut self, reader: UserId) -> Self {
        self.readers.push(reader);
        self
    }

    pub fn allows(&self, user_id: &UserId, permission: AccessPermission) -> bool {
        let is_owner = self.owner.as_ref() == Some(user_id);

        match permission {
            AccessPermission::Write => is_owner,
            AccessPermission::Read => is_owner || self.public || self.readers.contains(user_id),
        }
    }
}

/// Registry keeping knowledge bases in insertion order
#[derive(Debug, Default)]
pub struct InMemoryKnowledgeBaseRegistry {
    entries: RwLock<Vec<(KnowledgeBase, KnowledgeBaseAccess)>>,
}

impl InMemoryKnowledgeBaseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a knowledge base; a replaced entry keeps its position
    pub async fn insert(&self, knowledge_base: KnowledgeBase, access: KnowledgeBaseAccess) {
        let mut entries = self.entries.write().await;

        match entries
            .iter_mut()
            .find(|(kb, _)| kb.id() == knowledge_base.id())
        {
            Some(entry) => *entry = (knowledge_base, access),
            None => entries.push((knowledge_base, access)),
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl KnowledgeBaseRegistry for InMemoryKnowledgeBaseRegistry {
    async fn list_all(&self) -> Result<Vec<KnowledgeBase>, DomainError> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .map(|(kb, _)| kb.clone())
            .collect())
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
        permission: AccessPermission,
    ) -> Result<Vec<KnowledgeBase>, DomainError> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .filter(|(_, access)| access.allows(user_id, permission))
            .map(|(kb, _)| kb.clone())
            .collect())
    }
}
