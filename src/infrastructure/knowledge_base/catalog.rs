//! JSON host catalog used to seed the in-memory backends
//!
//! ```json
//! {
//!   "users": [{ "id": "alice", "name": "Alice" }],
//!   "knowledge_bases": [{
//!     "id": "hr-policies",
//!     "name": "HR Policies",
//!     "owner": "alice",
//!     "public": false,
//!     "files": [{ "id": "f-1", "name": "vacation.md", "chunks": ["..."] }]
//!   }]
//! }
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::registry::{InMemoryKnowledgeBaseRegistry, KnowledgeBaseAccess};
use super::retrieval::InMemoryRetrievalProvider;
use crate::domain::knowledge_base::{DocumentMetadata, KnowledgeBase, KnowledgeBaseId};
use crate::domain::user::{User, UserId};
use crate::domain::DomainError;
use crate::infrastructure::user::InMemoryUserRepository;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostCatalog {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub knowledge_bases: Vec<CatalogKnowledgeBase>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogKnowledgeBase {
    pub id: KnowledgeBaseId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub owner: Option<UserId>,
    #[serde(default)]
    pub readers: Vec<UserId>,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub files: Vec<CatalogFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub chunks: Vec<String>,
}

/// Backends built from a catalog
#[derive(Debug, Clone)]
pub struct CatalogBackends {
    pub users: Arc<InMemoryUserRepository>,
    pub registry: Arc<InMemoryKnowledgeBaseRegistry>,
    pub retrieval: Arc<InMemoryRetrievalProvider>,
}

impl HostCatalog {
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        serde_json::from_str(json)
            .map_err(|e| DomainError::configuration(format!("Invalid catalog: {}", e)))
    }

    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            DomainError::configuration(format!(
                "Failed to read catalog '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&json)
    }

    pub async fn into_backends(self) -> CatalogBackends {
        let users = Arc::new(InMemoryUserRepository::with_users(self.users));
        let registry = Arc::new(InMemoryKnowledgeBaseRegistry::new());
        let retrieval = Arc::new(InMemoryRetrievalProvider::new());

        let mut chunk_total = 0;

        for entry in self.knowledge_bases {
            let collection = entry.id.as_str().to_string();

            for file in &entry.files {
                for chunk in &file.chunks {
                    let metadata = DocumentMetadata::new()
                        .with("source", file.name.clone())
                        .with("file_id", file.id.clone());
                    retrieval
                        .add_chunk(collection.clone(), chunk.clone(), metadata)
                        .await;
                    chunk_total += 1;
                }
            }

            let mut knowledge_base = KnowledgeBase::new(entry.id, entry.name)
                .with_file_ids(entry.files.iter().map(|f| f.id.clone()));
            if let Some(description) = entry.description {
                knowledge_base = knowledge_base.with_description(description);
            }

            let access = KnowledgeBaseAccess {
                owner: entry.owner,
                readers: entry.readers,
                public: entry.public,
            };

            registry.insert(knowledge_base, access).await;
        }

        info!(
            knowledge_bases = registry.len().await,
            chunks = chunk_total,
            "Host catalog loaded"
        );

        CatalogBackends {
            users,
            registry,
            retrieval,
        }
    }
}
