//! In-memory retrieval backend
//!
//! Brute-force cosine ranking over chunks embedded at query time through the
//! caller's embedding function. Intended for development and tests only.

use std::collections::HashMap;

use async_trait::async_trait;
use futures::future::try_join_all;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::embedding::cosine_similarity;
use crate::domain::knowledge_base::{
    CollectionQuery, DocumentMetadata, QueryResult, RetrievalProvider,
};
use crate::domain::DomainError;

#[derive(Debug, Clone)]
struct StoredChunk {
    id: String,
    text: String,
    metadata: DocumentMetadata,
}

/// Chunks grouped by collection (knowledge base id)
#[derive(Debug, Default)]
pub struct InMemoryRetrievalProvider {
    collections: RwLock<HashMap<String, Vec<StoredChunk>>>,
}

impl InMemoryRetrievalProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk to `collection`, returning its generated id
    pub async fn add_chunk(
        &self,
        collection: impl Into<String>,
        text: impl Into<String>,
        metadata: DocumentMetadata,
    ) -> String {
        let id = Uuid::new_v4().to_string();
        let metadata = metadata.with("chunk_id", id.clone());

        self.collections
            .write()
            .await
            .entry(collection.into())
            .or_default()
            .push(StoredChunk {
                id: id.clone(),
                text: text.into(),
                metadata,
            });

        id
    }

    pub async fn chunk_count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }

    async fn snapshot(&self, names: &[String]) -> Vec<(String, Vec<StoredChunk>)> {
        let collections = self.collections.read().await;

        names
            .iter()
            .filter_map(|name| match collections.get(name) {
                Some(chunks) => Some((name.clone(), chunks.clone())),
                None => {
                    warn!(collection = %name, "Unknown collection skipped");
                    None
                }
            })
            .collect()
    }
}

#[async_trait]
impl RetrievalProvider for InMemoryRetrievalProvider {
    async fn query_collection(
        &self,
        query: CollectionQuery,
    ) -> Result<Option<QueryResult>, DomainError> {
        let collections = self.snapshot(&query.collection_names).await;

        if collections.is_empty() {
            return Ok(None);
        }

        let function = &query.embedding_function;
        let query_vectors = function.embed(&query.queries, None).await?;

        let chunk_vectors = try_join_all(collections.iter().map(|(_, chunks)| async move {
            let texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
            function.embed(&texts, None).await
        }))
        .await?;

        let candidates: Vec<(&StoredChunk, &Vec<f32>)> = collections
            .iter()
            .zip(&chunk_vectors)
            .flat_map(|((_, chunks), vectors)| chunks.iter().zip(vectors))
            .collect();

        let mut result = QueryResult::default();

        for query_vector in &query_vectors {
            let mut scored: Vec<(f64, &StoredChunk)> = candidates
                .iter()
                .map(|(chunk, vector)| {
                    let distance = 1.0 - cosine_similarity(query_vector, vector) as f64;
                    (distance, *chunk)
                })
                .collect();

            scored.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.id.cmp(&b.1.id)));
            scored.truncate(query.k);

            result.documents.push(scored.iter().map(|(_, c)| c.text.clone()).collect());
            result
                .metadatas
                .push(scored.iter().map(|(_, c)| c.metadata.clone()).collect());
            result.distances.push(scored.iter().map(|(d, _)| *d).collect());
        }

        debug!(
            collections = collections.len(),
            candidates = candidates.len(),
            "In-memory retrieval complete"
        );

        Ok(Some(result))
    }
}
