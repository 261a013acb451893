//! Retrieval capability: embedding plus nearest-neighbour search over collections

use std::fmt::Debug;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::embedding::EmbeddingFunction;
use crate::domain::DomainError;

/// A query against one or more knowledge-base collections
#[derive(Debug, Clone)]
pub struct CollectionQuery {
    /// Collections (knowledge base ids) to search
    pub collection_names: Vec<String>,
    /// Query texts; results come back one list per query
    pub queries: Vec<String>,
    /// Callback used to embed queries
    pub embedding_function: EmbeddingFunction,
    /// Maximum number of documents per query
    pub k: usize,
}

/// Metadata attached to a retrieved chunk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentMetadata(Map<String, Value>);

impl DocumentMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Raw value for `key`; JSON `null` counts as absent
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    /// Value for `key` rendered as text
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.get(key).map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Source (file name or URL) of the chunk
    pub fn source(&self) -> Option<String> {
        self.get_str("source")
    }

    /// Id of the file the chunk was extracted from
    pub fn file_id(&self) -> Option<String> {
        self.get_str("file_id")
    }
}

impl From<Map<String, Value>> for DocumentMetadata {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Raw retrieval output: parallel lists, one entry per submitted query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(default)]
    pub documents: Vec<Vec<String>>,
    #[serde(default)]
    pub metadatas: Vec<Vec<DocumentMetadata>>,
    #[serde(default)]
    pub distances: Vec<Vec<f64>>,
}

/// One retrieved chunk of the first query
#[derive(Debug, Clone, PartialEq)]
pub struct RetrievedDocument {
    pub text: String,
    pub metadata: DocumentMetadata,
    /// Backend-defined score; its direction is not interpreted here
    pub distance: f64,
}

impl QueryResult {
    /// Result holding a single query's lists
    pub fn single(
        documents: Vec<String>,
        metadatas: Vec<DocumentMetadata>,
        distances: Vec<f64>,
    ) -> Self {
        Self {
            documents: vec![documents],
            metadatas: vec![metadatas],
            distances: vec![distances],
        }
    }

    /// Document texts of the first query
    pub fn first_query_documents(&self) -> &[String] {
        self.documents.first().map_or(&[][..], Vec::as_slice)
    }

    /// Whether the first query produced no documents
    pub fn is_empty(&self) -> bool {
        self.first_query_documents().is_empty()
    }

    /// First query's documents zipped with their metadata and distance.
    ///
    /// Stops at the shortest of the three lists.
    pub fn first_query(&self) -> Vec<RetrievedDocument> {
        let metadatas = self.metadatas.first().map_or(&[][..], Vec::as_slice);
        let distances = self.distances.first().map_or(&[][..], Vec::as_slice);

        self.first_query_documents()
            .iter()
            .zip(metadatas)
            .zip(distances)
            .map(|((text, metadata), distance)| RetrievedDocument {
                text: text.clone(),
                metadata: metadata.clone(),
                distance: *distance,
            })
            .collect()
    }
}

/// Host retrieval capability
#[async_trait]
pub trait RetrievalProvider: Send + Sync + Debug {
    /// Run `query` against its collections; `None` means the backend had nothing to return
    async fn query_collection(
        &self,
        query: CollectionQuery,
    ) -> Result<Option<QueryResult>, DomainError>;
}


#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(source: &str) -> DocumentMetadata {
        DocumentMetadata::new().with("source", source)
    }

    #[test]
    fn test_metadata_accessors() {
        let metadata = DocumentMetadata::new()
            .with("source", "handbook.pdf")
            .with("file_id", 42)
            .with("page", Value::Null);

        assert_eq!(metadata.source().as_deref(), Some("handbook.pdf"));
        assert_eq!(metadata.file_id().as_deref(), Some("42"));
        assert!(metadata.get("page").is_none());
    }

    #[test]
    fn test_first_query_zips_lists() {
        let result = QueryResult::single(
            vec!["a".into(), "b".into()],
            vec![metadata("s1"), metadata("s2")],
            vec![0.1, 0.2],
        );

        let docs = result.first_query();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[1].text, "b");
        assert_eq!(docs[1].metadata.source().as_deref(), Some("s2"));
        assert_eq!(docs[1].distance, 0.2);
    }

    #[test]
    fn test_first_query_stops_at_shortest_list() {
        let result = QueryResult::single(
            vec!["a".into(), "b".into(), "c".into()],
            vec![metadata("s1"), metadata("s2")],
            vec![0.1, 0.2, 0.3],
        );

        assert_eq!(result.first_query_documents().len(), 3);
        assert_eq!(result.first_query().len(), 2);
    }

    #[test]
    fn test_empty_results() {
        assert!(QueryResult::default().is_empty());
        assert!(QueryResult::single(vec![], vec![], vec![]).is_empty());
    }

    #[test]
    fn test_deserialize_partial_result() {
        let result: QueryResult = serde_json::from_value(serde_json::json!({
            "documents": [["only text"]]
        }))
        .unwrap();

        assert!(!result.is_empty());
        assert!(result.first_query().is_empty());
    }
}
