//! Knowledge Base domain - registry descriptors and the retrieval contract

mod entity;
mod registry;
mod retrieval;
mod validation;

pub use entity::{AccessPermission, KnowledgeBase, KnowledgeBaseId};
pub use registry::KnowledgeBaseRegistry;
pub use retrieval::{
    CollectionQuery, DocumentMetadata, QueryResult, RetrievalProvider, RetrievedDocument,
};
pub use validation::{validate_knowledge_base_id, KnowledgeBaseValidationError};

#[cfg(test)]
pub use registry::mock::{MockKnowledgeBaseRegistry, RegistryCall};
#[cfg(test)]
pub use retrieval::mock::{MockRetrievalProvider, RecordedQuery};
