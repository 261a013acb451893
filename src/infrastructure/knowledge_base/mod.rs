//! In-memory knowledge base backends for development and tests

mod catalog;
mod registry;
mod retrieval;

pub use catalog::{CatalogBackends, CatalogFile, CatalogKnowledgeBase, HostCatalog};
pub use registry::{InMemoryKnowledgeBaseRegistry, KnowledgeBaseAccess};
pub use retrieval::InMemoryRetrievalProvider;
