//! Domain layer - entities, host capability traits and tool contracts

pub mod embedding;
pub mod error;
pub mod events;
pub mod knowledge_base;
pub mod tool;
pub mod user;

pub use embedding::{
    cosine_similarity, Embedding, EmbeddingFunction, EmbeddingProvider, EmbeddingRequest,
    EmbeddingResponse,
};
pub use error::DomainError;
pub use events::{CitationMetadata, CitationSource, EventEmitter, ToolEvent};
pub use knowledge_base::{
    AccessPermission, CollectionQuery, DocumentMetadata, KnowledgeBase, KnowledgeBaseId,
    KnowledgeBaseRegistry, KnowledgeBaseValidationError, QueryResult, RetrievalProvider,
    RetrievedDocument,
};
pub use tool::{
    tool_specs, SearchKnowledgeArgs, ToolCall, ToolContext, ToolError, ToolSpec, ToolValves,
    ValvesValidationError, LIST_KNOWLEDGE_BASES_TOOL, SEARCH_KNOWLEDGE_TOOL,
};
pub use user::{User, UserId, UserRepository, UserRole, UserValidationError};
