//! Knowledge search tools
//!
//! Two LLM-callable tools over a host's knowledge bases:
//! - `search_knowledge`: retrieve ranked chunks and return them as
//!   citation-tagged context, streaming status and citation events
//! - `list_available_knowledge_bases`: describe the knowledge bases the
//!   caller may read
//!
//! Retrieval, embeddings, user lookup and the knowledge base registry are
//! host capabilities behind traits in [`domain`]. In-memory implementations
//! live in [`infrastructure`] for local runs and tests.

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{
    tool_specs, DomainError, EventEmitter, ToolCall, ToolContext, ToolEvent, ToolSpec, ToolValves,
};
pub use infrastructure::tools::KnowledgeSearchTools;
