//! Tool implementations exposed to the LLM orchestrator

mod formatting;
mod knowledge_search;

pub use knowledge_search::KnowledgeSearchTools;
