//! Tool domain - settings, per-call context and the function-calling surface

mod context;
mod error;
mod spec;
mod valves;

pub use context::ToolContext;
pub use error::ToolError;
pub use spec::{
    tool_specs, SearchKnowledgeArgs, ToolCall, ToolSpec, LIST_KNOWLEDGE_BASES_TOOL,
    SEARCH_KNOWLEDGE_TOOL,
};
pub use valves::{split_ids, ToolValves, ValvesValidationError, DEFAULT_TOP_K};
