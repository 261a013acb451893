//! Function-calling descriptions of the tools

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const SEARCH_KNOWLEDGE_TOOL: &str = "search_knowledge";
pub const LIST_KNOWLEDGE_BASES_TOOL: &str = "list_available_knowledge_bases";

/// Tool description in the shape LLM function-calling APIs expect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    /// JSON Schema of the arguments object
    pub parameters: Value,
}

/// A tool invocation requested by the orchestrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, arguments: Value) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

/// Arguments of `search_knowledge`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchKnowledgeArgs {
    pub query: String,
    #[serde(default)]
    pub knowledge_base_ids: Option<String>,
}

/// Specs for every tool, in a stable order
pub fn tool_specs() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: SEARCH_KNOWLEDGE_TOOL.to_string(),
            description: "Search organizational knowledge bases for relevant information. \
                Use this tool when the user asks about internal documentation, policies, \
                procedures, technical specifications, guidelines, or any topic that might \
                be covered in the knowledge base."
                .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The search query describing what information to find"
                    },
                    "knowledge_base_ids": {
                        "type": "string",
                        "description": "Optional comma-separated knowledge base IDs to search (e.g., \"kb_policies,kb_docs\"). If not provided, searches default knowledge bases."
                    }
                },
                "required": ["query"]
            }),
        },
        ToolSpec {
            name: LIST_KNOWLEDGE_BASES_TOOL.to_string(),
            description: "List all knowledge bases available to search. Use this tool when \
                you need to discover which knowledge bases exist and their IDs before \
                searching them."
                .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {}
            }),
        },
    ]
}
