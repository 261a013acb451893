//! Text rendering of tool responses

use std::fmt::Write;

use crate::domain::{KnowledgeBase, ToolError};

pub(crate) const SEARCHING_STATUS: &str = "Searching knowledge bases...";
pub(crate) const NO_RESULTS_STATUS: &str = "No relevant knowledge found";
pub(crate) const NO_KNOWLEDGE_BASES: &str = "No knowledge bases are currently available.";

const CONTEXT_PREAMBLE: &str = "Here is the relevant information from the knowledge bases:";
const CITATION_INSTRUCTIONS: &str = "Use the information above to answer the user's question. \
When referencing specific information, include inline citations using [1], [2], etc., \
corresponding to the source IDs in the <source> tags. Do not include the XML tags in your response.";

/// Rejection caused by the request itself
pub(crate) fn request_error(error: &ToolError) -> String {
    format!("Error: {}", error)
}

pub(crate) fn search_error(error: &ToolError) -> String {
    format!("Error searching knowledge bases: {}", error)
}

pub(crate) fn list_error(error: &ToolError) -> String {
    format!("Error listing knowledge bases: {}", error)
}

pub(crate) fn no_results(query: &str) -> String {
    format!(
        "No relevant information found in the knowledge bases for query: '{}'",
        query
    )
}

pub(crate) fn found_status(count: usize) -> String {
    format!("Found {} relevant documents", count)
}

/// Score as surfaced to the UI: three decimal places, sign untouched
pub(crate) fn round_score(distance: f64) -> f64 {
    (distance * 1000.0).round() / 1000.0
}

/// Append one tagged source block followed by a blank line
pub(crate) fn push_source_block(buffer: &mut String, citation_id: usize, name: &str, text: &str) {
    let _ = write!(
        buffer,
        "<source id=\"{}\" name=\"{}\">{}</source>\n\n",
        citation_id, name, text
    );
}

/// Wrap the accumulated source blocks in the answering instructions
pub(crate) fn wrap_context(blocks: &str) -> String {
    format!(
        "{}\n\n<context>\n{}\n</context>\n\n{}",
        CONTEXT_PREAMBLE,
        blocks.trim(),
        CITATION_INSTRUCTIONS
    )
}

pub(crate) fn knowledge_base_list(knowledge_bases: &[KnowledgeBase]) -> String {
    if knowledge_bases.is_empty() {
        return NO_KNOWLEDGE_BASES.to_string();
    }

    let mut lines = vec!["Available knowledge bases:\n".to_string()];

    for kb in knowledge_bases {
        let description = kb
            .description()
            .filter(|d| !d.is_empty())
            .unwrap_or("No description");

        lines.push(format!(
            "- **{}** (ID: `{}`)\n  Description: {}\n  Files: {}",
            kb.name(),
            kb.id(),
            description,
            kb.file_count()
        ));
    }

    lines.join("\n")
}
