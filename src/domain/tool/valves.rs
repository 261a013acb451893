//! Administrator-configurable settings of the knowledge tools

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of chunks retrieved when nothing else is configured
pub const DEFAULT_TOP_K: usize = 5;

/// Errors raised when settings fail validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValvesValidationError {
    #[error("top_k must be at least 1, got {0}")]
    InvalidTopK(usize),

    #[error("relevance_threshold must be between 0.0 and 1.0, got {0}")]
    InvalidRelevanceThreshold(f64),
}

/// Tool settings ("valves"). Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawValves")]
pub struct ToolValves {
    /// Comma-separated knowledge base ids searched when the caller names none
    default_knowledge_bases: String,
    /// Number of relevant chunks to retrieve
    top_k: usize,
    /// Minimum relevance score; validated but not applied to results
    relevance_threshold: f64,
}

#[derive(Deserialize)]
struct RawValves {
    #[serde(default)]
    default_knowledge_bases: String,
    #[serde(default = "default_top_k")]
    top_k: usize,
    #[serde(default)]
    relevance_threshold: f64,
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

impl TryFrom<RawValves> for ToolValves {
    type Error = ValvesValidationError;

    fn try_from(raw: RawValves) -> Result<Self, Self::Error> {
        Self::new(raw.default_knowledge_bases, raw.top_k, raw.relevance_threshold)
    }
}

impl Default for ToolValves {
    fn default() -> Self {
        Self {
            default_knowledge_bases: String::new(),
            top_k: DEFAULT_TOP_K,
            relevance_threshold: 0.0,
        }
    }
}

impl ToolValves {
    /// Build validated settings
    pub fn new(
        default_knowledge_bases: impl Into<String>,
        top_k: usize,
        relevance_threshold: f64,
    ) -> Result<Self, ValvesValidationError> {
        if top_k == 0 {
            return Err(ValvesValidationError::InvalidTopK(top_k));
        }

        if !(0.0..=1.0).contains(&relevance_threshold) {
            return Err(ValvesValidationError::InvalidRelevanceThreshold(
                relevance_threshold,
            ));
        }

        Ok(Self {
            default_knowledge_bases: default_knowledge_bases.into(),
            top_k,
            relevance_threshold,
        })
    }

    pub fn default_knowledge_bases(&self) -> &str {
        &self.default_knowledge_bases
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn relevance_threshold(&self) -> f64 {
        self.relevance_threshold
    }

    /// Default knowledge base ids, split and trimmed
    pub fn default_knowledge_base_ids(&self) -> Vec<String> {
        split_ids(&self.default_knowledge_bases)
    }
}

/// Split a comma-separated id list, trimming each id and dropping empty ones
pub fn split_ids(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let valves = ToolValves::default();

        assert_eq!(valves.default_knowledge_bases(), "");
        assert_eq!(valves.top_k(), 5);
        assert_eq!(valves.relevance_threshold(), 0.0);
        assert!(valves.default_knowledge_base_ids().is_empty());
    }

    #[test]
    fn test_split_ids_trims_and_keeps_order() {
        assert_eq!(split_ids("a, b ,c"), vec!["a", "b", "c"]);
        assert_eq!(split_ids("kb_policies,kb_docs"), vec!["kb_policies", "kb_docs"]);
    }

    #[test]
    fn test_split_ids_drops_empty_segments() {
        assert_eq!(split_ids("a,,b, "), vec!["a", "b"]);
        assert!(split_ids(" , ").is_empty());
        assert!(split_ids("").is_empty());
    }

    #[test]
    fn test_rejects_zero_top_k() {
        assert_eq!(
            ToolValves::new("", 0, 0.0),
            Err(ValvesValidationError::InvalidTopK(0))
        );
    }

    #[test]
    fn test_rejects_threshold_out_of_range() {
        assert!(ToolValves::new("", 5, 1.5).is_err());
        assert!(ToolValves::new("", 5, -0.1).is_err());
        assert!(ToolValves::new("", 5, f64::NAN).is_err());
        assert!(ToolValves::new("", 5, 1.0).is_ok());
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let valves: ToolValves =
            serde_json::from_value(serde_json::json!({ "default_knowledge_bases": "kb1" }))
                .unwrap();

        assert_eq!(valves.default_knowledge_base_ids(), vec!["kb1"]);
        assert_eq!(valves.top_k(), DEFAULT_TOP_K);
    }

    #[test]
    fn test_deserialize_validates() {
        let result: Result<ToolValves, _> =
            serde_json::from_value(serde_json::json!({ "top_k": 0 }));

        assert!(result.is_err());
    }
}
