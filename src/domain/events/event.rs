//! Event payloads

use serde::{Deserialize, Serialize};

/// Metadata record attached to a citation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitationMetadata {
    pub source: String,
    pub file_id: String,
    pub relevance_score: f64,
}

/// Compact source descriptor the UI links a citation to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitationSource {
    pub name: String,
    pub url: String,
}

/// Event sent through the progress sink.
///
/// Serializes as `{"type": "status" | "citation", "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ToolEvent {
    Status {
        description: String,
        done: bool,
    },
    Citation {
        document: Vec<String>,
        metadata: Vec<CitationMetadata>,
        source: CitationSource,
    },
}

impl ToolEvent {
    /// A status update that more work will follow
    pub fn in_progress(description: impl Into<String>) -> Self {
        Self::Status {
            description: description.into(),
            done: false,
        }
    }

    /// A final status update
    pub fn done(description: impl Into<String>) -> Self {
        Self::Status {
            description: description.into(),
            done: true,
        }
    }

    /// Citation for a single retrieved document
    pub fn citation(
        document: impl Into<String>,
        source_name: impl Into<String>,
        file_id: impl Into<String>,
        relevance_score: f64,
    ) -> Self {
        let source_name = source_name.into();
        let file_id = file_id.into();

        Self::Citation {
            document: vec![document.into()],
            source: CitationSource {
                name: source_name.clone(),
                url: format!("#file-{}", file_id),
            },
            metadata: vec![CitationMetadata {
                source: source_name,
                file_id,
                relevance_score,
            }],
        }
    }

    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }

    pub fn is_citation(&self) -> bool {
        matches!(self, Self::Citation { .. })
    }

    /// Description of a status event
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Status { description, .. } => Some(description),
            Self::Citation { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_wire_format() {
        let event = ToolEvent::in_progress("Searching knowledge bases...");

        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "type": "status",
                "data": { "description": "Searching knowledge bases...", "done": false }
            })
        );
    }

    #[test]
    fn test_citation_wire_format() {
        let event = ToolEvent::citation("Remote work is allowed.", "policy.pdf", "f-1", 0.123);

        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "type": "citation",
                "data": {
                    "document": ["Remote work is allowed."],
                    "metadata": [{
                        "source": "policy.pdf",
                        "file_id": "f-1",
                        "relevance_score": 0.123
                    }],
                    "source": { "name": "policy.pdf", "url": "#file-f-1" }
                }
            })
        );
    }

    #[test]
    fn test_citation_with_empty_file_id() {
        match ToolEvent::citation("text", "Source 1", "", 0.5) {
            ToolEvent::Citation { source, .. } => assert_eq!(source.url, "#file-"),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_round_trip_from_host_json() {
        let event: ToolEvent = serde_json::from_value(json!({
            "type": "status",
            "data": { "description": "done", "done": true }
        }))
        .unwrap();

        assert_eq!(event, ToolEvent::done("done"));
        assert_eq!(event.description(), Some("done"));
    }
}
