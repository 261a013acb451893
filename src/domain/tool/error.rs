//! Failure kinds of the knowledge tools

use thiserror::Error;

use crate::domain::DomainError;

/// Closed set of ways a tool call can fail.
///
/// Never leaves the crate as an `Err`: the tools format it into their text
/// response.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("No knowledge bases specified. Please provide knowledge_base_ids parameter or configure default knowledge bases in tool settings.")]
    NoKnowledgeBases,

    #[error(transparent)]
    UserResolution(DomainError),

    #[error(transparent)]
    Retrieval(DomainError),

    #[error(transparent)]
    Registry(DomainError),

    #[error(transparent)]
    Event(DomainError),

    #[error("Unknown tool '{0}'")]
    UnknownTool(String),

    #[error("Invalid arguments for tool '{tool}': {reason}")]
    InvalidArguments { tool: String, reason: String },
}

impl ToolError {
    pub fn invalid_arguments(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArguments {
            tool: tool.into(),
            reason: reason.into(),
        }
    }

    /// Whether the failure came from a host collaborator rather than the request
    pub fn is_external(&self) -> bool {
        matches!(
            self,
            Self::UserResolution(_) | Self::Retrieval(_) | Self::Registry(_) | Self::Event(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_errors_keep_message() {
        let error = ToolError::Retrieval(DomainError::retrieval("index offline"));

        assert_eq!(error.to_string(), "Retrieval error: index offline");
        assert!(error.is_external());
    }

    #[test]
    fn test_request_errors_are_not_external() {
        assert!(!ToolError::NoKnowledgeBases.is_external());
        assert!(!ToolError::UnknownTool("x".into()).is_external());
    }

    #[test]
    fn test_invalid_arguments_message() {
        let error = ToolError::invalid_arguments("search_knowledge", "missing field `query`");

        assert_eq!(
            error.to_string(),
            "Invalid arguments for tool 'search_knowledge': missing field `query`"
        );
    }
}
