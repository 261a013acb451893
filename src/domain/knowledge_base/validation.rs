//! Knowledge base validation utilities

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length for knowledge base IDs
pub const MAX_KB_ID_LENGTH: usize = 128;

/// Host ids are UUIDs or slugs: alphanumeric first, then alphanumerics, `-`, `_`, `.`
static KB_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9._-]*$").unwrap());

/// Knowledge base validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum KnowledgeBaseValidationError {
    /// ID is empty
    EmptyId,
    /// ID exceeds maximum length
    IdTooLong { length: usize, max: usize },
    /// ID contains invalid characters
    InvalidIdFormat { id: String },
    /// Name is empty
    EmptyName,
}

impl fmt::Display for KnowledgeBaseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "Knowledge base ID cannot be empty"),
            Self::IdTooLong { length, max } => {
                write!(
                    f,
                    "Knowledge base ID too long: {} characters (max {})",
                    length, max
                )
            }
            Self::InvalidIdFormat { id } => {
                write!(
                    f,
                    "Invalid knowledge base ID format '{}': must be alphanumeric with '-', '_' or '.'",
                    id
                )
            }
            Self::EmptyName => write!(f, "Knowledge base name cannot be empty"),
        }
    }
}

impl std::error::Error for KnowledgeBaseValidationError {}

/// Validate a knowledge base ID
pub fn validate_knowledge_base_id(id: &str) -> Result<(), KnowledgeBaseValidationError> {
    if id.is_empty() {
        return Err(KnowledgeBaseValidationError::EmptyId);
    }

    if id.len() > MAX_KB_ID_LENGTH {
        return Err(KnowledgeBaseValidationError::IdTooLong {
            length: id.len(),
            max: MAX_KB_ID_LENGTH,
        });
    }

    if !KB_ID_PATTERN.is_match(id) {
        return Err(KnowledgeBaseValidationError::InvalidIdFormat { id: id.to_string() });
    }

    Ok(())
}
