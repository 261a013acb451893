//! User validation utilities

use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("User ID cannot be empty")]
    EmptyId,

    #[error("User ID exceeds maximum length of {0} characters")]
    IdTooLong(usize),

    #[error("User ID contains invalid character: {0:?}. Whitespace and control characters are not allowed")]
    InvalidIdCharacter(char),
}

const MAX_USER_ID_LENGTH: usize = 128;

/// Validate a user ID
///
/// Host identities are opaque tokens (usually UUIDs), so only the shape is
/// checked:
/// - Cannot be empty
/// - Maximum 128 characters
/// - No whitespace or control characters
pub fn validate_user_id(id: &str) -> Result<(), UserValidationError> {
    if id.is_empty() {
        return Err(UserValidationError::EmptyId);
    }

    if id.chars().count() > MAX_USER_ID_LENGTH {
        return Err(UserValidationError::IdTooLong(MAX_USER_ID_LENGTH));
    }

    if let Some(c) = id.chars().find(|c| c.is_whitespace() || c.is_control()) {
        return Err(UserValidationError::InvalidIdCharacter(c));
    }

    Ok(())
}
