//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{validate_user_id, UserValidationError};

/// User identifier as issued by the host
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Create a new UserId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        let id = id.into();
        validate_user_id(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role of a user on the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    #[default]
    User,
    Pending,
}

/// Resolved user record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    id: UserId,
    /// Display name
    name: String,
    /// Contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    /// Host role
    #[serde(default)]
    role: UserRole,
    /// Creation timestamp
    #[serde(default = "Utc::now")]
    created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: None,
            role: UserRole::default(),
            created_at: Utc::now(),
        }
    }

    /// Set the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the role
    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_builder() {
        let user = User::new(UserId::new("user-1").unwrap(), "Alice")
            .with_email("alice@example.com")
            .with_role(UserRole::Admin);

        assert_eq!(user.id().as_str(), "user-1");
        assert_eq!(user.name(), "Alice");
        assert_eq!(user.email(), Some("alice@example.com"));
        assert!(user.is_admin());
    }

    #[test]
    fn test_user_deserialize_defaults() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": "user-2",
            "name": "Bob"
        }))
        .unwrap();

        assert_eq!(user.role(), UserRole::User);
        assert!(user.email().is_none());
    }

    #[test]
    fn test_user_deserialize_rejects_invalid_id() {
        let result: Result<User, _> = serde_json::from_value(serde_json::json!({
            "id": "",
            "name": "Nobody"
        }));

        assert!(result.is_err());
    }
}
