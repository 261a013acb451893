//! Knowledge base descriptor as exposed by the host registry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{validate_knowledge_base_id, KnowledgeBaseValidationError};

/// Knowledge base identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct KnowledgeBaseId(String);

impl KnowledgeBaseId {
    /// Create a new KnowledgeBaseId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, KnowledgeBaseValidationError> {
        let id = id.into();
        validate_knowledge_base_id(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for KnowledgeBaseId {
    type Error = KnowledgeBaseValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<KnowledgeBaseId> for String {
    fn from(id: KnowledgeBaseId) -> Self {
        id.0
    }
}

impl std::fmt::Display for KnowledgeBaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Permission a caller needs on a knowledge base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessPermission {
    Read,
    Write,
}

impl std::fmt::Display for AccessPermission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
        }
    }
}

/// Knowledge base entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    /// Unique identifier
    id: KnowledgeBaseId,
    /// Display name
    name: String,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    /// Free-form payload; `file_ids` lists the files attached to the knowledge base
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<serde_json::Value>,
    /// Creation timestamp
    #[serde(default = "Utc::now")]
    created_at: DateTime<Utc>,
    /// Last update timestamp
    #[serde(default = "Utc::now")]
    updated_at: DateTime<Utc>,
}

impl KnowledgeBase {
    /// Create a new knowledge base
    pub fn new(id: KnowledgeBaseId, name: impl Into<String>) -> Self {
        let now = Utc::now();

        Self {
            id,
            name: name.into(),
            description: None,
            data: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the data payload
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Set the attached file ids
    pub fn with_file_ids<I, S>(self, file_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<serde_json::Value> = file_ids
            .into_iter()
            .map(|id| serde_json::Value::String(id.into()))
            .collect();

        self.with_data(serde_json::json!({ "file_ids": ids }))
    }

    pub fn id(&self) -> &KnowledgeBaseId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn data(&self) -> Option<&serde_json::Value> {
        self.data.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Number of files attached; zero unless `data.file_ids` is an array
    pub fn file_count(&self) -> usize {
        self.data
            .as_ref()
            .and_then(|data| data.get("file_ids"))
            .and_then(|ids| ids.as_array())
            .map_or(0, Vec::len)
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kb(id: &str) -> KnowledgeBase {
        KnowledgeBase::new(KnowledgeBaseId::new(id).unwrap(), "Policies")
    }

    #[test]
    fn test_file_count_without_data() {
        assert_eq!(kb("kb-1").file_count(), 0);
    }

    #[test]
    fn test_file_count_with_file_ids() {
        let kb = kb("kb-1").with_file_ids(["f1", "f2", "f3"]);
        assert_eq!(kb.file_count(), 3);
    }

    #[test]
    fn test_file_count_ignores_non_array() {
        let kb = kb("kb-1").with_data(serde_json::json!({ "file_ids": "f1" }));
        assert_eq!(kb.file_count(), 0);

        let kb = kb.with_data(serde_json::json!({ "other": [1, 2] }));
        assert_eq!(kb.file_count(), 0);
    }

    #[test]
    fn test_deserialize_descriptor() {
        let kb: KnowledgeBase = serde_json::from_value(serde_json::json!({
            "id": "kb_policies",
            "name": "HR Policies",
            "description": "Company policies",
            "data": { "file_ids": ["a"] }
        }))
        .unwrap();

        assert_eq!(kb.id().as_str(), "kb_policies");
        assert_eq!(kb.description(), Some("Company policies"));
        assert_eq!(kb.file_count(), 1);
    }

    #[test]
    fn test_set_description_touches() {
        let mut kb = kb("kb-1");
        let before = kb.updated_at();
        kb.set_description(Some("updated".to_string()));

        assert_eq!(kb.description(), Some("updated"));
        assert!(kb.updated_at() >= before);
    }
}
