//! Resume content: the logical document stored inside a record's blob
//!
//! The content is an ordered JSON object. Its business schema (education,
//! experiences, skills, ...) is opaque here; only the top-level PII fields are
//! ever inspected, and only by the `pii` module.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{VaultError, VaultResult};

/// An ordered mapping from top-level field name to JSON value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResumeContent(Map<String, Value>);

impl ResumeContent {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Build content from an arbitrary JSON value, which must be an object
    pub fn from_value(value: Value) -> VaultResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(VaultError::MalformedContent(format!(
                "Resume content must be a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Privacy-first empty resume: PII fields present but blank
    pub fn template() -> Self {
        let mut content = Self::new();
        for field in ["name", "email", "phone", "linkedin", "github", "portfolio"] {
            content.insert(field, Value::String(String::new()));
        }
        content.insert("target_profession", Value::String(String::new()));
        for section in [
            "education",
            "experiences",
            "projects",
            "skills",
            "achievements",
            "coding_profiles",
        ] {
            content.insert(section, Value::Array(Vec::new()));
        }
        content
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    pub(crate) fn get_mut(&mut self, field: &str) -> Option<&mut Value> {
        self.0.get_mut(field)
    }

    /// Insert or replace a field, keeping its position if it already exists
    pub fn insert(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(field.into(), value)
    }

    pub fn contains_key(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for ResumeContent {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Short JSON type name for error messages
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_requires_object() {
        assert!(ResumeContent::from_value(json!({"name": "Jane"})).is_ok());

        let err = ResumeContent::from_value(json!(["Jane"])).unwrap_err();
        assert!(matches!(err, VaultError::MalformedContent(_)));
        assert!(err.to_string().contains("array"));
    }

    #[test]
    fn test_insert_keeps_position() {
        let mut content =
            ResumeContent::from_value(json!({"name": "a", "skills": [], "email": "b"})).unwrap();
        content.insert("name", json!("c"));

        let keys: Vec<_> = content.keys().cloned().collect();
        assert_eq!(keys, ["name", "skills", "email"]);
        assert_eq!(content.get_str("name"), Some("c"));
    }

    #[test]
    fn test_template_has_blank_pii() {
        let template = ResumeContent::template();
        assert_eq!(template.get_str("name"), Some(""));
        assert_eq!(template.get_str("email"), Some(""));
        assert_eq!(template.get_str("phone"), Some(""));
        assert_eq!(template.get("education"), Some(&json!([])));
    }
}
