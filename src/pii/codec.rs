//! Resume content codec
//!
//! Converts between `ResumeContent` and its stored string form. The codec is
//! content-neutral: field order and values survive untouched, and it knows
//! nothing about which fields are PII.

use serde_json::Value;

use crate::error::{VaultError, VaultResult};
use crate::models::ResumeContent;

/// Parse a stored blob into content
pub fn decode(blob: &str) -> VaultResult<ResumeContent> {
    let value: Value = serde_json::from_str(blob)
        .map_err(|e| VaultError::MalformedContent(format!("Invalid JSON: {}", e)))?;
    ResumeContent::from_value(value)
}

/// Serialize content to its stored form
pub fn encode(content: &ResumeContent) -> String {
    // Display on a Map cannot fail
    Value::Object(content.as_map().clone()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_order_and_types() {
        let blob = r#"{"zeta":1,"name":"Jane","alpha":[true,null,{"b":2,"a":1}],"gpa":3.9}"#;
        let content = decode(blob).unwrap();

        let keys: Vec<_> = content.keys().cloned().collect();
        assert_eq!(keys, ["zeta", "name", "alpha", "gpa"]);
        assert_eq!(encode(&content), blob);
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = decode("{\"name\": ").unwrap_err();
        assert!(matches!(err, VaultError::MalformedContent(_)));
    }

    #[test]
    fn test_non_object_is_malformed() {
        for blob in ["[]", "\"Jane\"", "42", "null"] {
            let err = decode(blob).unwrap_err();
            assert!(matches!(err, VaultError::MalformedContent(_)), "{}", blob);
        }
    }
}
