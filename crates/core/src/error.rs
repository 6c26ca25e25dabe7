use std::collections::BTreeMap;

use serde::Serialize;

/// Field-keyed validation failures for one request.
///
/// Holds at most one message per field path (the first check that failed for
/// that field). Serializes as `{ "errors": { "<path>": "<message>", ... } }`.
/// Entries are kept sorted by path so the map is identical no matter which
/// field was evaluated first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("Validation failed for {} field(s)", .errors.len())]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `path`. The first message recorded for a path wins.
    pub fn with(mut self, path: impl Into<String>, message: impl Into<String>) -> Self {
        self.errors.entry(path.into()).or_insert_with(|| message.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message recorded for `path`, if that field failed.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.errors.get(path).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_message_per_path_wins() {
        let errors = ValidationErrors::new()
            .with("user.email", "Email is required")
            .with("user.email", "Email must be a valid email address");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("user.email"), Some("Email is required"));
    }

    #[test]
    fn serializes_under_errors_key() {
        let errors = ValidationErrors::new()
            .with("user.last_name", "Last name is required")
            .with("user.age", "Age is Required");
        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            value,
            json!({
                "errors": {
                    "user.age": "Age is Required",
                    "user.last_name": "Last name is required",
                }
            })
        );
    }

    #[test]
    fn display_counts_fields() {
        let errors = ValidationErrors::new().with("a", "x").with("b", "y");
        assert_eq!(errors.to_string(), "Validation failed for 2 field(s)");
    }
}
