//! Turns per-field outcomes into either sanitized data or an error map.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use super::evaluator::{run, FieldOutcome, FieldStatus};
use super::path::FieldPath;
use super::rules::RuleSet;
use crate::error::ValidationErrors;

/// Normalized values of the declared fields, keyed by dotted path.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SanitizedData {
    values: BTreeMap<String, Value>,
}

impl SanitizedData {
    pub fn with(mut self, path: &FieldPath, value: Value) -> Self {
        self.values.insert(path.to_string(), value);
        self
    }

    pub fn get(&self, path: &str) -> Option<&Value> {
        self.values.get(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Rebuild the nested object shape of the input, e.g.
    /// `{"user.email": ..}` becomes `{"user": {"email": ..}}`.
    pub fn to_nested(&self) -> Value {
        let mut root = Map::new();
        for (path, value) in &self.values {
            FieldPath::from(path.as_str()).insert(&mut root, value.clone());
        }
        Value::Object(root)
    }
}

/// Fold outcomes into sanitized data when every field passed, or into one
/// error entry per failing field otherwise.
pub fn respond(outcomes: Vec<FieldOutcome>) -> Result<SanitizedData, ValidationErrors> {
    let (sanitized, errors) = outcomes.into_iter().fold(
        (SanitizedData::default(), ValidationErrors::new()),
        |(sanitized, errors), outcome| match outcome.status {
            FieldStatus::Passed { value: Some(value) } => {
                (sanitized.with(&outcome.path, value), errors)
            }
            FieldStatus::Passed { value: None } => (sanitized, errors),
            FieldStatus::Failed { message, .. } => {
                (sanitized, errors.with(outcome.path.to_string(), message))
            }
        },
    );

    if errors.is_empty() {
        Ok(sanitized)
    } else {
        Err(errors)
    }
}

/// Run `rules` against `input` and respond in one step.
pub fn validate(rules: &RuleSet, input: &Value) -> Result<SanitizedData, ValidationErrors> {
    respond(run(rules, input))
}
