//! Rule evaluator: pure logic, no I/O.

use serde_json::Value;

use super::path::FieldPath;
use super::rules::{CheckKind, FieldSpec, RuleSet};

/// Result of running one field's chain against an input.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldOutcome {
    pub path: FieldPath,
    pub status: FieldStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldStatus {
    /// Every check passed. Holds the normalized value, or `None` when the
    /// field was absent and nothing required it.
    Passed { value: Option<Value> },
    /// The first failing check for the field.
    Failed { kind: CheckKind, message: String },
}

impl FieldOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self.status, FieldStatus::Passed { .. })
    }
}

/// Run every field specification against `input`, one outcome per field, in
/// rule-set order.
pub fn run(rules: &RuleSet, input: &Value) -> Vec<FieldOutcome> {
    rules
        .fields()
        .iter()
        .map(|field| evaluate_field(field, input))
        .collect()
}

/// Sanitize the value at the field's path, then apply its checks in order,
/// stopping at the first failure.
pub fn evaluate_field(field: &FieldSpec, input: &Value) -> FieldOutcome {
    let value = field.path().resolve(input).cloned().map(|raw| {
        field
            .sanitizers()
            .iter()
            .fold(raw, |value, sanitizer| sanitizer.apply(value))
    });

    let status = match field
        .checks()
        .iter()
        .find(|check| !check.rule.test(value.as_ref()))
    {
        Some(failed) => FieldStatus::Failed {
            kind: failed.kind(),
            message: failed.message.clone(),
        },
        None => FieldStatus::Passed { value },
    };

    FieldOutcome {
        path: field.path().clone(),
        status,
    }
}
