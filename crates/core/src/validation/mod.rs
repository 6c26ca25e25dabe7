//! Request validation engine.
//!
//! Provides field paths, rule and field-specification types, a pure-logic
//! evaluator, and the gate that folds per-field outcomes into sanitized data
//! or an error map.

pub mod evaluator;
pub mod gate;
pub mod path;
pub mod rules;

pub use evaluator::{run, FieldOutcome, FieldStatus};
pub use gate::{respond, validate, SanitizedData};
pub use path::FieldPath;
pub use rules::{Check, CheckKind, FieldSpec, Rule, RuleSet, Sanitizer};
