//! Rule, check, and field specification types.

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::{Number, Value};
use validator::ValidateEmail;

use super::path::FieldPath;

/// Integer literal: optional sign, no leading zeros.
static INT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?(?:0|[1-9][0-9]*)$").expect("valid regex"));

/// Last domain label: two or more letters, or a punycode label.
static TLD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:[a-z\x{00A1}-\x{FFFF}]{2,}|xn--[a-z0-9-]+)$").expect("valid regex")
});

/// Floats at or beyond this magnitude render in exponent form.
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Which stage of a field's chain a check belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    /// Value absent, null, or falsy.
    Presence,
    /// Value present but of the wrong JSON type.
    Type,
    /// Value present and typed but fails a format, length, or pattern test.
    Format,
}

/// A predicate over a field's (normalized) value.
#[derive(Clone, Copy)]
pub enum Rule {
    /// Rejects absent, `null`, `""`, numeric zero, and `false`.
    Required,
    /// Value is a JSON string.
    IsString,
    /// Text form is a syntactically valid email with a dotted domain.
    IsEmail,
    /// Text form is an integer literal.
    IsInt,
    /// Text form has at least this many characters.
    MinLength(usize),
    /// Arbitrary predicate. Absent values are passed as `null`.
    Custom(fn(&Value) -> bool),
}

impl Rule {
    pub fn kind(&self) -> CheckKind {
        match self {
            Rule::Required => CheckKind::Presence,
            Rule::IsString => CheckKind::Type,
            Rule::IsEmail | Rule::IsInt | Rule::MinLength(_) | Rule::Custom(_) => {
                CheckKind::Format
            }
        }
    }

    /// Returns `true` when `value` satisfies the rule.
    pub fn test(&self, value: Option<&Value>) -> bool {
        match self {
            Rule::Required => value.is_some_and(is_truthy),
            Rule::IsString => value.is_some_and(Value::is_string),
            Rule::IsEmail => text_form(value).is_some_and(|text| is_email(&text)),
            Rule::IsInt => text_form(value).is_some_and(|text| INT_RE.is_match(&text)),
            Rule::MinLength(min) => text_form(value).is_some_and(|text| text.chars().count() >= *min),
            Rule::Custom(predicate) => predicate(value.unwrap_or(&Value::Null)),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required => f.write_str("Required"),
            Rule::IsString => f.write_str("IsString"),
            Rule::IsEmail => f.write_str("IsEmail"),
            Rule::IsInt => f.write_str("IsInt"),
            Rule::MinLength(min) => f.debug_tuple("MinLength").field(min).finish(),
            Rule::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Normalization applied to a field's value before its checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sanitizer {
    /// Strip leading and trailing whitespace. Truthy numbers and `true` are
    /// rendered as text first; falsy scalars stay as they are so `Required`
    /// still reports them as missing.
    Trim,
}

impl Sanitizer {
    pub fn apply(&self, value: Value) -> Value {
        match (self, value) {
            (Sanitizer::Trim, Value::String(s)) => {
                let trimmed = s.trim();
                if trimmed.len() == s.len() {
                    Value::String(s)
                } else {
                    Value::String(trimmed.to_string())
                }
            }
            (Sanitizer::Trim, Value::Number(n)) if n.as_f64().is_some_and(|f| f != 0.0) => {
                Value::String(number_text(&n))
            }
            (Sanitizer::Trim, Value::Bool(true)) => Value::String("true".to_string()),
            (_, other) => other,
        }
    }
}

/// A rule paired with the message reported when it fails.
#[derive(Debug, Clone)]
pub struct Check {
    pub rule: Rule,
    pub message: String,
}

impl Check {
    pub fn kind(&self) -> CheckKind {
        self.rule.kind()
    }
}

/// Ordered sanitizers and checks for one field.
///
/// Checks run in declaration order and stop at the first failure.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    path: FieldPath,
    sanitizers: Vec<Sanitizer>,
    checks: Vec<Check>,
}

impl FieldSpec {
    pub fn new(path: impl Into<FieldPath>) -> Self {
        Self {
            path: path.into(),
            sanitizers: Vec::new(),
            checks: Vec::new(),
        }
    }

    pub fn trim(self) -> Self {
        self.sanitize(Sanitizer::Trim)
    }

    fn sanitize(mut self, sanitizer: Sanitizer) -> Self {
        self.sanitizers.push(sanitizer);
        self
    }

    pub fn check(mut self, rule: Rule, message: impl Into<String>) -> Self {
        self.checks.push(Check {
            rule,
            message: message.into(),
        });
        self
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn sanitizers(&self) -> &[Sanitizer] {
        &self.sanitizers
    }

    pub fn checks(&self) -> &[Check] {
        &self.checks
    }
}

/// Immutable list of field specifications, built once and shared.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    fields: Vec<FieldSpec>,
}

impl RuleSet {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<FieldSpec> for RuleSet {
    fn from_iter<I: IntoIterator<Item = FieldSpec>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Loose truthiness: `null`, `false`, `""`, and zero are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// String rendering used by text-based rules. Arrays and objects have none.
fn text_form(value: Option<&Value>) -> Option<Cow<'_, str>> {
    match value {
        None | Some(Value::Null) => Some(Cow::Borrowed("")),
        Some(Value::String(s)) => Some(Cow::Borrowed(s.as_str())),
        Some(Value::Bool(true)) => Some(Cow::Borrowed("true")),
        Some(Value::Bool(false)) => Some(Cow::Borrowed("false")),
        Some(Value::Number(n)) => Some(Cow::Owned(number_text(n))),
        Some(Value::Array(_) | Value::Object(_)) => None,
    }
}

/// Shortest decimal form; integral floats drop their fractional part.
fn number_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.abs() >= EXPONENT_THRESHOLD => format!("{f:e}"),
        Some(f) if f.fract() == 0.0 => (f as i128).to_string(),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

fn is_email(text: &str) -> bool {
    text.validate_email()
        && text
            .rsplit_once('@')
            .is_some_and(|(_, domain)| has_top_level_domain(domain))
}

/// IP-literal domains have no top-level label and are rejected.
fn has_top_level_domain(domain: &str) -> bool {
    !domain.starts_with('[')
        && domain
            .rsplit_once('.')
            .is_some_and(|(_, tld)| TLD_RE.is_match(tld))
}
