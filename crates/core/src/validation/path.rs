//! Dotted field paths (`user.email`) addressing into nested JSON objects.

use std::fmt;

use serde_json::{Map, Value};

/// A dotted path such as `user.first_name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Look up the value at this path. Returns `None` when any segment is
    /// missing or an intermediate value is not an object.
    pub fn resolve<'a>(&self, input: &'a Value) -> Option<&'a Value> {
        self.segments()
            .try_fold(input, |current, segment| current.as_object()?.get(segment))
    }

    /// Write `value` at this path, creating intermediate objects as needed.
    /// Intermediate non-object values are replaced.
    pub fn insert(&self, target: &mut Map<String, Value>, value: Value) {
        let mut segments: Vec<&str> = self.segments().collect();
        let Some(last) = segments.pop() else {
            return;
        };

        let mut current = target;
        for segment in segments {
            let slot = current
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            let Value::Object(map) = slot else {
                return;
            };
            current = map;
        }
        current.insert(last.to_string(), value);
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}
