/*!
 * Typed field lookups over generic JSON objects.
 *
 * Each lookup distinguishes three outcomes: the key is absent, the key holds
 * a value of the requested type, or the key holds something else. Callers
 * decide what a mismatch means; nothing here substitutes defaults.
 */

use serde_json::{Map, Value};

/// Outcome of looking up a typed field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<'a, T> {
    /// Key not present in the object
    Missing,
    /// Key present with a value of the requested type
    Present(T),
    /// Key present with a value that cannot be read as the requested type
    Mismatch(&'a Value),
}

impl<'a, T> Field<'a, T> {
    /// Collapse to an `Option`, treating a mismatch as missing
    pub fn ok(self) -> Option<T> {
        match self {
            Field::Present(value) => Some(value),
            Field::Missing | Field::Mismatch(_) => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Field::Missing)
    }
}

/// JSON type name used in diagnostics
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Read a JSON value as a boolean.
///
/// Booleans are used directly. Strings equal to `"true"` or `"false"`
/// (ASCII case-insensitive) are coerced, so submissions produced by tools
/// that quote their flags still resolve. Anything else is not a boolean.
pub fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) if s.eq_ignore_ascii_case("true") => Some(true),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

/// Look up a boolean field
pub fn boolean_field<'a>(object: &'a Map<String, Value>, key: &str) -> Field<'a, bool> {
    match object.get(key) {
        None => Field::Missing,
        Some(value) => match coerce_bool(value) {
            Some(b) => Field::Present(b),
            None => Field::Mismatch(value),
        },
    }
}

/// Look up a nested object field
pub fn object_field<'a>(
    object: &'a Map<String, Value>,
    key: &str,
) -> Field<'a, &'a Map<String, Value>> {
    match object.get(key) {
        None => Field::Missing,
        Some(Value::Object(nested)) => Field::Present(nested),
        Some(other) => Field::Mismatch(other),
    }
}
