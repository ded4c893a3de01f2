//! Scalar classification: JSON value → TypeScript base type name.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

// Anchored at the start only, so trailing timezone/fraction suffixes still match.
static DATE_LIKE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}").unwrap());

/// Coarse dynamic category of a value. Date-like strings are still `String`
/// at this level; refinement happens in [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

pub fn kind_of(v: &Value) -> Kind {
    match v {
        Value::Null => Kind::Null,
        Value::Bool(_) => Kind::Bool,
        Value::Number(_) => Kind::Number,
        Value::String(_) => Kind::String,
        Value::Array(_) => Kind::Array,
        Value::Object(_) => Kind::Object,
    }
}

/// Refined base type of a value. Total: non-scalars fall through to `any`.
pub fn classify(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(s) if DATE_LIKE.is_match(s) => "Date",
        Value::String(_) => "string",
        Value::Array(_) | Value::Object(_) => "any",
    }
}
