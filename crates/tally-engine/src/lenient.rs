//! Lenient Field Parsing
//!
//! Catalogs are hand-edited and old state tokens carried raw field text, so
//! numbers may arrive as strings, floats, negatives or null. All of these
//! read as a non-negative integer instead of rejecting the document.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::sanitize::parse_count;

/// Integer view of any JSON value: truncated, negatives and garbage are 0
pub(crate) fn count_from_value(value: &Value) -> u64 {
    match value {
        Value::Number(n) => {
            if let Some(n) = n.as_u64() {
                n
            } else if n.is_i64() {
                0
            } else {
                match n.as_f64() {
                    Some(f) if f.is_finite() && f > 0.0 => f.trunc() as u64,
                    _ => 0,
                }
            }
        }
        Value::String(s) => parse_count(s),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => 0,
    }
}

/// JavaScript truthiness of a JSON value
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub(crate) fn count_from_any<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(count_from_value(&Value::deserialize(deserializer)?))
}

/// `null` means "no cap"
pub(crate) fn optional_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        value => Some(count_from_value(&value)),
    })
}

/// Truthy flag; `null` reads as false
pub(crate) fn flag_or_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(is_truthy(&Value::deserialize(deserializer)?))
}

/// Truthy flag; `null` keeps the default of true
pub(crate) fn flag_or_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => true,
        value => is_truthy(&value),
    })
}
