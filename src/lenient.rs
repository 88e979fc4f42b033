//! Tolerant deserialization for loosely-typed API payloads.
//!
//! The catalog's JSONB columns are edited by hand in the back office,
//! so numeric fields arrive as numbers or digit strings and text fields
//! occasionally arrive as numbers. These adapters accept what the API
//! plausibly sends and degrade everything else to absent or default
//! instead of failing the whole payload.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Unsigned number from a JSON number or a digit string.
pub(crate) fn u64_opt<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(as_u64(&value))
}

/// Non-empty display string from a JSON string or number.
pub(crate) fn string_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(as_string(&value).filter(|text| !text.is_empty()))
}

/// Required string field; anything unusable becomes empty.
pub(crate) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(as_string(&value).unwrap_or_default())
}

/// String list from a JSON array, coercing scalar entries and dropping
/// the rest.
pub(crate) fn string_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Array(items) => Ok(items.iter().filter_map(as_string).collect()),
        _ => Ok(Vec::new()),
    }
}

/// JavaScript-style truthiness for flags stored as bool, number or
/// string.
pub(crate) fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(flag) => flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        _ => false,
    })
}

/// Whole substructure, falling back to its default when the shape is
/// wrong.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
