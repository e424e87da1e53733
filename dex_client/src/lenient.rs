//! Field-level deserializers that never fail.
//!
//! Upstream payloads mix strings and numbers for the same field and
//! occasionally send garbage. A field of an unexpected shape decodes as
//! `None` (or a defaulted element) instead of failing the whole payload.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Strings as-is; numbers and booleans stringified (`true` → `"1"`)
pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(if b { "1" } else { "0" }.to_string()),
        _ => None,
    })
}

/// Numbers, or strings that parse as one
pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

pub fn integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Nested record; `None` when it is not decodable as `T`
pub fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(serde_json::from_value(Value::deserialize(deserializer)?).ok())
}

/// List whose undecodable elements become `T::default()`, keeping positions
pub fn list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .map(|item| serde_json::from_value(item).unwrap_or_default())
                .collect(),
        ),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    struct Record {
        #[serde(default, deserialize_with = "string")]
        flag: Option<String>,
        #[serde(default, deserialize_with = "number")]
        amount: Option<f64>,
        #[serde(default, deserialize_with = "list")]
        items: Option<Vec<Record>>,
    }

    #[test]
    fn test_mixed_types_decode() {
        let record: Record =
            serde_json::from_str(r#"{"flag": 1, "amount": "2.5", "items": [{"flag": "1"}, 42, null]}"#)
                .unwrap();

        assert_eq!(record.flag.as_deref(), Some("1"));
        assert_eq!(record.amount, Some(2.5));

        let items = record.items.unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].flag.as_deref(), Some("1"));
        assert!(items[1].flag.is_none());
    }

    #[test]
    fn test_wrong_shapes_are_absent() {
        let record: Record =
            serde_json::from_str(r#"{"flag": {"nested": true}, "amount": "abc", "items": "none"}"#).unwrap();

        assert!(record.flag.is_none());
        assert!(record.amount.is_none());
        assert!(record.items.is_none());

        let record: Record = serde_json::from_str(r#"{"flag": null}"#).unwrap();
        assert!(record.flag.is_none());
    }
}
