//! Tolerant readers for stored documents. Older files hold values with loose
//! types (`"price": "12"`, `"price": null`, `"products": null`), which are
//! coerced here instead of failing the whole document.

use serde_json::{Map, Value};

use business::domain::shared::value_objects::Scalar;

/// The records stored under `key`. Anything but an array reads as empty.
pub fn records<'a>(document: &'a Value, key: &str) -> &'a [Value] {
    document
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// The stored `lastId`; absent or unreadable counts as 0.
pub fn last_id(document: &Value) -> u64 {
    scalar(document.as_object(), "lastId")
        .and_then(|s| s.to_integer())
        .and_then(|n| u64::try_from(n).ok())
        .unwrap_or(0)
}

fn scalar(record: Option<&Map<String, Value>>, key: &str) -> Option<Scalar> {
    record?.get(key).cloned().and_then(Scalar::from_json)
}

pub fn text(record: &Map<String, Value>, key: &str) -> String {
    scalar(Some(record), key)
        .map(|s| s.to_text())
        .unwrap_or_default()
}

pub fn number(record: &Map<String, Value>, key: &str) -> f64 {
    scalar(Some(record), key)
        .and_then(|s| s.to_number())
        .unwrap_or(0.0)
}

/// Fractional values are truncated.
pub fn integer(record: &Map<String, Value>, key: &str) -> i64 {
    scalar(Some(record), key)
        .and_then(|s| s.to_number())
        .map(|n| n.trunc() as i64)
        .unwrap_or(0)
}

/// `default` applies only when the key is absent; `null` reads as false.
pub fn flag(record: &Map<String, Value>, key: &str, default: bool) -> bool {
    match record.get(key) {
        None => default,
        Some(value) => Scalar::from_json(value.clone())
            .map(|s| s.truthy())
            .unwrap_or(false),
    }
}
