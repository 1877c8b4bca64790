//! Field decoders for the backend's loosely typed payloads.
//!
//! The route service is inconsistent about types: numbers arrive as strings,
//! empty strings stand in for "nothing", and list entries can be `null`.
//! Each decoder here accepts any JSON value and maps whatever does not fit
//! the expected shape to "absent" instead of failing the whole document.

use geo::Point;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use clearway_geo::lat_lng;

/// A JSON number, anything else is `None`.
pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(Value::deserialize(deserializer)?
        .as_f64()
        .filter(|value| value.is_finite()))
}

/// A non-negative JSON integer, anything else is `None`.
pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    Ok(Value::deserialize(deserializer)?
        .as_u64()
        .and_then(|value| u32::try_from(value).ok()))
}

/// A non-empty JSON string, anything else is `None`.
pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(value) if !value.is_empty() => Some(value),
        _ => None,
    })
}

/// A list whose entries decode individually; entries that do not decode
/// become `T::default()` so positions are preserved.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(values) => values
            .into_iter()
            .map(|value| serde_json::from_value(value).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    })
}

/// A `[[lat, lng], ...]` polyline. Malformed entries become NaN points,
/// which keeps index alignment and never compares as "near".
pub fn path<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Point>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(values) => values.iter().map(path_point).collect(),
        _ => Vec::new(),
    })
}

fn path_point(value: &Value) -> Point {
    let component = |index: usize| {
        value
            .get(index)
            .and_then(Value::as_f64)
            .unwrap_or(f64::NAN)
    };

    match value {
        Value::Array(pair) if pair.len() >= 2 => lat_lng(component(0), component(1)),
        _ => lat_lng(f64::NAN, f64::NAN),
    }
}

/// A nested object, `None` when absent or of the wrong shape.
pub fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(serde_json::from_value(Value::deserialize(deserializer)?).ok())
}

/// An identifier sent either as a string or as a number.
pub fn identifier<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(value) if !value.is_empty() => Some(value),
        Value::Number(value) => Some(value.to_string()),
        _ => None,
    })
}
