//! Deserializers for spreadsheet-typed values.
//!
//! Apps Script hands cells back as whatever type the sheet holds, so a price may
//! arrive as `15000`, `"15000"` or `""`. Request payloads use the strict
//! `opt_*` variants (garbage is an error); records read back from the sheet use
//! the `loose_*` variants (garbage becomes the default).

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn number_from_value(value: &Value) -> Result<Option<f64>, String> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(n.as_f64()),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            match trimmed.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(Some(v)),
                _ => Err(format!("expected a number, got \"{}\"", s)),
            }
        }
        other => Err(format!("expected a number, got {}", other)),
    }
}

fn bool_from_value(value: &Value) -> Result<Option<bool>, String> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(*b)),
        Value::Number(n) => Ok(n.as_f64().map(|v| v != 0.0)),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "" => Ok(None),
            "true" | "1" | "yes" | "y" => Ok(Some(true)),
            "false" | "0" | "no" | "n" => Ok(Some(false)),
            _ => Err(format!("expected a boolean, got \"{}\"", s)),
        },
        other => Err(format!("expected a boolean, got {}", other)),
    }
}

fn text_from_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(match n.as_i64() {
            Some(i) => i.to_string(),
            None => n.to_string(),
        }),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Optional number from a request body. Empty strings count as absent.
pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    number_from_value(&value).map_err(D::Error::custom)
}

/// Optional boolean from a request body (`true`, `"TRUE"`, `1`, `"yes"` ...).
pub fn opt_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    bool_from_value(&value).map_err(D::Error::custom)
}

/// Optional identifier that may be sent as a number or a string.
pub fn opt_string_from_any<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text_from_value(value))
}

/// Number read back from the sheet; anything unparsable is `0`.
pub fn loose_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_from_value(&value).ok().flatten().unwrap_or(0.0))
}

/// Boolean read back from the sheet; blank cells count as `true`.
pub fn loose_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(bool_from_value(&value).ok().flatten().unwrap_or(true))
}

/// Text cell read back from the sheet; numbers are stringified, null is `""`.
pub fn string_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text_from_value(value).unwrap_or_default())
}

/// A list stored either as a JSON array or as a JSON-encoded string cell.
pub fn array_or_json_string<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(Vec::new()),
        Value::String(s) if s.trim().is_empty() => Ok(Vec::new()),
        Value::String(s) => serde_json::from_str(&s).map_err(D::Error::custom),
        other => serde_json::from_value(other).map_err(D::Error::custom),
    }
}

/// Optional variant of [`array_or_json_string`] for partial updates.
pub fn opt_array_or_json_string<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.trim().is_empty() => Ok(Some(Vec::new())),
        Value::String(s) => serde_json::from_str(&s).map(Some).map_err(D::Error::custom),
        other => serde_json::from_value(other).map(Some).map_err(D::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "opt_f64")]
        price: Option<f64>,
        #[serde(default, deserialize_with = "opt_bool")]
        active: Option<bool>,
        #[serde(default, deserialize_with = "string_from_any")]
        id: String,
        #[serde(default, deserialize_with = "loose_f64")]
        stock: f64,
        #[serde(default, deserialize_with = "array_or_json_string")]
        tags: Vec<String>,
    }

    #[test]
    fn numbers_arrive_as_strings() {
        let row: Row =
            serde_json::from_value(json!({"price": "15000", "stock": "7", "id": 42})).unwrap();
        assert_eq!(row.price, Some(15000.0));
        assert_eq!(row.stock, 7.0);
        assert_eq!(row.id, "42");
    }

    #[test]
    fn blank_number_is_absent() {
        let row: Row = serde_json::from_value(json!({"price": " "})).unwrap();
        assert_eq!(row.price, None);
    }

    #[test]
    fn garbage_number_is_rejected_in_requests() {
        let result: Result<Row, _> = serde_json::from_value(json!({"price": "abc"}));
        assert!(result.is_err());
    }

    #[test]
    fn non_finite_number_is_rejected_in_requests() {
        for raw in ["NaN", "inf", "-infinity", "Infinity"] {
            let result: Result<Row, _> = serde_json::from_value(json!({ "price": raw }));
            assert!(result.is_err(), "{} should not parse", raw);
        }
    }

    #[test]
    fn non_finite_number_is_zero_in_records() {
        let row: Row = serde_json::from_value(json!({"stock": "NaN"})).unwrap();
        assert_eq!(row.stock, 0.0);
    }

    #[test]
    fn garbage_number_is_zero_in_records() {
        let row: Row = serde_json::from_value(json!({"stock": "n/a"})).unwrap();
        assert_eq!(row.stock, 0.0);
    }

    #[test]
    fn sheet_booleans() {
        let row: Row = serde_json::from_value(json!({"active": "TRUE"})).unwrap();
        assert_eq!(row.active, Some(true));
        let row: Row = serde_json::from_value(json!({"active": 0})).unwrap();
        assert_eq!(row.active, Some(false));
    }

    #[test]
    fn list_from_encoded_string() {
        let row: Row = serde_json::from_value(json!({"tags": "[\"a\",\"b\"]"})).unwrap();
        assert_eq!(row.tags, vec!["a", "b"]);
        let row: Row = serde_json::from_value(json!({"tags": ["c"]})).unwrap();
        assert_eq!(row.tags, vec!["c"]);
        let row: Row = serde_json::from_value(json!({"tags": ""})).unwrap();
        assert!(row.tags.is_empty());
    }
}
