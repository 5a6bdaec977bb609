//! Lenient field deserializers for storefront payloads.
//!
//! The storefront stores documents loosely: numbers may arrive as `null` or
//! as strings, and optional text may be an empty string. One odd field must
//! not reject the whole list it belongs to.

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f64),
}

/// Number from a JSON number or numeric string; `null` and blank strings read as `0.0`
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrFloat>::deserialize(deserializer)? {
        Some(StringOrFloat::Float(f)) => Ok(f),
        Some(StringOrFloat::String(s)) if s.trim().is_empty() => Ok(0.0),
        Some(StringOrFloat::String(s)) => s.trim().parse::<f64>().map_err(de::Error::custom),
        None => Ok(0.0),
    }
}

/// Optional value where an empty string means absent
pub fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()).map(T::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "lenient_f64")]
        amount: f64,
        #[serde(default, deserialize_with = "empty_string_as_none")]
        note: Option<String>,
    }

    fn row(json: &str) -> Row {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_lenient_f64() {
        assert_eq!(row(r#"{"amount": 2}"#).amount, 2.0);
        assert_eq!(row(r#"{"amount": -1.5}"#).amount, -1.5);
        assert_eq!(row(r#"{"amount": "12.25"}"#).amount, 12.25);
        assert_eq!(row(r#"{"amount": null}"#).amount, 0.0);
        assert_eq!(row(r#"{"amount": ""}"#).amount, 0.0);
        assert_eq!(row(r#"{}"#).amount, 0.0);
        assert!(serde_json::from_str::<Row>(r#"{"amount": "lots"}"#).is_err());
    }

    #[test]
    fn test_empty_string_as_none() {
        assert_eq!(row(r#"{"note": "x"}"#).note.as_deref(), Some("x"));
        assert_eq!(row(r#"{"note": ""}"#).note, None);
        assert_eq!(row(r#"{"note": null}"#).note, None);
        assert_eq!(row(r#"{}"#).note, None);
    }
}
