//! Typed attribute values attached to entities.

use serde::{Deserialize, Serialize};

/// A single typed attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Json(serde_json::Value),
}

impl AttributeValue {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            Self::Json(serde_json::Value::String(value)) => Some(value),
            _ => None,
        }
    }

    /// Integer view; floats with no fractional part are accepted.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Float(value) if value.fract() == 0.0 => Some(*value as i64),
            _ => None,
        }
    }

    /// String list view of a JSON array; non-string items are skipped.
    #[must_use]
    pub fn as_string_list(&self) -> Option<Vec<String>> {
        match self {
            Self::Json(serde_json::Value::Array(items)) => Some(
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(ToString::to_string))
                    .collect(),
            ),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_string_variant_as_plain_string() {
        let val = AttributeValue::String("hello".to_string());
        let json = serde_json::to_string(&val).unwrap();
        assert_eq!(json, "\"hello\"");
    }

    #[test]
    fn should_deserialize_array_as_json_variant() {
        let val: AttributeValue = serde_json::from_str(r#"["Auto", "Sleep"]"#).unwrap();
        assert_eq!(
            val.as_string_list(),
            Some(vec!["Auto".to_string(), "Sleep".to_string()])
        );
    }

    #[test]
    fn should_expose_integer_from_whole_float() {
        assert_eq!(AttributeValue::Float(8.0).as_i64(), Some(8));
        assert_eq!(AttributeValue::Float(8.5).as_i64(), None);
        assert_eq!(AttributeValue::Int(9).as_i64(), Some(9));
    }

    #[test]
    fn should_return_none_for_mismatched_views() {
        assert_eq!(AttributeValue::Bool(true).as_str(), None);
        assert_eq!(AttributeValue::String("x".into()).as_string_list(), None);
    }
}
