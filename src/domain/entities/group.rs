//! Group Structure Entity
//!
//! A billable metric can partition its events along one or two levels of
//! keyed dimensions:
//!
//! ```json
//! { "key": "region", "values": ["eu", "us"] }
//!
//! { "key": "cloud", "values": [
//!     { "name": "AWS", "key": "region", "values": ["eu", "us"] }
//! ] }
//! ```
//!
//! Callers hand structures over either as parsed JSON or as their string
//! serialization. Parsing is split in two steps: `GroupInput::normalize`
//! decides validity, `GroupStructure::from_value` decides the dimension.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Canonical marker for "no grouping defined"
pub const EMPTY_GROUP: &str = "{}";

/// A group structure as supplied by a caller
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GroupInput {
    /// Omitted, `null` or otherwise absent
    #[default]
    Missing,
    /// String serialization, parsed on demand
    Text(String),
    /// Already-parsed JSON
    Value(Value),
}

impl GroupInput {
    /// Resolve the input to a JSON value, rejecting the empty marker.
    ///
    /// Missing and empty-string inputs stand for `"{}"` and are therefore
    /// always invalid. The input is only borrowed; the returned value is an
    /// independent copy.
    pub fn normalize(&self) -> Result<Value, GroupParseError> {
        let text: Cow<'_, str> = match self {
            GroupInput::Missing | GroupInput::Value(Value::Null) => Cow::Borrowed(EMPTY_GROUP),
            GroupInput::Text(text) | GroupInput::Value(Value::String(text)) => {
                if text.is_empty() {
                    Cow::Borrowed(EMPTY_GROUP)
                } else {
                    Cow::Borrowed(text.as_str())
                }
            }
            GroupInput::Value(value) => return reject_empty(value.clone()),
        };

        let value: Value =
            serde_json::from_str(&text).map_err(|e| GroupParseError::Malformed {
                message: e.to_string(),
            })?;
        reject_empty(value)
    }

    /// Pretty-printed JSON for display, or the raw text when it doesn't parse.
    pub fn pretty(&self) -> String {
        match self.normalize() {
            Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_default(),
            Err(_) => match self {
                GroupInput::Missing | GroupInput::Value(Value::Null) => EMPTY_GROUP.to_string(),
                GroupInput::Text(text) | GroupInput::Value(Value::String(text)) => text.clone(),
                GroupInput::Value(value) => value.to_string(),
            },
        }
    }
}

fn reject_empty(value: Value) -> Result<Value, GroupParseError> {
    match &value {
        Value::Object(map) if map.is_empty() => Err(GroupParseError::Empty),
        _ => Ok(value),
    }
}

impl From<&str> for GroupInput {
    fn from(text: &str) -> Self {
        GroupInput::Text(text.to_string())
    }
}

impl From<String> for GroupInput {
    fn from(text: String) -> Self {
        GroupInput::Text(text)
    }
}

impl From<Value> for GroupInput {
    fn from(value: Value) -> Self {
        GroupInput::Value(value)
    }
}

impl<T: Into<GroupInput>> From<Option<T>> for GroupInput {
    fn from(input: Option<T>) -> Self {
        input.map(Into::into).unwrap_or_default()
    }
}

/// Why an input is not a usable group structure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupParseError {
    #[error("group structure is empty")]
    Empty,

    #[error("group structure is not valid JSON: {message}")]
    Malformed { message: String },
}

/// A named second-level group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubGroup {
    pub name: String,
    pub key: String,
    pub values: Vec<String>,
}

/// `{ key, values: [string] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneDimensionGroup {
    pub key: String,
    pub values: Vec<String>,
}

impl OneDimensionGroup {
    /// Values in canonical order
    pub fn sorted_values(&self) -> Vec<String> {
        sorted(self.values.clone())
    }
}

/// `{ key, values: [SubGroup] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoDimensionGroup {
    pub key: String,
    pub values: Vec<SubGroup>,
}

impl TwoDimensionGroup {
    pub fn sorted_keys(&self) -> Vec<String> {
        sorted(self.values.iter().map(|g| g.key.clone()).collect())
    }

    pub fn sorted_names(&self) -> Vec<String> {
        sorted(self.values.iter().map(|g| g.name.clone()).collect())
    }

    /// Each sub-group's values sorted, then the list of those lists sorted.
    pub fn value_signature(&self) -> Vec<Vec<String>> {
        sorted(
            self.values
                .iter()
                .map(|g| sorted(g.values.clone()))
                .collect(),
        )
    }
}

fn sorted<T: Ord>(mut items: Vec<T>) -> Vec<T> {
    items.sort();
    items
}

/// A valid group structure, classified by dimension
#[derive(Debug, Clone, PartialEq)]
pub enum GroupStructure {
    OneDimension(OneDimensionGroup),
    TwoDimension(TwoDimensionGroup),
    /// Valid JSON that matches neither shape
    Unrecognized(Value),
}

impl GroupStructure {
    /// Normalize and classify an input in one go.
    pub fn try_parse(input: &GroupInput) -> Result<Self, GroupParseError> {
        input.normalize().map(|value| Self::from_value(&value))
    }

    /// Decide the dimension of a normalized value.
    ///
    /// `values` must be non-empty and homogeneous: all strings for one
    /// dimension, all sub-group objects for two. `key` must be a string.
    pub fn from_value(value: &Value) -> Self {
        let unrecognized = || GroupStructure::Unrecognized(value.clone());

        let Some(object) = value.as_object() else {
            return unrecognized();
        };
        let (Some(key), Some(values)) = (
            object.get("key").and_then(Value::as_str),
            object.get("values").and_then(Value::as_array),
        ) else {
            return unrecognized();
        };
        if values.is_empty() {
            return unrecognized();
        }

        if values.iter().all(Value::is_string) {
            let values = values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect();
            return GroupStructure::OneDimension(OneDimensionGroup {
                key: key.to_string(),
                values,
            });
        }

        if values.iter().all(Value::is_object) {
            let parsed: Result<Vec<SubGroup>, _> = values
                .iter()
                .map(|v| serde_json::from_value::<SubGroup>(v.clone()))
                .collect();
            if let Ok(values) = parsed {
                return GroupStructure::TwoDimension(TwoDimensionGroup {
                    key: key.to_string(),
                    values,
                });
            }
        }

        unrecognized()
    }

    pub fn is_one_dimension(&self) -> bool {
        matches!(self, GroupStructure::OneDimension(_))
    }

    pub fn is_two_dimension(&self) -> bool {
        matches!(self, GroupStructure::TwoDimension(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_and_empty_text_are_empty() {
        assert_eq!(GroupInput::Missing.normalize(), Err(GroupParseError::Empty));
        assert_eq!(GroupInput::from("").normalize(), Err(GroupParseError::Empty));
        assert_eq!(
            GroupInput::Value(Value::Null).normalize(),
            Err(GroupParseError::Empty)
        );
        assert_eq!(GroupInput::from(json!({})).normalize(), Err(GroupParseError::Empty));
    }

    #[test]
    fn malformed_text_is_reported_not_raised() {
        let err = GroupInput::from("{\"key\":").normalize().unwrap_err();
        assert!(matches!(err, GroupParseError::Malformed { .. }));
    }

    #[test]
    fn json_string_value_is_parsed_like_text() {
        let input = GroupInput::from(json!("{\"key\":\"k\",\"values\":[\"a\"]}"));
        assert_eq!(
            input.normalize().unwrap(),
            json!({"key": "k", "values": ["a"]})
        );
    }

    #[test]
    fn option_conversion_maps_none_to_missing() {
        let none: Option<&str> = None;
        assert_eq!(GroupInput::from(none), GroupInput::Missing);
        assert_eq!(
            GroupInput::from(Some("{}")),
            GroupInput::Text("{}".to_string())
        );
    }

    #[test]
    fn detects_one_dimension() {
        let structure =
            GroupStructure::from_value(&json!({"key": "region", "values": ["us", "eu"]}));
        assert!(structure.is_one_dimension());
    }

    #[test]
    fn detects_two_dimension() {
        let structure = GroupStructure::from_value(&json!({
            "key": "cloud",
            "values": [{"name": "AWS", "key": "region", "values": ["us"]}]
        }));
        assert!(structure.is_two_dimension());
    }

    #[test]
    fn mixed_or_empty_values_are_unrecognized() {
        let mixed = GroupStructure::from_value(&json!({
            "key": "k",
            "values": ["a", {"name": "n", "key": "k", "values": []}]
        }));
        assert!(matches!(mixed, GroupStructure::Unrecognized(_)));

        let empty = GroupStructure::from_value(&json!({"key": "k", "values": []}));
        assert!(matches!(empty, GroupStructure::Unrecognized(_)));

        let array = GroupStructure::from_value(&json!(["a"]));
        assert!(matches!(array, GroupStructure::Unrecognized(_)));
    }

    #[test]
    fn sub_group_missing_fields_is_unrecognized() {
        let structure = GroupStructure::from_value(&json!({
            "key": "cloud",
            "values": [{"key": "region", "values": ["us"]}]
        }));
        assert!(matches!(structure, GroupStructure::Unrecognized(_)));
    }

    #[test]
    fn value_signature_ignores_sub_group_and_value_order() {
        let a = TwoDimensionGroup {
            key: "cloud".into(),
            values: vec![
                SubGroup {
                    name: "AWS".into(),
                    key: "region".into(),
                    values: vec!["us".into(), "eu".into()],
                },
                SubGroup {
                    name: "GCP".into(),
                    key: "zone".into(),
                    values: vec!["b".into(), "a".into()],
                },
            ],
        };
        let mut b = a.clone();
        b.values.reverse();
        b.values[0].values.reverse();

        assert_eq!(a.value_signature(), b.value_signature());
        assert_eq!(a.sorted_keys(), b.sorted_keys());
        assert_eq!(a.sorted_names(), vec!["AWS".to_string(), "GCP".to_string()]);
    }
}
