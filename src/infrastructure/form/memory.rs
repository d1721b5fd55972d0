//! In-memory form state backed by a JSON document.

use serde_json::{Map, Value};

use crate::domain::ports::FormStore;
use crate::domain::value_objects::{FieldPath, PathSegment};
use crate::error::{TariffError, TariffResult};

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryFormState {
    document: Value,
}

impl Default for MemoryFormState {
    fn default() -> Self {
        Self {
            document: Value::Object(Map::new()),
        }
    }
}

impl MemoryFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_document(document: Value) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Value {
        &self.document
    }
}

impl FormStore for MemoryFormState {
    fn get_field(&self, path: &FieldPath) -> Option<Value> {
        let mut current = &self.document;
        for segment in path.segments() {
            current = match segment {
                PathSegment::Key(key) => current.as_object()?.get(key)?,
                PathSegment::Index(index) => current.as_array()?.get(*index)?,
            };
        }
        Some(current.clone())
    }

    fn set_field(&mut self, path: &FieldPath, value: Value) -> TariffResult<()> {
        let invalid = |message: String| TariffError::InvalidFieldPath {
            path: path.to_string(),
            message,
        };

        let mut slot = &mut self.document;
        for segment in path.segments() {
            if slot.is_null() {
                *slot = match segment {
                    PathSegment::Key(_) => Value::Object(Map::new()),
                    PathSegment::Index(_) => Value::Array(Vec::new()),
                };
            }

            slot = match (segment, slot) {
                (PathSegment::Key(key), Value::Object(map)) => {
                    map.entry(key.clone()).or_insert(Value::Null)
                }
                (PathSegment::Index(index), Value::Array(items)) => {
                    if *index == items.len() {
                        items.push(Value::Null);
                    }
                    let len = items.len();
                    items.get_mut(*index).ok_or_else(|| {
                        invalid(format!("index {} is past the end of a {}-item list", index, len))
                    })?
                }
                (segment, other) => {
                    return Err(invalid(format!(
                        "cannot address '{}' inside {}",
                        segment,
                        kind_of(other)
                    )))
                }
            };
        }

        *slot = value;
        Ok(())
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(p: &str) -> FieldPath {
        FieldPath::parse(p).unwrap()
    }

    #[test]
    fn get_walks_objects_and_arrays() {
        let state = MemoryFormState::from_document(json!({
            "charges": [{ "properties": { "graduatedRanges": [] } }]
        }));

        assert_eq!(
            state.get_field(&path("charges.0.properties.graduatedRanges")),
            Some(json!([]))
        );
        assert_eq!(state.get_field(&path("charges.1.properties")), None);
        assert_eq!(state.get_field(&path("charges.name")), None);
    }

    #[test]
    fn set_creates_intermediate_containers() {
        let mut state = MemoryFormState::new();
        state
            .set_field(&path("charges.0.properties.rate"), json!("1"))
            .unwrap();

        assert_eq!(
            state.document(),
            &json!({ "charges": [{ "properties": { "rate": "1" } }] })
        );
    }

    #[test]
    fn set_replaces_existing_value() {
        let mut state = MemoryFormState::from_document(json!({ "ranges": [1, 2] }));
        state.set_field(&path("ranges"), json!([])).unwrap();
        assert_eq!(state.get_field(&path("ranges")), Some(json!([])));
    }

    #[test]
    fn set_rejects_mismatched_containers() {
        let mut state = MemoryFormState::from_document(json!({ "charges": "none" }));
        let err = state
            .set_field(&path("charges.0"), json!({}))
            .unwrap_err();
        assert!(err.to_string().contains("cannot address '0' inside a string"));

        let mut state = MemoryFormState::from_document(json!({ "charges": [] }));
        let err = state.set_field(&path("charges.3"), json!({})).unwrap_err();
        assert!(matches!(err, TariffError::InvalidFieldPath { .. }));
    }
}
