//! Range Row Entity
//!
//! One row of a graduated or volume price table. Bounds are integers but
//! travel through form state as decimal strings (`"0"`, `"10"`), with `null`
//! marking the open-ended last row. Numbers are accepted on input too.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A contiguous pricing range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeRow {
    #[serde(with = "decimal")]
    pub from_value: u64,

    #[serde(with = "decimal::option", default)]
    pub to_value: Option<u64>,

    #[serde(
        with = "decimal::text",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub rate: Option<String>,

    #[serde(
        with = "decimal::text",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub flat_amount: Option<String>,
}

impl RangeRow {
    /// A row without rate or flat amount
    pub fn new(from_value: u64, to_value: Option<u64>) -> Self {
        Self {
            from_value,
            to_value,
            rate: None,
            flat_amount: None,
        }
    }

    pub fn with_rate(mut self, rate: impl Into<String>) -> Self {
        self.rate = Some(rate.into());
        self
    }

    pub fn with_flat_amount(mut self, flat_amount: impl Into<String>) -> Self {
        self.flat_amount = Some(flat_amount.into());
        self
    }

    pub fn is_open_ended(&self) -> bool {
        self.to_value.is_none()
    }

    /// Highest unit covered, falling back to `from_value` for an open row
    pub(crate) fn upper_bound(&self) -> u64 {
        self.to_value.unwrap_or(self.from_value)
    }
}

/// A row as presented in the editable table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    #[serde(flatten)]
    pub row: RangeRow,
    pub disabled_delete: bool,
}

/// Figures used for the calculation example beside the table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeInfo {
    pub units: u64,
    pub rate: f64,
    pub flat_amount: f64,
}

/// Serde helpers for decimal-string encoded numbers.
mod decimal {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(serde_json::Number),
        Text(String),
    }

    fn count_from<E: serde::de::Error>(raw: NumberOrText) -> Result<u64, E> {
        let text = match raw {
            NumberOrText::Number(n) => n.to_string(),
            NumberOrText::Text(s) => s,
        };
        crate::domain::services::parse_count(text.trim())
            .ok_or_else(|| E::custom(format!("'{}' is not a non-negative integer", text)))
    }

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        count_from(NumberOrText::deserialize(deserializer)?)
    }

    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(
            value: &Option<u64>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(v) => serializer.serialize_str(&v.to_string()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<u64>, D::Error> {
            match Option::<NumberOrText>::deserialize(deserializer)? {
                None => Ok(None),
                Some(NumberOrText::Text(s)) if s.trim().is_empty() => Ok(None),
                Some(raw) => count_from(raw).map(Some),
            }
        }
    }

    /// Free-form amounts are kept as text; numbers are stringified.
    pub mod text {
        use super::*;

        pub fn serialize<S: Serializer>(
            value: &Option<String>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(v) => serializer.serialize_str(v),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<String>, D::Error> {
            Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
                None => None,
                Some(NumberOrText::Number(n)) => Some(n.to_string()),
                Some(NumberOrText::Text(s)) if s.is_empty() => None,
                Some(NumberOrText::Text(s)) => Some(s),
            })
        }
    }
}
