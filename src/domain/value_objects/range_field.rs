//! Range Field Value Object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TariffError;

/// Editable column of a range row, named as in form state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RangeField {
    FromValue,
    ToValue,
    Rate,
    FlatAmount,
}

impl RangeField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeField::FromValue => "fromValue",
            RangeField::ToValue => "toValue",
            RangeField::Rate => "rate",
            RangeField::FlatAmount => "flatAmount",
        }
    }

    /// Bounds are integers, amounts are decimals
    pub fn is_bound(&self) -> bool {
        matches!(self, RangeField::FromValue | RangeField::ToValue)
    }
}

impl fmt::Display for RangeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RangeField {
    type Err = TariffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "fromValue" | "from_value" | "from" => Ok(RangeField::FromValue),
            "toValue" | "to_value" | "to" => Ok(RangeField::ToValue),
            "rate" | "perUnit" => Ok(RangeField::Rate),
            "flatAmount" | "flat_amount" | "flat" => Ok(RangeField::FlatAmount),
            other => Err(TariffError::UnknownField {
                name: other.to_string(),
            }),
        }
    }
}
