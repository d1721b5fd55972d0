//! Diff Level Value Object
//!
//! How disruptive a change between two group structures is to anything keyed
//! by the grouping (charges, filters, invoices already issued).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of comparing two group structures.
///
/// The three categories are independent; they are not ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffLevel {
    /// Equivalent once value ordering is ignored
    NoChange,
    /// Same dimension, but keys, names or values were added or removed
    AddOrRemove,
    /// Not comparable: invalid input or a different dimension
    StructuralChange,
}

impl DiffLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffLevel::NoChange => "no_change",
            DiffLevel::AddOrRemove => "add_or_remove",
            DiffLevel::StructuralChange => "structural_change",
        }
    }

    /// Process exit code used by `tariff diff --exit-code`
    pub fn exit_code(&self) -> i32 {
        match self {
            DiffLevel::NoChange => 0,
            DiffLevel::AddOrRemove => 1,
            DiffLevel::StructuralChange => 2,
        }
    }
}

impl fmt::Display for DiffLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_snake_case() {
        let json = serde_json::to_string(&DiffLevel::AddOrRemove).unwrap();
        assert_eq!(json, r#""add_or_remove""#);

        let parsed: DiffLevel = serde_json::from_str(r#""structural_change""#).unwrap();
        assert_eq!(parsed, DiffLevel::StructuralChange);
    }

    #[test]
    fn display_matches_serde_name() {
        assert_eq!(DiffLevel::NoChange.to_string(), "no_change");
    }

    #[test]
    fn exit_codes_are_distinct() {
        assert_eq!(DiffLevel::NoChange.exit_code(), 0);
        assert_eq!(DiffLevel::AddOrRemove.exit_code(), 1);
        assert_eq!(DiffLevel::StructuralChange.exit_code(), 2);
    }
}
