//! Group Differ Domain Service
//!
//! Classifies the change between two group structures. Decision order:
//!
//! 1. either side invalid (unparseable, missing or `{}`) → structural change
//! 2. raw JSON equality → no change
//! 3. different (or unrecognized) dimension → structural change
//! 4. same dimension → compare keys, names and values ignoring order

use serde::Serialize;

use crate::domain::entities::{
    GroupInput, GroupParseError, GroupStructure, OneDimensionGroup, TwoDimensionGroup,
};
use crate::domain::value_objects::DiffLevel;

/// Which input a reason refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Old,
    New,
}

/// A single contributor to the diff level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum DiffReason {
    Invalid { side: Side, cause: String },
    DimensionMismatch,
    KeyChanged { old: String, new: String },
    ValuesChanged,
    SubGroupKeysChanged,
    SubGroupNamesChanged,
    SubGroupValuesChanged,
}

impl DiffReason {
    pub fn describe(&self) -> String {
        match self {
            DiffReason::Invalid { side, cause } => {
                let side = match side {
                    Side::Old => "old",
                    Side::New => "new",
                };
                format!("{} structure is invalid: {}", side, cause)
            }
            DiffReason::DimensionMismatch => {
                "structures do not share the same dimension".to_string()
            }
            DiffReason::KeyChanged { old, new } => {
                format!("group key changed from '{}' to '{}'", old, new)
            }
            DiffReason::ValuesChanged => "group values were added or removed".to_string(),
            DiffReason::SubGroupKeysChanged => "sub-group keys changed".to_string(),
            DiffReason::SubGroupNamesChanged => "sub-group names changed".to_string(),
            DiffReason::SubGroupValuesChanged => {
                "sub-group values were added or removed".to_string()
            }
        }
    }
}

/// Level plus every reason that led to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffReport {
    pub level: DiffLevel,
    pub reasons: Vec<DiffReason>,
}

impl DiffReport {
    fn unchanged() -> Self {
        Self {
            level: DiffLevel::NoChange,
            reasons: Vec::new(),
        }
    }

    fn structural(reasons: Vec<DiffReason>) -> Self {
        Self {
            level: DiffLevel::StructuralChange,
            reasons,
        }
    }

    fn from_changes(reasons: Vec<DiffReason>) -> Self {
        if reasons.is_empty() {
            Self::unchanged()
        } else {
            Self {
                level: DiffLevel::AddOrRemove,
                reasons,
            }
        }
    }

    pub fn has_changes(&self) -> bool {
        self.level != DiffLevel::NoChange
    }
}

/// Differ service for group structures
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupDiffer;

impl GroupDiffer {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, old: &GroupInput, new: &GroupInput) -> DiffLevel {
        self.explain(old, new).level
    }

    pub fn explain(&self, old: &GroupInput, new: &GroupInput) -> DiffReport {
        let (old, new) = match (old.normalize(), new.normalize()) {
            (Ok(old), Ok(new)) => (old, new),
            (old, new) => {
                let reasons = [(Side::Old, old.err()), (Side::New, new.err())]
                    .into_iter()
                    .filter_map(|(side, err)| err.map(|e| invalid(side, &e)))
                    .collect();
                return DiffReport::structural(reasons);
            }
        };

        if old == new {
            return DiffReport::unchanged();
        }

        match (
            GroupStructure::from_value(&old),
            GroupStructure::from_value(&new),
        ) {
            (GroupStructure::OneDimension(a), GroupStructure::OneDimension(b)) => {
                DiffReport::from_changes(one_dimension_changes(&a, &b))
            }
            (GroupStructure::TwoDimension(a), GroupStructure::TwoDimension(b)) => {
                DiffReport::from_changes(two_dimension_changes(&a, &b))
            }
            _ => DiffReport::structural(vec![DiffReason::DimensionMismatch]),
        }
    }
}

fn invalid(side: Side, err: &GroupParseError) -> DiffReason {
    DiffReason::Invalid {
        side,
        cause: err.to_string(),
    }
}

fn key_change(old: &str, new: &str) -> Option<DiffReason> {
    (old != new).then(|| DiffReason::KeyChanged {
        old: old.to_string(),
        new: new.to_string(),
    })
}

fn one_dimension_changes(a: &OneDimensionGroup, b: &OneDimensionGroup) -> Vec<DiffReason> {
    let mut reasons: Vec<DiffReason> = key_change(&a.key, &b.key).into_iter().collect();
    if a.sorted_values() != b.sorted_values() {
        reasons.push(DiffReason::ValuesChanged);
    }
    reasons
}

// Names are compared on their own: a rename with identical keys and values
// still counts as add/remove.
fn two_dimension_changes(a: &TwoDimensionGroup, b: &TwoDimensionGroup) -> Vec<DiffReason> {
    let mut reasons: Vec<DiffReason> = key_change(&a.key, &b.key).into_iter().collect();
    if a.sorted_keys() != b.sorted_keys() {
        reasons.push(DiffReason::SubGroupKeysChanged);
    }
    if a.sorted_names() != b.sorted_names() {
        reasons.push(DiffReason::SubGroupNamesChanged);
    }
    if a.value_signature() != b.value_signature() {
        reasons.push(DiffReason::SubGroupValuesChanged);
    }
    reasons
}

/// Classify the change from `group1` to `group2`.
pub fn classify(group1: impl Into<GroupInput>, group2: impl Into<GroupInput>) -> DiffLevel {
    GroupDiffer::new().classify(&group1.into(), &group2.into())
}

/// Like [`classify`], with the reasons behind the level.
pub fn explain(group1: impl Into<GroupInput>, group2: impl Into<GroupInput>) -> DiffReport {
    GroupDiffer::new().explain(&group1.into(), &group2.into())
}
