//! Group Diff Use Case
//!
//! Loads two group structures from CLI-style sources and classifies the
//! change between them.

use crate::domain::entities::GroupInput;
use crate::domain::services::{DiffReport, GroupDiffer};
use crate::error::TariffResult;
use crate::infrastructure::load_group_input;

/// Result of a group diff
#[derive(Debug, Clone)]
pub struct GroupDiffOutcome {
    pub report: DiffReport,
    /// Pretty JSON of the old structure (raw text if it didn't parse)
    pub old_pretty: String,
    /// Pretty JSON of the new structure (raw text if it didn't parse)
    pub new_pretty: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GroupDiffUseCase {
    differ: GroupDiffer,
}

impl GroupDiffUseCase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn execute(&self, old: &GroupInput, new: &GroupInput) -> GroupDiffOutcome {
        GroupDiffOutcome {
            report: self.differ.explain(old, new),
            old_pretty: old.pretty(),
            new_pretty: new.pretty(),
        }
    }

    /// Resolve both sources (file path, inline JSON or `-`), then diff.
    pub fn execute_sources(
        &self,
        old: Option<&str>,
        new: Option<&str>,
    ) -> TariffResult<GroupDiffOutcome> {
        let old = load_group_input(old)?;
        let new = load_group_input(new)?;
        Ok(self.execute(&old, &new))
    }
}
