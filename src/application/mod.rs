//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `GroupDiffUseCase` - Loads two group structures and classifies the change
//! - `RangeEditor` - Edits a graduated range table stored in form state

pub mod group_diff;
pub mod range_editor;

pub use group_diff::{GroupDiffOutcome, GroupDiffUseCase};
pub use range_editor::RangeEditor;
