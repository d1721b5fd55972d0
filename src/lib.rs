//! Tariff - pricing form helpers
//!
//! Two pieces of pricing-form logic, usable as a library or through the
//! `tariff` CLI:
//!
//! - classifying how a billable-metric group structure changed
//!   (`NoChange`, `AddOrRemove`, `StructuralChange`)
//! - editing a graduated/volume range table so its ranges stay contiguous

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{GroupDiffOutcome, GroupDiffUseCase, RangeEditor};
pub use config::Config;
pub use domain::entities::{GroupInput, GroupStructure, RangeInfo, RangeRow, TableRow};
pub use domain::ports::FormStore;
pub use domain::services::{classify, explain, DiffReason, DiffReport, RangeTable, RangeViolation};
pub use domain::value_objects::{DiffLevel, FieldPath, RangeField};
pub use error::{TariffError, TariffResult};
pub use infrastructure::{JsonFormRepository, MemoryFormState};
