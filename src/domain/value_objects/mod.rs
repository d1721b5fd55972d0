//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod diff_level;
mod field_path;
mod range_field;

pub use diff_level::DiffLevel;
pub use field_path::{FieldPath, PathSegment};
pub use range_field::RangeField;
