//! Domain Entities
//!
//! - `GroupStructure` - One or two levels of keyed billable-metric groups
//! - `RangeRow` - A single graduated/volume pricing range

mod group;
mod range;

pub use group::{
    GroupInput, GroupParseError, GroupStructure, OneDimensionGroup, SubGroup, TwoDimensionGroup,
    EMPTY_GROUP,
};
pub use range::{RangeInfo, RangeRow, TableRow};
