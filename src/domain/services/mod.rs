//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod group_differ;
mod range_table;

pub use group_differ::{classify, explain, DiffReason, DiffReport, GroupDiffer, Side};
pub use range_table::{RangeTable, RangeViolation};

pub(crate) use range_table::parse_count;
