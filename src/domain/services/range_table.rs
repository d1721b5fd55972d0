//! Range Table Domain Service
//!
//! Edits an ordered list of graduated/volume pricing ranges while keeping
//! them contiguous: every row starts one unit after the previous row ends,
//! and the last row is open-ended.
//!
//! Every operation takes the current rows and returns new ones; the caller
//! owns storage.

use std::fmt;

use serde::Serialize;

use crate::domain::entities::{RangeInfo, RangeRow, TableRow};
use crate::domain::value_objects::RangeField;
use crate::error::{TariffError, TariffResult};

/// A broken table invariant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "violation", rename_all = "snake_case")]
pub enum RangeViolation {
    /// No rows at all
    Empty,
    /// Row does not start right after its predecessor
    Gap {
        index: usize,
        expected_from: u64,
        actual_from: u64,
    },
    /// Row ends before it starts
    Inverted { index: usize, from: u64, to: u64 },
    /// Open-ended row that isn't last
    UnboundedBeforeEnd { index: usize },
    /// Last row with an upper bound
    BoundedLastRange { index: usize, to: u64 },
}

impl fmt::Display for RangeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeViolation::Empty => write!(f, "table has no ranges"),
            RangeViolation::Gap {
                index,
                expected_from,
                actual_from,
            } => write!(
                f,
                "range {} starts at {} but should start at {}",
                index, actual_from, expected_from
            ),
            RangeViolation::Inverted { index, from, to } => {
                write!(f, "range {} ends at {} before it starts at {}", index, to, from)
            }
            RangeViolation::UnboundedBeforeEnd { index } => {
                write!(f, "range {} is open-ended but is not the last range", index)
            }
            RangeViolation::BoundedLastRange { index, to } => {
                write!(f, "last range {} must be open-ended but ends at {}", index, to)
            }
        }
    }
}

/// Range table service
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeTable;

impl RangeTable {
    /// Rows a fresh table starts with: `0..1` and `2..∞`
    pub fn default_rows() -> Vec<RangeRow> {
        vec![RangeRow::new(0, Some(1)), RangeRow::new(2, None)]
    }

    pub fn is_deletable(index: usize, disabled: bool) -> bool {
        index != 0 && !disabled
    }

    pub fn table_datas(rows: &[RangeRow], disabled: bool) -> Vec<TableRow> {
        rows.iter()
            .enumerate()
            .map(|(index, row)| TableRow {
                row: row.clone(),
                disabled_delete: !Self::is_deletable(index, disabled),
            })
            .collect()
    }

    /// Per-row figures for the calculation example.
    ///
    /// Units are attributed to tier boundaries: the first row reports its
    /// own upper bound, every other row the upper bound of the row before.
    pub fn infos_calculation(rows: &[RangeRow]) -> Vec<RangeInfo> {
        rows.iter()
            .enumerate()
            .map(|(index, row)| {
                let boundary = if index == 0 {
                    row.to_value
                } else {
                    rows[index - 1].to_value
                };
                RangeInfo {
                    units: boundary.unwrap_or(0),
                    rate: parse_amount(row.rate.as_deref()),
                    flat_amount: parse_amount(row.flat_amount.as_deref()),
                }
            })
            .collect()
    }

    /// Total of `units * rate + flat_amount` over the calculation infos
    pub fn calculation_example(rows: &[RangeRow]) -> f64 {
        Self::infos_calculation(rows)
            .iter()
            .map(|info| info.units as f64 * info.rate + info.flat_amount)
            .sum()
    }

    /// Insert a row right before the open-ended last row.
    pub fn add_range(rows: &[RangeRow]) -> Vec<RangeRow> {
        let Some((last, bounded)) = rows.split_last() else {
            return Self::default_rows();
        };

        let from_value = bounded
            .last()
            .map(|prev| prev.upper_bound().saturating_add(1))
            .unwrap_or(0);
        let to_value = from_value.saturating_add(1);

        let mut pushed_down = last.clone();
        if pushed_down.from_value <= to_value {
            pushed_down.from_value = to_value.saturating_add(1);
        }

        let mut next = Vec::with_capacity(rows.len() + 1);
        next.extend_from_slice(bounded);
        next.push(RangeRow::new(from_value, Some(to_value)));
        next.push(pushed_down);
        next
    }

    /// Write one field of one row.
    ///
    /// Only `toValue` cascades: every following row is re-anchored after its
    /// predecessor and widened to at least one unit if needed.
    pub fn handle_update(
        rows: &[RangeRow],
        index: usize,
        field: RangeField,
        value: &str,
    ) -> TariffResult<Vec<RangeRow>> {
        check_index(rows, index)?;
        let mut next = rows.to_vec();

        match field {
            RangeField::ToValue => {
                if index + 1 == next.len() {
                    return Err(TariffError::OpenEndedRange { index });
                }
                next[index].to_value = Some(require_count(field, value)?);

                for i in index + 1..next.len() {
                    let from_value = next[i - 1].upper_bound().saturating_add(1);
                    let row = &mut next[i];
                    row.from_value = from_value;
                    if let Some(to_value) = row.to_value {
                        if to_value <= from_value {
                            row.to_value = Some(from_value.saturating_add(1));
                        }
                    }
                }
            }
            RangeField::FromValue => next[index].from_value = require_count(field, value)?,
            RangeField::Rate => next[index].rate = coerce_amount(field, value)?,
            RangeField::FlatAmount => next[index].flat_amount = coerce_amount(field, value)?,
        }

        Ok(next)
    }

    /// Remove a row, re-anchor the rows after it and reopen the last row.
    pub fn delete_range(
        rows: &[RangeRow],
        index: usize,
        disabled: bool,
    ) -> TariffResult<Vec<RangeRow>> {
        check_index(rows, index)?;
        if !Self::is_deletable(index, disabled) {
            return Err(TariffError::RangeNotDeletable { index });
        }

        let mut next = rows.to_vec();
        next.remove(index);

        for i in index..next.len() {
            next[i].from_value = next[i - 1].upper_bound().saturating_add(1);
        }
        if let Some(last) = next.last_mut() {
            last.to_value = None;
        }

        Ok(next)
    }

    pub fn validate(rows: &[RangeRow]) -> Vec<RangeViolation> {
        let Some(last_index) = rows.len().checked_sub(1) else {
            return vec![RangeViolation::Empty];
        };

        let mut violations = Vec::new();
        for (index, row) in rows.iter().enumerate() {
            if index > 0 {
                if let Some(prev_to) = rows[index - 1].to_value {
                    let expected_from = prev_to.saturating_add(1);
                    if row.from_value != expected_from {
                        violations.push(RangeViolation::Gap {
                            index,
                            expected_from,
                            actual_from: row.from_value,
                        });
                    }
                }
            }

            match row.to_value {
                Some(to) if index == last_index => {
                    violations.push(RangeViolation::BoundedLastRange { index, to });
                }
                Some(to) if to < row.from_value => {
                    violations.push(RangeViolation::Inverted {
                        index,
                        from: row.from_value,
                        to,
                    });
                }
                None if index != last_index => {
                    violations.push(RangeViolation::UnboundedBeforeEnd { index });
                }
                _ => {}
            }
        }
        violations
    }
}

fn check_index(rows: &[RangeRow], index: usize) -> TariffResult<()> {
    if index < rows.len() {
        Ok(())
    } else {
        Err(TariffError::RangeIndexOutOfBounds {
            index,
            len: rows.len(),
        })
    }
}

/// Parse a non-negative integer, accepting integral decimals like `"4.0"`.
pub(crate) fn parse_count(text: &str) -> Option<u64> {
    let text = text.trim();
    if let Ok(count) = text.parse::<u64>() {
        return Some(count);
    }
    let number = text.parse::<f64>().ok()?;
    (number.is_finite() && number >= 0.0 && number.fract() == 0.0 && number <= u64::MAX as f64)
        .then_some(number as u64)
}

fn require_count(field: RangeField, value: &str) -> TariffResult<u64> {
    parse_count(value).ok_or_else(|| TariffError::InvalidNumber {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Canonical decimal text for an amount; an empty value clears the field.
fn coerce_amount(field: RangeField, value: &str) -> TariffResult<Option<String>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(Some(number.to_string())),
        _ => Err(TariffError::InvalidNumber {
            field: field.to_string(),
            value: value.to_string(),
        }),
    }
}

fn parse_amount(text: Option<&str>) -> f64 {
    text.and_then(|t| t.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}
