//! Range Editor Use Case
//!
//! Binds the pure `RangeTable` operations to a form field. Rows are read
//! from the store at the configured path, transformed, and written back with
//! a single `set_field` per edit.
//!
//! The first time a path is used, an empty or missing row list is seeded
//! with the default two rows. Seeding happens again only after `set_path`
//! points the editor at a different field.

use crate::domain::entities::{RangeInfo, RangeRow, TableRow};
use crate::domain::ports::FormStore;
use crate::domain::services::{RangeTable, RangeViolation};
use crate::domain::value_objects::{FieldPath, RangeField};
use crate::error::{TariffError, TariffResult};

pub struct RangeEditor<S> {
    store: S,
    path: FieldPath,
    disabled: bool,
    seeded_for: Option<FieldPath>,
}

impl<S: FormStore> RangeEditor<S> {
    pub fn new(store: S, path: FieldPath) -> Self {
        Self {
            store,
            path,
            disabled: false,
            seeded_for: None,
        }
    }

    /// Disable deletion of every row
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn set_path(&mut self, path: FieldPath) {
        self.path = path;
    }

    /// Current rows, seeding the field first if needed
    pub fn rows(&mut self) -> TariffResult<Vec<RangeRow>> {
        self.ensure_seeded()?;
        self.read_rows()
    }

    pub fn table_datas(&mut self) -> TariffResult<Vec<TableRow>> {
        let rows = self.rows()?;
        Ok(RangeTable::table_datas(&rows, self.disabled))
    }

    pub fn infos_calculation(&mut self) -> TariffResult<Vec<RangeInfo>> {
        let rows = self.rows()?;
        Ok(RangeTable::infos_calculation(&rows))
    }

    pub fn calculation_example(&mut self) -> TariffResult<f64> {
        let rows = self.rows()?;
        Ok(RangeTable::calculation_example(&rows))
    }

    pub fn validate(&mut self) -> TariffResult<Vec<RangeViolation>> {
        let rows = self.rows()?;
        Ok(RangeTable::validate(&rows))
    }

    pub fn add_range(&mut self) -> TariffResult<()> {
        let rows = self.rows()?;
        self.write_rows(&RangeTable::add_range(&rows))
    }

    pub fn handle_update(
        &mut self,
        index: usize,
        field: RangeField,
        value: &str,
    ) -> TariffResult<()> {
        let rows = self.rows()?;
        let next = RangeTable::handle_update(&rows, index, field, value)?;
        self.write_rows(&next)
    }

    pub fn delete_range(&mut self, index: usize) -> TariffResult<()> {
        let rows = self.rows()?;
        let next = RangeTable::delete_range(&rows, index, self.disabled)?;
        self.write_rows(&next)
    }

    fn ensure_seeded(&mut self) -> TariffResult<()> {
        if self.seeded_for.as_ref() == Some(&self.path) {
            return Ok(());
        }
        if self.read_rows()?.is_empty() {
            self.write_rows(&RangeTable::default_rows())?;
        }
        self.seeded_for = Some(self.path.clone());
        Ok(())
    }

    fn read_rows(&self) -> TariffResult<Vec<RangeRow>> {
        match self.store.get_field(&self.path) {
            None | Some(serde_json::Value::Null) => Ok(Vec::new()),
            Some(value) => {
                serde_json::from_value(value).map_err(|e| TariffError::InvalidFormState {
                    path: self.path.to_string(),
                    message: e.to_string(),
                })
            }
        }
    }

    fn write_rows(&mut self, rows: &[RangeRow]) -> TariffResult<()> {
        let value = serde_json::to_value(rows)?;
        self.store.set_field(&self.path, value)
    }
}
