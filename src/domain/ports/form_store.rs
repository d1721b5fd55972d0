//! FormStore port - access to the form state that owns editable values
//!
//! The range editor never keeps rows itself. It reads them from, and writes
//! them back to, whatever form state the caller hands it.

use serde_json::Value;

use crate::domain::value_objects::FieldPath;
use crate::error::TariffResult;

/// Read/write access to a form document by field path
///
/// Implementations:
/// - `MemoryFormState` - in-memory JSON document
/// - `&mut S` for any store `S`, so callers can lend a store out
pub trait FormStore {
    /// Current value at `path`, `None` if nothing is stored there
    fn get_field(&self, path: &FieldPath) -> Option<Value>;

    /// Replace the value at `path`, creating intermediate objects as needed
    fn set_field(&mut self, path: &FieldPath, value: Value) -> TariffResult<()>;
}

impl<S: FormStore + ?Sized> FormStore for &mut S {
    fn get_field(&self, path: &FieldPath) -> Option<Value> {
        (**self).get_field(path)
    }

    fn set_field(&mut self, path: &FieldPath, value: Value) -> TariffResult<()> {
        (**self).set_field(path, value)
    }
}
