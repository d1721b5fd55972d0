//! JSON Form Document Repository
//!
//! Persists a form document (the state a range editor works against) as a
//! pretty-printed JSON file. Writes go through a temp file in the same
//! directory and a rename, under an exclusive lock on `<file>.lock`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde_json::Value;
use tempfile::NamedTempFile;

use crate::error::{TariffError, TariffResult};
use crate::infrastructure::form::MemoryFormState;

pub struct JsonFormRepository {
    path: PathBuf,
}

impl JsonFormRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".lock");
        self.path.with_file_name(name)
    }

    /// Load the document; a missing file is an empty form.
    pub fn load(&self) -> TariffResult<MemoryFormState> {
        if !self.path.exists() {
            return Ok(MemoryFormState::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(MemoryFormState::new());
        }

        let document: Value =
            serde_json::from_str(&content).map_err(|e| TariffError::InvalidFormState {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;
        Ok(MemoryFormState::from_document(document))
    }

    pub fn save(&self, state: &MemoryFormState) -> TariffResult<()> {
        let _lock = self.lock()?;
        self.write_atomic(state)
    }

    /// Load, modify and save while holding the lock.
    pub fn update<T>(
        &self,
        edit: impl FnOnce(&mut MemoryFormState) -> TariffResult<T>,
    ) -> TariffResult<T> {
        let _lock = self.lock()?;
        let mut state = self.load()?;
        let result = edit(&mut state)?;
        self.write_atomic(&state)?;
        Ok(result)
    }

    fn lock(&self) -> TariffResult<FormLock> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(&lock_path)?;
        file.lock_exclusive()?;
        Ok(FormLock { file })
    }

    fn write_atomic(&self, state: &MemoryFormState) -> TariffResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut content = serde_json::to_string_pretty(state.document())?;
        content.push('\n');

        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

struct FormLock {
    file: fs::File,
}

impl Drop for FormLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::FormStore;
    use crate::domain::value_objects::FieldPath;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_as_empty_form() {
        let dir = tempdir().unwrap();
        let repo = JsonFormRepository::new(dir.path().join("form.json"));

        let state = repo.load().unwrap();
        assert_eq!(state.document(), &json!({}));
    }

    #[test]
    fn save_then_load_keeps_document() {
        let dir = tempdir().unwrap();
        let repo = JsonFormRepository::new(dir.path().join("nested/form.json"));
        let state = MemoryFormState::from_document(json!({ "ranges": [{ "fromValue": "0" }] }));

        repo.save(&state).unwrap();
        assert_eq!(repo.load().unwrap(), state);
        assert!(dir.path().join("nested/form.json.lock").exists());
    }

    #[test]
    fn update_persists_edits() {
        let dir = tempdir().unwrap();
        let repo = JsonFormRepository::new(dir.path().join("form.json"));
        let path = FieldPath::parse("plan.name").unwrap();

        repo.update(|state| state.set_field(&path, json!("Startup")))
            .unwrap();

        let content = fs::read_to_string(repo.path()).unwrap();
        assert!(content.contains("\"name\": \"Startup\""));
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("form.json");
        fs::write(&file, "{ not json").unwrap();

        let err = JsonFormRepository::new(&file).load().unwrap_err();
        assert!(matches!(err, TariffError::InvalidFormState { .. }));
    }
}
