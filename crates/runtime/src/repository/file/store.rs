//! File-based SaveStore implementation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::repository::{RepositoryError, Result, SaveStore};

/// File-based implementation of SaveStore.
///
/// Each key is stored as `{key}.json` under the base directory. Writes go to a
/// temp file first and are renamed into place, so a crash mid-write never
/// leaves a truncated save behind.
pub struct FileSaveStore {
    base_dir: PathBuf,
}

impl FileSaveStore {
    /// Create a new file-based store, creating the directory if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the file backing `key`.
    fn entry_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\'])
            && !key.contains('\0');
        if !valid {
            return Err(RepositoryError::InvalidKey(key.to_string()));
        }
        Ok(self.base_dir.join(format!("{}.json", key)))
    }
}

impl SaveStore for FileSaveStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key)?;

        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path).map_err(RepositoryError::Io)?;

        tracing::debug!("Read save[{}] from {}", key, path.display());

        Ok(Some(contents))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.entry_path(key)?;
        let temp_path = path.with_extension("json.tmp");

        // Write to temp file
        fs::write(&temp_path, value).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Wrote save[{}] to {}", key, path.display());

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.entry_path(key)?;

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted save[{}]", key);
        }

        Ok(())
    }
}
