//! Directory-backed store with atomic writes.

use super::{KeyValueStore, StorageError, StorageResult};
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes go to a temp file in the same directory which is then renamed
/// over the target, so readers see either the old or the new value.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Returns the directory holding the key files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file path used for `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for(key);

        let mut temp = NamedTempFile::new_in(&self.dir).map_err(|source| StorageError::Io {
            path: path.clone(),
            source,
        })?;

        temp.write_all(value.as_bytes())
            .map_err(|source| StorageError::Io {
                path: path.clone(),
                source,
            })?;

        temp.persist(&path)
            .map_err(|e| StorageError::AtomicWrite {
                path: path.clone(),
                source: e.error,
            })?;

        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn open_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested").join("data");
        let store = FileStorage::open(&dir).unwrap();
        assert!(store.dir().is_dir());
    }

    #[test]
    fn get_missing_key_is_none() {
        let temp = TempDir::new().unwrap();
        let store = FileStorage::open(temp.path()).unwrap();
        assert_eq!(store.get("notes").unwrap(), None);
    }

    #[test]
    fn set_writes_key_file() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStorage::open(temp.path()).unwrap();

        store.set("theme", "dark").unwrap();

        let on_disk = std::fs::read_to_string(temp.path().join("theme.json")).unwrap();
        assert_eq!(on_disk, "dark");
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn set_replaces_previous_value() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStorage::open(temp.path()).unwrap();

        store.set("notes", "[1]").unwrap();
        store.set("notes", "[]").unwrap();

        assert_eq!(store.get("notes").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn set_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStorage::open(temp.path()).unwrap();
        store.set("notes", "[]").unwrap();

        let names: Vec<_> = std::fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["notes.json".to_string()]);
    }

    #[test]
    fn remove_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStorage::open(temp.path()).unwrap();
        store.set("theme", "light").unwrap();

        store.remove("theme").unwrap();
        store.remove("theme").unwrap();
        assert_eq!(store.get("theme").unwrap(), None);
    }
}
