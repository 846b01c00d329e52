//! Isolated test environment with temp directory.

use super::{PinnotesCommand, TestNote};
use pinnotes::domain::Note;
use pinnotes::store::{FileStorage, NoteStore};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary data directory.
///
/// Creates a temp directory that is automatically cleaned up on drop.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the data directory
    data_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let data_dir = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    /// Returns the path to the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the path of the persisted notes file.
    pub fn notes_path(&self) -> PathBuf {
        self.data_dir.join("notes.json")
    }

    /// Returns the path of the persisted theme file.
    pub fn theme_path(&self) -> PathBuf {
        self.data_dir.join("theme.json")
    }

    /// Opens the store the CLI writes to.
    pub fn store(&self) -> NoteStore<FileStorage> {
        let storage = FileStorage::open(&self.data_dir).expect("Failed to open storage");
        NoteStore::open(storage).expect("Failed to open note store")
    }

    /// Adds a test note with its explicit creation time and returns it.
    pub fn add_note(&self, test_note: &TestNote) -> Note {
        self.store()
            .create_at(test_note.to_draft(), test_note.created())
            .expect("Failed to add test note")
    }

    /// Returns the titles of all notes in stored order.
    pub fn titles(&self) -> Vec<String> {
        self.store()
            .list()
            .iter()
            .map(|n| n.title().to_string())
            .collect()
    }

    /// Creates a command configured for this test environment.
    pub fn cmd(&self) -> PinnotesCommand {
        PinnotesCommand::new().dir(&self.data_dir)
    }

    /// Writes a raw file into the data directory and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.data_dir.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_temp_directory() {
        let env = TestEnv::new();
        assert!(env.data_dir().is_dir());
        assert!(!env.notes_path().exists(), "no notes written yet");
    }

    #[test]
    fn test_env_add_note_persists() {
        let env = TestEnv::new();
        env.add_note(&TestNote::new("Persisted"));

        assert!(env.notes_path().exists());
        assert_eq!(env.titles(), vec!["Persisted".to_string()]);
    }
}
