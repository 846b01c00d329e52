//! Persistence: key-value backends, the note store, and the theme preference.

mod file;
mod memory;
mod notes;
mod theme;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use notes::{NoteError, NoteResult, NoteStore, sort_notes};

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Key holding the serialized note collection.
pub const NOTES_KEY: &str = "notes";

/// Key holding the theme preference.
pub const THEME_KEY: &str = "theme";

/// Errors raised by a backing store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The write would exceed the store's capacity. Nothing was written.
    #[error("storage quota exceeded writing '{key}': {needed} bytes needed, {quota} allowed")]
    QuotaExceeded {
        key: String,
        needed: usize,
        quota: usize,
    },

    /// The stored value could not be decoded.
    #[error("corrupted value under '{key}': {source}")]
    Corrupted {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A collection could not be encoded for writing.
    #[error("failed to encode value for '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for backing store operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// A string key-value store, the shape of browser local storage.
///
/// Implementations must make `set` all-or-nothing: on error the previous
/// value under `key` is left untouched.
pub trait KeyValueStore {
    /// Returns the value under `key`, or `None` if absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replaces the value under `key`.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;

    /// Removes `key` (idempotent).
    fn remove(&mut self, key: &str) -> StorageResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}
