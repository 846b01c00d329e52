//! The note store: sole owner of the persisted, ordered note collection.

use super::{KeyValueStore, NOTES_KEY, StorageError};
use crate::domain::{Category, CategoryFilter, Note, NoteDraft, NoteId, ParseNoteError, Theme};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::de::Error as _;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Errors returned by note store operations.
#[derive(Debug, Error)]
pub enum NoteError {
    /// A required field is missing. Nothing was changed.
    #[error(transparent)]
    Validation(#[from] ParseNoteError),

    /// The identity does not resolve to a stored note. Nothing was changed.
    #[error("note not found: {0}")]
    NotFound(String),

    /// The backing store failed. Persisted and in-memory state are unchanged.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type for note store operations.
pub type NoteResult<T> = Result<T, NoteError>;

/// A note as found in storage. `id` is absent in collections written
/// before notes carried identifiers.
#[derive(Deserialize)]
struct NoteRecord {
    #[serde(default)]
    id: Option<NoteId>,
    title: String,
    #[serde(default)]
    description: String,
    category: Category,
    #[serde(default)]
    pinned: bool,
    #[serde(rename = "createdAt")]
    created_at: DateTime<Utc>,
}

impl NoteRecord {
    /// Builds the note stored at `index`. Returns true alongside it when the
    /// record had no id and one was derived.
    fn into_note(self, index: usize) -> Result<(Note, bool), ParseNoteError> {
        let assigned_id = self.id.is_none();
        let id = self
            .id
            .unwrap_or_else(|| NoteId::for_record(self.created_at, index));
        let draft = NoteDraft::new(self.title, self.category)
            .description(self.description)
            .pinned(self.pinned);

        Ok((Note::new(id, draft, self.created_at)?, assigned_id))
    }
}

/// Orders notes pinned-first, then newest first.
///
/// The sort is stable: notes with the same pinned flag and creation time
/// keep their relative order.
pub fn sort_notes(notes: &mut [Note]) {
    notes.sort_by(|a, b| {
        b.is_pinned()
            .cmp(&a.is_pinned())
            .then_with(|| b.created_at().cmp(&a.created_at()))
    });
}

/// Owns the note collection and its backing store.
///
/// The collection is kept sorted (see [`sort_notes`]) after loading and after
/// every mutation. Mutations are applied to a copy which replaces the
/// in-memory collection only once the write succeeded.
///
/// # Examples
///
/// ```
/// use pinnotes::domain::{Category, NoteDraft};
/// use pinnotes::store::{MemoryStorage, NoteStore};
///
/// let mut store = NoteStore::open(MemoryStorage::new()).unwrap();
/// let work = Category::new("work").unwrap();
/// store.create(NoteDraft::new("Deploy", work).pinned(true)).unwrap();
/// assert_eq!(store.list().len(), 1);
/// ```
#[derive(Debug)]
pub struct NoteStore<S> {
    storage: S,
    notes: Vec<Note>,
}

impl<S: KeyValueStore> NoteStore<S> {
    /// Loads the collection from `storage`.
    ///
    /// Records without an id get one derived from their creation time and
    /// stored position, and the collection is written back. A failed
    /// write-back is logged and the ids are derived again on the next load.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::Storage` if the stored collection cannot be read
    /// or decoded.
    pub fn open(storage: S) -> NoteResult<Self> {
        let mut store = Self {
            storage,
            notes: Vec::new(),
        };
        store.reload()?;
        Ok(store)
    }

    /// Re-reads the collection from the backing store.
    ///
    /// # Errors
    ///
    /// Same as [`NoteStore::open`].
    pub fn reload(&mut self) -> NoteResult<()> {
        let (mut notes, migrated) = self.load()?;
        sort_notes(&mut notes);

        if migrated {
            info!(count = notes.len(), "assigning ids to stored notes");
            // Derived ids are reproducible, so the write-back can wait.
            if let Err(err) = self.write(&notes) {
                warn!(error = %err, "keeping assigned ids in memory only");
            }
        }

        debug!(count = notes.len(), "loaded notes");
        self.notes = notes;
        Ok(())
    }

    /// Returns every note in collection order.
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    /// Returns the note with `id`, if any.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id() == id)
    }

    /// Returns the note with `id`, treating an unknown id as an error.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::NotFound` if `id` is unknown.
    pub fn note(&self, id: NoteId) -> NoteResult<&Note> {
        self.position(id).map(|position| &self.notes[position])
    }

    /// Returns the notes passing `filter`, in collection order.
    pub fn filter(&self, filter: &CategoryFilter) -> Vec<&Note> {
        self.notes
            .iter()
            .filter(|n| filter.admits(n.category()))
            .collect()
    }

    /// Returns each category in use with its note count, sorted by label.
    pub fn categories(&self) -> Vec<(Category, usize)> {
        let mut counts: BTreeMap<&Category, usize> = BTreeMap::new();
        for note in &self.notes {
            *counts.entry(note.category()).or_default() += 1;
        }
        counts
            .into_iter()
            .map(|(category, count)| (category.clone(), count))
            .collect()
    }

    /// Creates a note stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::Validation` if the title is empty, or
    /// `NoteError::Storage` if persisting fails.
    pub fn create(&mut self, draft: NoteDraft) -> NoteResult<Note> {
        self.create_at(draft, Utc::now())
    }

    /// Creates a note with an explicit creation time.
    ///
    /// # Errors
    ///
    /// Same as [`NoteStore::create`].
    pub fn create_at(&mut self, draft: NoteDraft, created_at: DateTime<Utc>) -> NoteResult<Note> {
        let note = Note::new(NoteId::new(), draft, created_at)?;

        let mut staged = self.notes.clone();
        staged.push(note.clone());
        sort_notes(&mut staged);
        self.commit(staged)?;

        info!(id = %note.id(), pinned = note.is_pinned(), "created note");
        Ok(note)
    }

    /// Replaces the editable fields of the note with `id`.
    ///
    /// The note keeps its id and creation time.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::NotFound` if `id` is unknown,
    /// `NoteError::Validation` if the title is empty, or
    /// `NoteError::Storage` if persisting fails.
    pub fn update(&mut self, id: NoteId, draft: NoteDraft) -> NoteResult<Note> {
        let position = self.position(id)?;
        let updated = self.notes[position].edited(draft)?;

        let mut staged = self.notes.clone();
        staged[position] = updated.clone();
        sort_notes(&mut staged);
        self.commit(staged)?;

        info!(id = %id, "updated note");
        Ok(updated)
    }

    /// Removes the note with `id` and returns it.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::NotFound` if `id` is unknown, or
    /// `NoteError::Storage` if persisting fails.
    pub fn delete(&mut self, id: NoteId) -> NoteResult<Note> {
        let position = self.position(id)?;

        // Removal keeps the survivors sorted.
        let mut staged = self.notes.clone();
        let removed = staged.remove(position);
        self.commit(staged)?;

        info!(id = %id, "deleted note");
        Ok(removed)
    }

    /// Returns the stored theme preference. Unset or unknown values read as light.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::Storage` if the backing store cannot be read.
    pub fn theme(&self) -> NoteResult<Theme> {
        Ok(super::theme::theme(&self.storage)?)
    }

    /// Stores `theme` as the preference.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::Storage` if the write fails.
    pub fn set_theme(&mut self, theme: Theme) -> NoteResult<()> {
        Ok(super::theme::set_theme(&mut self.storage, theme)?)
    }

    /// Flips the theme preference and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::Storage` if reading or writing fails.
    pub fn toggle_theme(&mut self) -> NoteResult<Theme> {
        Ok(super::theme::toggle_theme(&mut self.storage)?)
    }

    /// Consumes the store and returns its backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn position(&self, id: NoteId) -> NoteResult<usize> {
        self.notes.iter().position(|n| n.id() == id).ok_or_else(|| {
            warn!(id = %id, "no note with this id");
            NoteError::NotFound(id.to_string())
        })
    }

    fn load(&self) -> NoteResult<(Vec<Note>, bool)> {
        let Some(raw) = self.storage.get(NOTES_KEY)? else {
            return Ok((Vec::new(), false));
        };

        let corrupted = |source: serde_json::Error| StorageError::Corrupted {
            key: NOTES_KEY.to_string(),
            source,
        };
        let records: Vec<NoteRecord> = serde_json::from_str(&raw).map_err(corrupted)?;

        let mut migrated = false;
        let mut notes = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            let (note, assigned_id) = record
                .into_note(index)
                .map_err(|err| corrupted(serde_json::Error::custom(err)))?;
            migrated |= assigned_id;
            notes.push(note);
        }
        Ok((notes, migrated))
    }

    fn commit(&mut self, staged: Vec<Note>) -> NoteResult<()> {
        self.write(&staged)?;
        self.notes = staged;
        Ok(())
    }

    fn write(&mut self, notes: &[Note]) -> NoteResult<()> {
        let json = serde_json::to_string(notes).map_err(|source| StorageError::Encode {
            key: NOTES_KEY.to_string(),
            source,
        })?;

        if let Err(err) = self.storage.set(NOTES_KEY, &json) {
            error!(error = %err, "failed to persist notes");
            return Err(err.into());
        }

        debug!(count = notes.len(), bytes = json.len(), "persisted notes");
        Ok(())
    }
}
