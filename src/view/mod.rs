//! View controller: category filter and search state over the note store.

mod render;

pub use render::{Renderer, View};

use crate::domain::{CategoryFilter, Note, NoteDraft, NoteId};
use crate::store::{KeyValueStore, NoteError, NoteResult, NoteStore};
use tracing::{debug, warn};

/// Session state for browsing notes, plus the commands that act on them.
///
/// Holds the active category filter and search query. It keeps no copy of
/// the notes: every query reads the owned [`NoteStore`] afresh, so a view is
/// always current after a mutation.
///
/// # Examples
///
/// ```
/// use pinnotes::domain::{Category, CategoryFilter, NoteDraft};
/// use pinnotes::store::{MemoryStorage, NoteStore};
/// use pinnotes::view::ViewController;
///
/// let store = NoteStore::open(MemoryStorage::new()).unwrap();
/// let mut controller = ViewController::new(store);
/// controller
///     .create(NoteDraft::new("Deploy", Category::new("work").unwrap()))
///     .unwrap();
///
/// controller.set_search_query("deploy");
/// assert_eq!(controller.current_view().len(), 1);
///
/// controller.set_category_filter("personal".parse().unwrap());
/// assert!(controller.current_view().is_empty());
/// assert_eq!(controller.search_query(), "");
/// ```
#[derive(Debug)]
pub struct ViewController<S> {
    store: NoteStore<S>,
    category: CategoryFilter,
    query: String,
}

impl<S: KeyValueStore> ViewController<S> {
    /// Creates a controller showing every note with no search.
    pub fn new(store: NoteStore<S>) -> Self {
        Self {
            store,
            category: CategoryFilter::All,
            query: String::new(),
        }
    }

    /// Returns the active category filter.
    pub fn category_filter(&self) -> &CategoryFilter {
        &self.category
    }

    /// Returns the active search query.
    pub fn search_query(&self) -> &str {
        &self.query
    }

    /// Selects a category tab. Clears the search query.
    pub fn set_category_filter(&mut self, filter: CategoryFilter) {
        debug!(category = %filter, "category filter changed");
        self.category = filter;
        self.query.clear();
    }

    /// Sets the search query. An empty query shows the whole category.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Returns the notes to display: the category subset, then the search.
    pub fn current_view(&self) -> Vec<&Note> {
        let mut notes = self.store.filter(&self.category);
        if !self.query.is_empty() {
            let query = self.query.to_lowercase();
            notes.retain(|n| n.matches_query(&query));
        }
        notes
    }

    /// Maps a position in [`ViewController::current_view`] to the note's id.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::NotFound` if `position` is past the end of the view.
    pub fn resolve_identity(&self, position: usize) -> NoteResult<NoteId> {
        let view = self.current_view();
        view.get(position).map(|n| n.id()).ok_or_else(|| {
            warn!(position, shown = view.len(), "no note at view position");
            NoteError::NotFound(format!("position {} in view of {}", position, view.len()))
        })
    }

    /// Builds the snapshot handed to renderers.
    pub fn view(&self) -> View<'_> {
        View {
            filter: &self.category,
            query: &self.query,
            notes: self.current_view(),
            categories: self.store.categories(),
        }
    }

    /// Renders the current view.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.render(&self.view());
    }

    /// Creates a note. See [`NoteStore::create`].
    ///
    /// # Errors
    ///
    /// Propagates the store's errors.
    pub fn create(&mut self, draft: NoteDraft) -> NoteResult<Note> {
        self.store.create(draft)
    }

    /// Updates a note by id. See [`NoteStore::update`].
    ///
    /// # Errors
    ///
    /// Propagates the store's errors.
    pub fn update(&mut self, id: NoteId, draft: NoteDraft) -> NoteResult<Note> {
        self.store.update(id, draft)
    }

    /// Deletes a note by id. See [`NoteStore::delete`].
    ///
    /// # Errors
    ///
    /// Propagates the store's errors.
    pub fn delete(&mut self, id: NoteId) -> NoteResult<Note> {
        self.store.delete(id)
    }

    /// Updates the note shown at `position` in the current view.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::NotFound` for a bad position, otherwise as
    /// [`NoteStore::update`].
    pub fn edit_at(&mut self, position: usize, draft: NoteDraft) -> NoteResult<Note> {
        let id = self.resolve_identity(position)?;
        self.store.update(id, draft)
    }

    /// Deletes the note shown at `position` in the current view.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::NotFound` for a bad position, otherwise as
    /// [`NoteStore::delete`].
    pub fn delete_at(&mut self, position: usize) -> NoteResult<Note> {
        let id = self.resolve_identity(position)?;
        self.store.delete(id)
    }

    /// Pins or unpins a note, leaving its other fields alone.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::NotFound` if `id` is unknown, or
    /// `NoteError::Storage` if persisting fails.
    pub fn set_pinned(&mut self, id: NoteId, pinned: bool) -> NoteResult<Note> {
        let draft = self.store.note(id)?.to_draft().pinned(pinned);
        self.store.update(id, draft)
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &NoteStore<S> {
        &self.store
    }

    /// Returns the underlying store for operations outside the view, such as
    /// the theme preference or a reload after a storage failure.
    pub fn store_mut(&mut self) -> &mut NoteStore<S> {
        &mut self.store
    }

    /// Consumes the controller and returns the store.
    pub fn into_store(self) -> NoteStore<S> {
        self.store
    }
}
