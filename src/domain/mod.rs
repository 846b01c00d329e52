//! Core types: Note, NoteDraft, NoteId (ULID), Category, Theme

mod category;
mod note;
mod note_id;
mod theme;

pub use category::{ALL_CATEGORIES, Category, CategoryFilter, ParseCategoryError};
pub use note::{Note, NoteDraft, PINNED_BADGE, ParseNoteError};
pub use note_id::{NoteId, ParseNoteIdError};
pub use theme::{ParseThemeError, Theme};
