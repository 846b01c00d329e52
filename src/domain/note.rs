//! The Note entity and the draft used to create or edit one.

use crate::domain::{Category, NoteId};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Badge text shown on pinned notes. Part of a note's searchable text.
pub const PINNED_BADGE: &str = "Pinned";

/// The kind of error that occurred when constructing a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseNoteErrorKind {
    EmptyTitle,
}

/// Error returned when constructing an invalid note.
#[derive(Debug, Clone)]
pub struct ParseNoteError {
    kind: ParseNoteErrorKind,
}

impl fmt::Display for ParseNoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseNoteErrorKind::EmptyTitle => write!(f, "invalid note: title cannot be empty"),
        }
    }
}

impl std::error::Error for ParseNoteError {}

/// The user-editable fields of a note.
///
/// A draft is what the edit form produces: it carries no identity and no
/// creation time. Those are owned by the store.
///
/// # Examples
///
/// ```
/// use pinnotes::domain::{Category, NoteDraft};
///
/// let draft = NoteDraft::new("Deploy", Category::new("work").unwrap())
///     .description("ship v2")
///     .pinned(true);
/// assert!(draft.is_pinned());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    title: String,
    description: String,
    category: Category,
    pinned: bool,
}

impl NoteDraft {
    /// Creates a draft with an empty description, unpinned.
    pub fn new(title: impl Into<String>, category: Category) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            category,
            pinned: false,
        }
    }

    /// Replaces the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the pinned flag.
    pub fn pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    /// Sets the category.
    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Returns the title as entered (untrimmed).
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns whether the draft is pinned.
    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// Checks the draft without building a note.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if the title is empty or whitespace-only.
    pub fn validate(&self) -> Result<(), ParseNoteError> {
        if self.title.trim().is_empty() {
            return Err(ParseNoteError {
                kind: ParseNoteErrorKind::EmptyTitle,
            });
        }
        Ok(())
    }
}

/// A short text note.
///
/// Serialized with the persisted field names `id`, `title`, `description`,
/// `category`, `pinned` and `createdAt`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    id: NoteId,
    title: String,
    description: String,
    category: Category,
    pinned: bool,
    #[serde(rename = "createdAt")]
    created_at: DateTime<Utc>,
}

impl Note {
    /// Creates a note from a draft.
    ///
    /// Title and description are stored trimmed.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if the title is empty or whitespace-only.
    pub fn new(
        id: NoteId,
        draft: NoteDraft,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ParseNoteError> {
        draft.validate()?;

        Ok(Self {
            id,
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            category: draft.category,
            pinned: draft.pinned,
            created_at,
        })
    }

    /// Returns a copy with every editable field taken from `draft`.
    ///
    /// Identity and creation time are kept.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if the draft's title is empty.
    pub fn edited(&self, draft: NoteDraft) -> Result<Self, ParseNoteError> {
        Self::new(self.id, draft, self.created_at)
    }

    /// Returns a draft holding this note's editable fields.
    pub fn to_draft(&self) -> NoteDraft {
        NoteDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            pinned: self.pinned,
        }
    }

    /// Returns the note's unique identifier.
    pub fn id(&self) -> NoteId {
        self.id
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's description (may be empty).
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the note's category.
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Returns whether the note is pinned.
    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// Returns when the note was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the text a rendered card shows for this note.
    ///
    /// Title, pinned badge, description and category, one per line.
    pub fn display_text(&self) -> String {
        let mut lines = vec![self.title.as_str()];
        if self.pinned {
            lines.push(PINNED_BADGE);
        }
        lines.push(self.description.as_str());
        lines.push(self.category.as_str());
        lines.join("\n")
    }

    /// Returns true if the rendered text contains `query`, ignoring case.
    ///
    /// An empty query matches every note.
    pub fn matches_query(&self, query: &str) -> bool {
        query.is_empty()
            || self
                .display_text()
                .to_lowercase()
                .contains(&query.to_lowercase())
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.id.prefix())
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("description", &self.description)
            .field("category", &self.category)
            .field("pinned", &self.pinned)
            .field("created_at", &self.created_at)
            .finish()
    }
}
