//! Stable ULID identifier assigned to every note at creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

/// Number of characters shown when a note id is displayed in short form.
const PREFIX_LEN: usize = 10;

/// A unique, stable identifier for a note.
///
/// Ids never change after creation, so they stay valid across re-sorts,
/// deletes of other notes, and filtered views. Positions do not.
///
/// # Examples
///
/// ```
/// use pinnotes::domain::NoteId;
///
/// let id = NoteId::new();
/// assert_eq!(id.prefix().len(), 10);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteId(Ulid);

impl NoteId {
    /// Creates a new NoteId with the current timestamp.
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Derives the id of a stored record that was saved without one.
    ///
    /// The time component is `created_at` and the random component is the
    /// record's `index` in the stored collection, so the same stored data
    /// always yields the same ids.
    pub fn for_record(created_at: DateTime<Utc>, index: usize) -> Self {
        let millis = u64::try_from(created_at.timestamp_millis()).unwrap_or(0);
        Self(Ulid::from_parts(millis, index as u128))
    }

    /// Returns the short form shown next to notes in listings.
    pub fn prefix(&self) -> String {
        self.0.to_string()[..PREFIX_LEN].to_string()
    }

    /// Returns true if `prefix` is a case-insensitive prefix of this id.
    ///
    /// An empty prefix never matches.
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        let prefix = prefix.trim();
        !prefix.is_empty()
            && self
                .0
                .to_string()
                .get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId(\"{}\")", self.0)
    }
}

/// Error returned when parsing an invalid note id.
#[derive(Debug, Clone)]
pub struct ParseNoteIdError {
    value: String,
    reason: String,
}

impl ParseNoteIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note id '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ulid::from_string(s.trim())
            .map(NoteId)
            .map_err(|e| ParseNoteIdError {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl Serialize for NoteId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
