//! Builder for test notes with sensible defaults.

use chrono::{DateTime, Duration, Utc};
use pinnotes::domain::{Category, NoteDraft};

/// Builder for creating test notes with sensible defaults.
///
/// Defaults to an unpinned note in the `personal` category created now.
#[derive(Debug, Clone)]
pub struct TestNote {
    title: String,
    description: String,
    category: String,
    pinned: bool,
    created: DateTime<Utc>,
}

impl TestNote {
    /// Creates a new test note with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            category: "personal".to_string(),
            pinned: false,
            created: Utc::now(),
        }
    }

    /// Sets the description.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Sets the category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Marks the note as pinned.
    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }

    /// Sets the creation time to `minutes` after a fixed base time.
    pub fn created_minutes(mut self, minutes: i64) -> Self {
        let base = DateTime::parse_from_rfc3339("2024-03-01T09:00:00Z")
            .expect("valid base time")
            .with_timezone(&Utc);
        self.created = base + Duration::minutes(minutes);
        self
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the creation time.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Converts this TestNote to a draft.
    pub fn to_draft(&self) -> NoteDraft {
        let category = Category::new(&self.category).expect("Invalid category");
        NoteDraft::new(&self.title, category)
            .description(&self.description)
            .pinned(self.pinned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_defaults() {
        let draft = TestNote::new("Test").to_draft();
        assert_eq!(draft.title(), "Test");
        assert!(!draft.is_pinned());
    }

    #[test]
    fn test_note_builder_fluent() {
        let note = TestNote::new("Deploy")
            .category("work")
            .description("ship it")
            .pinned()
            .created_minutes(5);

        assert_eq!(note.title(), "Deploy");
        assert!(note.to_draft().is_pinned());
        assert_eq!(
            note.created().to_rfc3339(),
            "2024-03-01T09:05:00+00:00"
        );
    }
}
