//! Snapshot handed to renderers.

use crate::domain::{Category, CategoryFilter, Note};

/// Everything a renderer needs to draw one frame.
///
/// Positions used by edit and delete triggers are indexes into `notes`.
#[derive(Debug, Clone)]
pub struct View<'a> {
    pub filter: &'a CategoryFilter,
    pub query: &'a str,
    pub notes: Vec<&'a Note>,
    pub categories: Vec<(Category, usize)>,
}

impl View<'_> {
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Message shown in place of cards when the view is empty.
    pub fn empty_message(&self) -> String {
        match self.filter.category() {
            None => "No notes".to_string(),
            Some(category) => format!("No notes in {} category", category),
        }
    }
}

/// Draws a [`View`]. Implementations hold no note state of their own.
pub trait Renderer {
    fn render(&mut self, view: &View<'_>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_message_mentions_category() {
        let all = CategoryFilter::All;
        let work: CategoryFilter = "work".parse().unwrap();

        let view = View {
            filter: &all,
            query: "",
            notes: Vec::new(),
            categories: Vec::new(),
        };
        assert!(view.is_empty());
        assert_eq!(view.empty_message(), "No notes");

        let view = View {
            filter: &work,
            ..view
        };
        assert_eq!(view.empty_message(), "No notes in work category");
    }
}
