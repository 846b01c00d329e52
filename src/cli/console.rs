//! Terminal renderer for note views.

use std::io::{self, Write};

use crate::domain::{ALL_CATEGORIES, Note, PINNED_BADGE};
use crate::view::{Renderer, View};

/// Writes a view as a tab bar followed by numbered note cards.
///
/// The first write error is kept and returned by [`ConsoleRenderer::finish`].
pub struct ConsoleRenderer<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Returns the writer, or the first error hit while rendering.
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.out),
        }
    }

    fn write_view(&mut self, view: &View<'_>) -> io::Result<()> {
        self.write_tabs(view)?;

        if !view.query.is_empty() {
            writeln!(self.out, "Search: \"{}\"", view.query)?;
        }
        writeln!(self.out)?;

        if view.is_empty() {
            writeln!(self.out, "{}", view.empty_message())?;
            return Ok(());
        }

        for (index, note) in view.notes.iter().enumerate() {
            self.write_card(index + 1, note)?;
        }

        writeln!(self.out, "{} note(s)", view.notes.len())
    }

    /// The active tab is bracketed; every other tab is plain.
    fn write_tabs(&mut self, view: &View<'_>) -> io::Result<()> {
        let total: usize = view.categories.iter().map(|(_, n)| n).sum();
        let active = view.filter.category();

        let mut tabs = vec![tab(ALL_CATEGORIES, total, active.is_none())];
        for (category, count) in &view.categories {
            tabs.push(tab(category.as_str(), *count, active == Some(category)));
        }

        writeln!(self.out, "{}", tabs.join("  "))
    }

    fn write_card(&mut self, position: usize, note: &Note) -> io::Result<()> {
        if note.is_pinned() {
            writeln!(self.out, "{:>3}. {}  ({})", position, note.title(), PINNED_BADGE)?;
        } else {
            writeln!(self.out, "{:>3}. {}", position, note.title())?;
        }

        for line in note.description().lines() {
            writeln!(self.out, "     {}", line)?;
        }

        writeln!(
            self.out,
            "     #{}  {}  {}",
            note.category(),
            note.id().prefix(),
            note.created_at().format("%Y-%m-%d %H:%M")
        )?;
        writeln!(self.out)
    }
}

fn tab(label: &str, count: usize, active: bool) -> String {
    if active {
        format!("[{} ({})]", label, count)
    } else {
        format!("{} ({})", label, count)
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render(&mut self, view: &View<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.write_view(view) {
            self.error = Some(err);
        }
    }
}
