//! Command handlers for the CLI.

mod add;
mod categories;
mod completions;
mod edit;
mod list;
mod remove;
mod resolve;
mod theme;

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::ViewArgs;
use crate::domain::CategoryFilter;
use crate::store::{FileStorage, NoteError, NoteStore};
use crate::view::ViewController;

// Re-export public items
pub use add::handle_add;
pub use categories::handle_categories;
pub use completions::handle_completions;
pub use edit::{handle_edit, handle_pin};
pub use list::handle_list;
pub use remove::handle_remove;
pub use resolve::{ResolveResult, resolve_note};
pub use theme::handle_theme;

// ===========================================
// Shared Utilities
// ===========================================

/// Controller over the file-backed store in `data_dir`.
pub type FileController = ViewController<FileStorage>;

/// Opens the note store in `data_dir` and wraps it in a view controller.
pub(crate) fn open_controller(data_dir: &Path) -> Result<FileController> {
    let storage = FileStorage::open(data_dir)
        .with_context(|| format!("failed to open data directory {}", data_dir.display()))?;
    let store = NoteStore::open(storage)
        .with_context(|| format!("failed to load notes from {}", data_dir.display()))?;
    Ok(ViewController::new(store))
}

/// Applies `--in` and `--search` to the controller.
pub(crate) fn apply_view(controller: &mut FileController, args: &ViewArgs) -> Result<()> {
    let filter: CategoryFilter = args
        .category
        .parse()
        .with_context(|| format!("invalid category: {}", args.category))?;
    controller.set_category_filter(filter);

    if let Some(query) = &args.search {
        controller.set_search_query(query.as_str());
    }
    Ok(())
}

/// Converts a store error, telling the user when a retry is worthwhile.
pub(crate) fn explain(err: NoteError) -> anyhow::Error {
    match err {
        NoteError::Storage(_) => anyhow::Error::new(err)
            .context("could not save notes; nothing was changed, retry the command"),
        other => other.into(),
    }
}
