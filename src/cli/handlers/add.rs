//! Add command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::{explain, open_controller};
use crate::cli::AddArgs;
use crate::cli::config::Config;
use crate::domain::{Category, NoteDraft};

/// Builds the draft for a new note from command arguments.
///
/// # Errors
///
/// Returns an error if the title is empty or the category is invalid.
pub(crate) fn draft_from_args(args: &AddArgs, config: &Config) -> Result<NoteDraft> {
    let label = args
        .category
        .as_deref()
        .unwrap_or_else(|| config.default_category());
    let category =
        Category::new(label).with_context(|| format!("invalid category: {}", label))?;

    let draft = NoteDraft::new(args.title.as_str(), category)
        .description(args.desc.clone().unwrap_or_default())
        .pinned(args.pin);
    draft.validate()?;
    Ok(draft)
}

pub fn handle_add(args: &AddArgs, data_dir: &Path, config: &Config) -> Result<()> {
    // Validate before touching storage
    let draft = draft_from_args(args, config)?;

    let mut controller = open_controller(data_dir)?;
    let note = controller.create(draft).map_err(explain)?;

    println!("Created: {}", note);
    Ok(())
}
