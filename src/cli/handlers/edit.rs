//! Edit, pin and unpin command handlers.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::{apply_view, explain, open_controller, resolve_note};
use crate::cli::{EditArgs, PinArgs};
use crate::domain::{Category, Note, NoteDraft};

/// Applies the changes requested by `args` on top of the note's current fields.
///
/// # Errors
///
/// Returns an error if nothing would change or the new category is invalid.
pub(crate) fn apply_edits(note: &Note, args: &EditArgs) -> Result<NoteDraft> {
    if args.title.is_none()
        && args.desc.is_none()
        && args.category.is_none()
        && !args.pin
        && !args.unpin
    {
        bail!("nothing to change: pass --title, --desc, --category, --pin or --unpin");
    }

    let mut draft = note.to_draft();

    if let Some(title) = &args.title {
        draft = draft.with_title(title.as_str());
    }
    if let Some(desc) = &args.desc {
        draft = draft.description(desc.as_str());
    }
    if let Some(label) = &args.category {
        let category =
            Category::new(label).with_context(|| format!("invalid category: {}", label))?;
        draft = draft.category(category);
    }
    if args.pin {
        draft = draft.pinned(true);
    } else if args.unpin {
        draft = draft.pinned(false);
    }

    Ok(draft)
}

pub fn handle_edit(args: &EditArgs, data_dir: &Path) -> Result<()> {
    let mut controller = open_controller(data_dir)?;
    apply_view(&mut controller, &args.view)?;

    let id = resolve_note(&controller, &args.note)?;
    let current = controller.store().note(id).cloned().map_err(explain)?;

    let draft = apply_edits(&current, args)?;
    let note = controller.update(id, draft).map_err(explain)?;

    println!("Updated: {}", note);
    Ok(())
}

pub fn handle_pin(args: &PinArgs, data_dir: &Path, pinned: bool) -> Result<()> {
    let mut controller = open_controller(data_dir)?;
    apply_view(&mut controller, &args.view)?;

    let id = resolve_note(&controller, &args.note)?;
    let note = controller.set_pinned(id, pinned).map_err(explain)?;

    if pinned {
        println!("Pinned: {}", note);
    } else {
        println!("Unpinned: {}", note);
    }
    Ok(())
}
