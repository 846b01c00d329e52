//! Note reference resolution.

use anyhow::{Result, bail};

use crate::domain::{Note, NoteId};
use crate::store::KeyValueStore;
use crate::view::ViewController;

/// Result of resolving an ID prefix.
#[derive(Debug)]
pub enum ResolveResult {
    /// Exactly one note matched.
    Unique(NoteId),
    /// Multiple notes matched (ambiguous).
    Ambiguous(Vec<Note>),
    /// No notes matched.
    NotFound,
}

/// Finds the notes whose ID starts with `prefix`.
pub(crate) fn resolve_prefix<S: KeyValueStore>(
    controller: &ViewController<S>,
    prefix: &str,
) -> ResolveResult {
    let mut matches: Vec<Note> = controller
        .store()
        .list()
        .iter()
        .filter(|n| n.id().matches_prefix(prefix))
        .cloned()
        .collect();

    match matches.len() {
        0 => ResolveResult::NotFound,
        1 => ResolveResult::Unique(matches.remove(0).id()),
        _ => ResolveResult::Ambiguous(matches),
    }
}

/// Resolves a user-supplied note reference to a note id.
///
/// Resolution order:
/// 1. A bare number is a 1-based position in the controller's current view
/// 2. Anything else is an ID prefix over all notes
///
/// An all-digit ID prefix is therefore read as a position. Displayed prefixes
/// include letters, so a longer prefix always selects by id.
pub fn resolve_note<S: KeyValueStore>(
    controller: &ViewController<S>,
    reference: &str,
) -> Result<NoteId> {
    let reference = reference.trim();

    if let Ok(position) = reference.parse::<usize>() {
        if position == 0 {
            bail!("positions start at 1");
        }
        return controller.resolve_identity(position - 1).map_err(|_| {
            anyhow::anyhow!(
                "no note at position {} in this view; to select by id, use a prefix that includes a letter",
                position
            )
        });
    }

    match resolve_prefix(controller, reference) {
        ResolveResult::Unique(id) => Ok(id),
        ResolveResult::NotFound => bail!("no note matches '{}'", reference),
        ResolveResult::Ambiguous(notes) => {
            let candidates: Vec<String> = notes.iter().map(|n| n.to_string()).collect();
            bail!(
                "'{}' matches {} notes: {}; use a longer ID prefix",
                reference,
                notes.len(),
                candidates.join(", ")
            )
        }
    }
}
