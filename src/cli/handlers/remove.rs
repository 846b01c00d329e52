//! Remove command handler.

use anyhow::Result;
use std::path::Path;

use super::{apply_view, explain, open_controller, resolve_note};
use crate::cli::RemoveArgs;

pub fn handle_remove(args: &RemoveArgs, data_dir: &Path) -> Result<()> {
    let mut controller = open_controller(data_dir)?;
    apply_view(&mut controller, &args.view)?;

    let id = resolve_note(&controller, &args.note)?;
    let note = controller.delete(id).map_err(explain)?;

    println!("Deleted: {}", note);
    Ok(())
}
