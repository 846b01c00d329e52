//! Theme command handler.

use anyhow::Result;
use std::path::Path;

use super::{explain, open_controller};
use crate::cli::{ThemeAction, ThemeArgs};
use crate::domain::Theme;

pub fn handle_theme(args: &ThemeArgs, data_dir: &Path) -> Result<()> {
    let mut controller = open_controller(data_dir)?;
    let store = controller.store_mut();

    let theme = match args.action {
        ThemeAction::Show => store.theme().map_err(explain)?,
        ThemeAction::Toggle => store.toggle_theme().map_err(explain)?,
        ThemeAction::Dark => {
            store.set_theme(Theme::Dark).map_err(explain)?;
            Theme::Dark
        }
        ThemeAction::Light => {
            store.set_theme(Theme::Light).map_err(explain)?;
            Theme::Light
        }
    };

    println!("{}", theme);
    Ok(())
}
