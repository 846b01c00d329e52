//! List command handler.

use anyhow::{Context, Result};
use std::io;
use std::path::Path;

use super::open_controller;
use crate::cli::ListArgs;
use crate::cli::console::ConsoleRenderer;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::domain::CategoryFilter;

pub fn handle_list(args: &ListArgs, data_dir: &Path) -> Result<()> {
    let mut controller = open_controller(data_dir)?;

    let filter: CategoryFilter = args
        .category
        .parse()
        .with_context(|| format!("invalid category: {}", args.category))?;
    controller.set_category_filter(filter);

    if let Some(query) = &args.search {
        controller.set_search_query(query.as_str());
    }

    match args.format {
        OutputFormat::Human => {
            let mut renderer = ConsoleRenderer::new(io::stdout().lock());
            controller.render(&mut renderer);
            renderer.finish().context("failed to write listing")?;
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = controller
                .current_view()
                .into_iter()
                .enumerate()
                .map(|(index, note)| NoteListing {
                    position: index + 1,
                    note,
                })
                .collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
