//! Categories command handler.

use anyhow::Result;
use std::path::Path;

use super::open_controller;
use crate::cli::CategoriesArgs;
use crate::cli::output::{CategoryListing, Output, OutputFormat};

pub fn handle_categories(args: &CategoriesArgs, data_dir: &Path) -> Result<()> {
    let controller = open_controller(data_dir)?;
    let categories = controller.store().categories();

    match args.format {
        OutputFormat::Human => {
            if categories.is_empty() {
                println!("No categories found.");
            } else {
                for (category, count) in &categories {
                    println!("{:<30}  {:>5}", category.as_str(), count);
                }
            }
        }
        OutputFormat::Json => {
            let listings: Vec<CategoryListing> = categories
                .into_iter()
                .map(|(category, count)| CategoryListing {
                    name: category.as_str().to_string(),
                    count,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
    }

    Ok(())
}
