//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::Note;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single note in listing output.
///
/// `position` is the 1-based index accepted by `edit`, `rm`, `pin` and `unpin`
/// for the same view.
#[derive(Debug, Serialize)]
pub struct NoteListing<'a> {
    pub position: usize,
    #[serde(flatten)]
    pub note: &'a Note,
}

/// A category with its note count.
#[derive(Debug, Serialize)]
pub struct CategoryListing {
    pub name: String,
    pub count: usize,
}
