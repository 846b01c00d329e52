//! CLI command definitions and handlers

pub mod config;
pub mod console;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// pinnotes - short notes with categories, pinning and search
#[derive(Parser, Debug)]
#[command(name = "pinnotes", version, about, long_about = None)]
pub struct Cli {
    /// Data directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new note
    Add(AddArgs),

    /// List notes, optionally filtered by category and search text
    #[command(name = "ls")]
    List(ListArgs),

    /// Edit a note's title, description, category or pin
    Edit(EditArgs),

    /// Delete a note
    #[command(name = "rm")]
    Remove(RemoveArgs),

    /// Pin a note so it sorts first
    Pin(PinArgs),

    /// Unpin a note
    Unpin(PinArgs),

    /// List categories in use
    Categories(CategoriesArgs),

    /// Show or change the display theme
    Theme(ThemeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Note title
    pub title: String,

    /// Description
    #[arg(short = 'D', long)]
    pub desc: Option<String>,

    /// Category (defaults to the configured default category)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Pin the note
    #[arg(short, long)]
    pub pin: bool,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Category tab to show ("all" for every note)
    #[arg(short, long, default_value = "all")]
    pub category: String,

    /// Case-insensitive text to search for
    #[arg(short, long)]
    pub search: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Selects the view a positional note reference is counted in.
#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Category tab the position refers to
    #[arg(id = "view_category", long = "in", value_name = "CATEGORY", default_value = "all")]
    pub category: String,

    /// Search text the position refers to
    #[arg(long)]
    pub search: Option<String>,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Position shown by `ls` (1-based) or note ID prefix
    pub note: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New description
    #[arg(short = 'D', long)]
    pub desc: Option<String>,

    /// New category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Pin the note
    #[arg(long, conflicts_with = "unpin")]
    pub pin: bool,

    /// Unpin the note
    #[arg(long)]
    pub unpin: bool,

    #[command(flatten)]
    pub view: ViewArgs,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Position shown by `ls` (1-based) or note ID prefix
    pub note: String,

    #[command(flatten)]
    pub view: ViewArgs,
}

/// Arguments for the `pin` and `unpin` commands
#[derive(Parser, Debug)]
pub struct PinArgs {
    /// Position shown by `ls` (1-based) or note ID prefix
    pub note: String,

    #[command(flatten)]
    pub view: ViewArgs,
}

/// Arguments for the `categories` command
#[derive(Parser, Debug)]
pub struct CategoriesArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// What the `theme` command does
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ThemeAction {
    /// Print the current theme
    #[default]
    Show,
    /// Switch between dark and light
    Toggle,
    /// Use the dark theme
    Dark,
    /// Use the light theme
    Light,
}

/// Arguments for the `theme` command
#[derive(Parser, Debug)]
pub struct ThemeArgs {
    #[arg(value_enum, default_value_t = ThemeAction::Show)]
    pub action: ThemeAction,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
