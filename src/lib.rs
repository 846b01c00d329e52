//! pinnotes - short notes with categories, pinning and search

pub mod cli;
pub mod domain;
pub mod store;
pub mod view;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add, handle_categories, handle_completions, handle_edit, handle_list, handle_pin,
        handle_remove, handle_theme,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        return handle_completions(args);
    }

    let config = Config::load()?;
    let data_dir = config.data_dir(cli.dir.as_ref());

    match &cli.command {
        Command::Add(args) => handle_add(args, &data_dir, &config),
        Command::List(args) => handle_list(args, &data_dir),
        Command::Edit(args) => handle_edit(args, &data_dir),
        Command::Remove(args) => handle_remove(args, &data_dir),
        Command::Pin(args) => handle_pin(args, &data_dir, true),
        Command::Unpin(args) => handle_pin(args, &data_dir, false),
        Command::Categories(args) => handle_categories(args, &data_dir),
        Command::Theme(args) => handle_theme(args, &data_dir),
        Command::Completions(args) => handle_completions(args),
    }
}

/// Sends library logs to stderr. `RUST_LOG` overrides the `-v` count.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pinnotes={level}")));

    // A subscriber may already be installed when run() is embedded.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
