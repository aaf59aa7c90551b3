//! gitconf CLI
//!
//! Reads git configuration values straight from the config files.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use gitconf_core::{ConfigDirs, ConfigResolver};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Verbose mode enabled");
        }
    }

    let mut dirs = ConfigDirs::from_env();
    if let Some(system_file) = cli.system_file {
        dirs = dirs.system_file(system_file);
    }
    let resolver = ConfigResolver::new(dirs);

    match cli.command {
        Commands::Get {
            key,
            level,
            show_origin,
            json,
        } => commands::run_get(
            &resolver,
            cli.start.as_deref(),
            &key,
            level.level(),
            show_origin,
            json,
        ),
        Commands::Paths { json } => commands::run_paths(&resolver, cli.start.as_deref(), json),
    }
}
