//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use gitconf_core::ConfigLevel;

/// gitconf - Read git configuration values without the git binary
#[derive(Parser, Debug)]
#[command(name = "gitconf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Start the repository search here instead of the current directory
    #[arg(short = 'C', long = "start", global = true, value_name = "PATH")]
    pub start: Option<PathBuf>,

    /// Machine-wide config file (the system level is unsupported without it)
    #[arg(long, global = true, env = "GITCONF_SYSTEM_FILE", value_name = "PATH")]
    pub system_file: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the value of a key
    ///
    /// Without a level flag, the local, global and system files are
    /// searched in that order and the first non-empty value is printed.
    ///
    /// Examples:
    ///   gitconf get user.email            # First level that sets it
    ///   gitconf get --global user.name    # Only the user's config
    ///   gitconf get --show-origin core.editor
    Get {
        /// Key in section.name form
        key: String,

        #[command(flatten)]
        level: LevelArgs,

        /// Also print the file the value came from
        #[arg(long)]
        show_origin: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show which config file each level resolves to
    Paths {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

/// Mutually exclusive level selection
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
#[group(multiple = false)]
pub struct LevelArgs {
    /// Read only the repository's .git/config
    #[arg(long)]
    pub local: bool,

    /// Read only the user's config
    #[arg(long)]
    pub global: bool,

    /// Read only the machine-wide config
    #[arg(long)]
    pub system: bool,
}

impl LevelArgs {
    /// The selected level, `None` to search all levels.
    pub fn level(&self) -> Option<ConfigLevel> {
        if self.local {
            Some(ConfigLevel::Local)
        } else if self.global {
            Some(ConfigLevel::Global)
        } else if self.system {
            Some(ConfigLevel::System)
        } else {
            None
        }
    }
}
