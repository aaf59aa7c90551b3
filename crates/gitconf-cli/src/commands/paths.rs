//! The `paths` command

use std::path::Path;

use colored::Colorize;
use gitconf_core::ConfigResolver;

use crate::error::Result;

/// Print the config file each level resolves to.
pub fn run_paths(resolver: &ConfigResolver, start: Option<&Path>, json: bool) -> Result<()> {
    let files = resolver.candidate_files(start)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&files)?);
        return Ok(());
    }

    for file in files {
        let level = format!("{:<6}", file.level);
        match (&file.path, &file.reason) {
            (Some(path), _) => println!("{} {}", level.green().bold(), path.display()),
            (None, Some(reason)) => println!("{} {}", level.yellow().bold(), reason.dimmed()),
            (None, None) => println!("{} {}", level.yellow().bold(), "(no file)".dimmed()),
        }
    }
    Ok(())
}
