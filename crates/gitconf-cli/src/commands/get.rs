//! The `get` command

use std::path::Path;

use gitconf_core::{ConfigLevel, ConfigResolver, LookupRequest};

use crate::error::Result;

/// Resolve `key` and print its value.
pub fn run_get(
    resolver: &ConfigResolver,
    start: Option<&Path>,
    key: &str,
    level: Option<ConfigLevel>,
    show_origin: bool,
    json: bool,
) -> Result<()> {
    let mut request = LookupRequest::new(key)?;
    if let Some(start) = start {
        request = request.start_at(start);
    }
    if let Some(level) = level {
        request = request.level(level);
    }

    let resolved = resolver.lookup(&request)?;
    tracing::debug!(level = %resolved.level, path = %resolved.path.display(), "Resolved value");

    if json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else if show_origin {
        println!("file:{}\t{}", resolved.path.display(), resolved.value);
    } else {
        println!("{}", resolved.value);
    }
    Ok(())
}
