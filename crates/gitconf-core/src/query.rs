//! Reading one key from one config file

use std::path::Path;

use git2::{Config, ErrorCode};
use gitconf_fs::{PathKind, path_exists};
use ini::Ini;

use crate::{ConfigKey, Error, Result};

/// Read `key` from the config file at `path`.
///
/// Returns `Ok(None)` when the file has no such key and `Ok(Some(value))`
/// when it does, even if the value is empty. An empty or missing `path` is an
/// error, as is a file that cannot be parsed.
///
/// Keys with a section go through libgit2. Bare names live in the top-level
/// section before any `[header]`, which libgit2 cannot address, so those are
/// read with a plain INI parser.
pub fn query_file(key: &ConfigKey, path: &Path) -> Result<Option<String>> {
    if path.as_os_str().is_empty() || !path_exists(path, PathKind::File) {
        return Err(Error::MissingFile {
            path: path.to_path_buf(),
        });
    }

    if !key.has_section() {
        return query_top_level(key, path);
    }

    let config = Config::open(path).map_err(|source| Error::Load {
        path: path.to_path_buf(),
        source,
    })?;

    match config.get_string(&key.to_string()) {
        Ok(value) => {
            tracing::debug!(%key, path = %path.display(), "Read config value");
            Ok(Some(value))
        }
        Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
        Err(e) if e.code() == ErrorCode::InvalidSpec => Err(Error::InvalidKey {
            key: key.to_string(),
            reason: e.message().to_string(),
        }),
        Err(source) => Err(Error::Load {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn query_top_level(key: &ConfigKey, path: &Path) -> Result<Option<String>> {
    let document = Ini::load_from_file(path).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        format: "INI".into(),
        message: e.to_string(),
    })?;

    let value = document.general_section().get(key.name()).map(str::to_string);
    tracing::debug!(%key, path = %path.display(), found = value.is_some(), "Read top-level value");
    Ok(value)
}
