//! Git configuration lookup without the git binary
//!
//! Reads configuration files directly and resolves a key at one level
//! (local, global or system) or across all of them in precedence order.

pub mod error;
pub mod key;
pub mod level;
pub mod paths;
pub mod query;
pub mod request;
pub mod resolver;

pub use error::{Error, Result};
pub use gitconf_fs::ConfigDirs;
pub use key::ConfigKey;
pub use level::ConfigLevel;
pub use paths::{LevelFile, PathResolver};
pub use query::query_file;
pub use request::LookupRequest;
pub use resolver::{ConfigResolver, ResolvedValue};

/// Resolve `request` using config directories read from the environment.
pub fn get_value(request: &LookupRequest) -> Result<String> {
    ConfigResolver::from_env().resolve(request)
}
