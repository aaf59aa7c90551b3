//! Command implementations

mod get;
mod paths;

pub use get::run_get;
pub use paths::run_paths;
