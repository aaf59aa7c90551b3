//! Configuration levels

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A configuration scope. Narrower scopes take precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigLevel {
    /// `.git/config` of the nearest enclosing repository
    Local,
    /// The user's `git/config` under the XDG base, or `~/.gitconfig`
    Global,
    /// The machine-wide config file
    System,
}

impl ConfigLevel {
    /// Search order when no level is selected.
    pub const PRECEDENCE: [ConfigLevel; 3] = [Self::Local, Self::Global, Self::System];

    /// Map an integer selector to a level.
    ///
    /// `1`, `2` and `3` select local, global and system. Every other value,
    /// including `0` and negatives, selects no level (search all levels).
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Local),
            2 => Some(Self::Global),
            3 => Some(Self::System),
            _ => None,
        }
    }

    /// The integer selector for this level.
    pub fn code(self) -> i64 {
        match self {
            Self::Local => 1,
            Self::Global => 2,
            Self::System => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Global => "global",
            Self::System => "system",
        }
    }
}

impl fmt::Display for ConfigLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ConfigLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "global" => Ok(Self::Global),
            "system" => Ok(Self::System),
            other => Err(format!(
                "unknown config level '{other}' (expected local, global or system)"
            )),
        }
    }
}
