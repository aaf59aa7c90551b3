//! Configuration key parsing

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// A key in `section.name` or bare `name` form.
///
/// The key is split on the first `.` only, so `remote.origin.url` has section
/// `remote` and name `origin.url`. Interpreting anything past the first dot
/// is left to the config parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigKey {
    section: String,
    name: String,
}

impl ConfigKey {
    pub fn parse(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(Error::InvalidKey {
                key: key.to_string(),
                reason: "key is empty".into(),
            });
        }

        let (section, name) = match key.split_once('.') {
            Some((section, name)) => (section, name),
            None => ("", key),
        };

        if name.is_empty() {
            return Err(Error::InvalidKey {
                key: key.to_string(),
                reason: "missing name after section".into(),
            });
        }

        Ok(Self {
            section: section.to_string(),
            name: name.to_string(),
        })
    }

    /// The section, empty for a bare name.
    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the key names a section at all.
    pub fn has_section(&self) -> bool {
        !self.section.is_empty()
    }
}

impl FromStr for ConfigKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.section.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}.{}", self.section, self.name)
        }
    }
}
