//! Requests: one record per lookup of a key with a default value.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Where a lookup was written down in the source, and the text of the
/// validator expression used there. Filled in by the [`param!`] macro.
///
/// [`param!`]: crate::param
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub validator: &'static str,
}

/// A recorded lookup: which key was asked for, with which default, from
/// where, and under which validator.
///
/// The derived total order compares `(key, default, file, line, validator)`
/// in that order and decides ledger deduplication. [`Request::strict_cmp`]
/// only looks at `(key, default)` and decides whether two lookups disagree.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Request {
    key: String,
    default: String,
    file: String,
    line: Option<u32>,
    validator: String,
}

impl Request {
    /// A request without call-site information.
    pub fn new(
        key: impl Into<String>,
        default: impl Into<String>,
        validator: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            default: default.into(),
            file: String::new(),
            line: None,
            validator: validator.into(),
        }
    }

    /// Stamp the call site.
    pub fn at(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = file.into();
        self.line = Some(line);
        self
    }

    /// A request stamped with `site`, which also names the validator.
    pub fn from_site(key: impl Into<String>, default: impl Into<String>, site: CallSite) -> Self {
        Self::new(key, default, site.validator).at(site.file, site.line)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The default value in its encoded form.
    pub fn default_value(&self) -> &str {
        &self.default
    }

    /// Source file of the call site, empty for programmatic lookups.
    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> Option<u32> {
        self.line
    }

    pub fn validator(&self) -> &str {
        &self.validator
    }

    /// Compare only key and default.
    pub fn strict_cmp(&self, other: &Request) -> Ordering {
        (self.key.as_str(), self.default.as_str()).cmp(&(other.key.as_str(), other.default.as_str()))
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -- default: '{}' -- validator: {}",
            self.key, self.default, self.validator
        )?;
        match self.line {
            Some(line) => write!(f, " -- {}:{}", self.file, line),
            None => f.write_str(" -- <unknown location>"),
        }
    }
}
