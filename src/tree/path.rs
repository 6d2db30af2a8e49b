//! Dotted key paths: splitting, validation and joining.

use crate::error::{ConfigError, Result};

/// Split a dotted path into its segments.
///
/// Surrounding whitespace of every segment is dropped. Empty paths and empty
/// segments (`"a..b"`, `".a"`, `"a."`) are rejected.
pub fn split(path: &str) -> Result<Vec<&str>> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidKey(path.to_string()));
    }
    trimmed
        .split('.')
        .map(|segment| {
            let segment = segment.trim();
            if segment.is_empty() {
                Err(ConfigError::InvalidKey(path.to_string()))
            } else {
                Ok(segment)
            }
        })
        .collect()
}

/// Split a path into its parent segments and the final local name.
pub fn split_last(path: &str) -> Result<(Vec<&str>, &str)> {
    let mut segments = split(path)?;
    // split() never returns an empty vector
    let last = segments.pop().ok_or_else(|| ConfigError::InvalidKey(path.to_string()))?;
    Ok((segments, last))
}

/// Join a parent path and a local name with a dot, skipping an empty parent.
pub fn join(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}
