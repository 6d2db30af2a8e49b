//! Error types for the parameter tree and its typed accessors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by tree lookups, typed access, merging and ingestion.
///
/// The audit ledger never produces one of these; mismatched defaults are
/// reported on request only.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("key '{0}' is missing and no default value was provided")]
    MissingKey(String),

    #[error("key '{key}' already exists and no overwrite was requested")]
    DuplicateKey { key: String },

    #[error("sub '{0}' is missing")]
    MissingSub(String),

    #[error("cannot read '{raw}' as {target}: {reason}")]
    ParseError {
        raw: String,
        target: &'static str,
        reason: String,
    },

    #[error("invalid value for '{key}': {diagnostic}")]
    ValidationError { key: String, diagnostic: String },

    #[error("shape mismatch: expected {expected} entries, found {found}")]
    ShapeMismatch { expected: usize, found: usize },

    #[error("Vectors have to be of the form '[entry_0; entry_1; ... ]!'")]
    MalformedVectorLiteral { literal: String },

    #[error("invalid key path: '{0}'")]
    InvalidKey(String),

    #[error("'{path}' is used both as a value key and as a sub")]
    PathConflict { path: String },

    #[error("invalid command line argument: '{0}'")]
    InvalidArgument(String),

    #[error("failed to read parameter file {path:?}: {source}")]
    Source {
        path: PathBuf,
        #[source]
        source: config::ConfigError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("logging setup failed: {0}")]
    Logging(String),
}

impl ConfigError {
    pub(crate) fn parse(raw: &str, target: &'static str, reason: impl ToString) -> Self {
        ConfigError::ParseError {
            raw: raw.to_string(),
            target,
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
