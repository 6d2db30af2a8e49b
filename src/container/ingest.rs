//! Ingestion: parameter files and command-line arguments.
//!
//! Files are parsed by the `config` crate and flattened into dotted keys.
//! Arguments are `--key=value`, `-key=value`, `key=value` or `--key value`
//! tokens. A `paramfile` key names a file whose values fill in whatever the
//! arguments did not set.

use crate::codec::Encode;
use crate::container::{ConfigContainer, ContainerOptions};
use crate::error::{ConfigError, Result};
use crate::tree::{path, TreeNode};
use config::{File, FileFormat, Map, Source, Value, ValueKind};
use std::path::Path;
use tracing::{debug, info};

/// Key naming a parameter file to load after the arguments.
pub const PARAMFILE_KEY: &str = "paramfile";

impl ConfigContainer {
    /// Read a parameter file. The format follows the extension: `toml`,
    /// `json`, `yaml`/`yml`, anything else is INI.
    pub fn from_file(path: impl AsRef<Path>, options: ContainerOptions) -> Result<Self> {
        let tree = read_tree(path.as_ref())?;
        Ok(Self::from_tree(tree, options))
    }

    /// Build a container from command-line tokens (without the program name).
    pub fn from_args<S: AsRef<str>>(args: &[S], options: ContainerOptions) -> Result<Self> {
        let mut container = Self::with_options(options);
        container.read_options(args)?;
        Ok(container)
    }

    /// Like [`ConfigContainer::from_args`], with a file fallback: without
    /// arguments `fallback` is read, a single bare argument names the file
    /// to read.
    pub fn from_args_or_file<S: AsRef<str>>(
        args: &[S],
        fallback: impl AsRef<Path>,
        options: ContainerOptions,
    ) -> Result<Self> {
        match args {
            [] => Self::from_file(fallback, options),
            [single] if !is_option_token(single.as_ref()) => Self::from_file(single.as_ref(), options),
            _ => Self::from_args(args, options),
        }
    }

    /// Add the `key=value` pairs found in `args`, overwriting existing keys.
    /// A `paramfile` entry is then loaded without overwriting anything.
    pub fn read_options<S: AsRef<str>>(&mut self, args: &[S]) -> Result<()> {
        for (key, value) in parse_args(args)? {
            self.tree_mut().set_raw(&key, value, true)?;
        }

        if let Some(file) = self.get_raw(PARAMFILE_KEY).map(str::to_string) {
            let tree = read_tree(Path::new(&file))?;
            let added = self.tree_mut().fill_missing(&tree);
            info!(paramfile = %file, added, "Loaded parameter file");
        }
        Ok(())
    }
}

fn is_option_token(token: &str) -> bool {
    token.starts_with('-') || token.contains('=')
}

/// Pair up command-line tokens.
fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    let mut tokens = args.iter().map(|arg| arg.as_ref());
    while let Some(token) = tokens.next() {
        let stripped = token.trim_start_matches('-');
        if let Some((key, value)) = stripped.split_once('=') {
            pairs.push((checked_key(key, token)?, value.trim().to_string()));
            continue;
        }
        if stripped.len() == token.len() {
            return Err(ConfigError::InvalidArgument(token.to_string()));
        }
        let value = tokens
            .next()
            .ok_or_else(|| ConfigError::InvalidArgument(token.to_string()))?;
        pairs.push((checked_key(stripped, token)?, value.to_string()));
    }
    Ok(pairs)
}

fn checked_key(key: &str, token: &str) -> Result<String> {
    let key = key.trim();
    path::split(key).map_err(|_| ConfigError::InvalidArgument(token.to_string()))?;
    Ok(key.to_string())
}

fn format_for(path: &Path) -> FileFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => FileFormat::Toml,
        Some("json") => FileFormat::Json,
        Some("yaml") | Some("yml") => FileFormat::Yaml,
        _ => FileFormat::Ini,
    }
}

/// Parse `path` into a tree.
pub(crate) fn read_tree(path: &Path) -> Result<TreeNode> {
    let source_error = |source| ConfigError::Source {
        path: path.to_path_buf(),
        source,
    };
    let name = path.to_string_lossy();
    let table = File::new(&name, format_for(path))
        .required(true)
        .collect()
        .map_err(source_error)?;

    let mut tree = TreeNode::new();
    flatten_table(&mut tree, "", table)?;
    debug!(path = %path.display(), values = tree.flatten().len(), "Read parameter file");
    Ok(tree)
}

fn flatten_table(tree: &mut TreeNode, prefix: &str, table: Map<String, Value>) -> Result<()> {
    // sorted so conflicts surface the same way on every run
    let mut entries: Vec<(String, Value)> = table.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    for (key, value) in entries {
        let full = path::join(prefix, &key);
        match value.kind {
            ValueKind::Table(sub) => flatten_table(tree, &full, sub)?,
            ValueKind::Nil => {}
            kind => tree.set_raw(&full, encode_kind(kind), true)?,
        }
    }
    Ok(())
}

fn encode_kind(kind: ValueKind) -> String {
    match kind {
        ValueKind::String(s) => s,
        ValueKind::Array(items) => {
            let entries: Vec<String> = items.into_iter().map(|v| encode_kind(v.kind)).collect();
            entries.encode()
        }
        ValueKind::Nil => String::new(),
        other => other.to_string(),
    }
}
