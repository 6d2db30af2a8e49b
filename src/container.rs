//! Config Container
//!
//! A [`ConfigContainer`] owns one parameter tree and the ledger of every
//! lookup made against it. Values go in as strings (from a file, from the
//! command line, or through [`ConfigContainer::set`]) and come out typed
//! through the getters in `access`, which fall back to defaults, run
//! validators and record each request.
//!
//! The tree itself is never handed out by reference: [`ConfigContainer::sub`]
//! returns an independent container, so later mutation on either side is not
//! visible on the other.

mod access;
mod ingest;
mod options;

pub use options::{ContainerOptions, DEFAULT_LOGFILE};

use crate::codec::{is_vector_literal, Encode};
use crate::error::{ConfigError, Result};
use crate::ledger::RequestLedger;
use crate::request::Request;
use crate::tree::TreeNode;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A parameter tree plus its request ledger and policy flags.
#[derive(Debug, Clone, Default)]
pub struct ConfigContainer {
    tree: TreeNode,
    ledger: RequestLedger,
    options: ContainerOptions,
}

impl ConfigContainer {
    /// An empty container with default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ContainerOptions) -> Self {
        Self::from_tree(TreeNode::new(), options)
    }

    /// Wrap a tree handed in by a parser.
    pub fn from_tree(tree: TreeNode, options: ContainerOptions) -> Self {
        Self {
            tree,
            ledger: RequestLedger::new(),
            options,
        }
    }

    /// A container holding the single value `key = value`.
    pub fn with_value<T: Encode + ?Sized>(key: &str, value: &T) -> Result<Self> {
        let mut container = Self::new();
        container.set(key, value, false)?;
        Ok(container)
    }

    /// A container holding `keys[i] = values[i]`.
    ///
    /// Fails with `ShapeMismatch` if the lists differ in length and with
    /// `DuplicateKey` if a key repeats.
    pub fn from_pairs<K, V>(keys: &[K], values: &[V]) -> Result<Self>
    where
        K: AsRef<str>,
        V: Encode,
    {
        if keys.len() != values.len() {
            return Err(ConfigError::ShapeMismatch {
                expected: keys.len(),
                found: values.len(),
            });
        }
        let mut container = Self::new();
        for (key, value) in keys.iter().zip(values) {
            container.set(key.as_ref(), value, false)?;
        }
        Ok(container)
    }

    pub fn options(&self) -> &ContainerOptions {
        &self.options
    }

    pub fn set_record_defaults(&mut self, record: bool) {
        self.options.record_defaults = record;
    }

    pub fn set_warn_on_default_access(&mut self, warn: bool) {
        self.options.warn_on_default_access = warn;
    }

    pub fn set_log_on_exit(&mut self, log: bool) {
        self.options.log_on_exit = log;
    }

    pub fn set_logfile(&mut self, logfile: impl Into<PathBuf>) {
        self.options.logfile = logfile.into();
    }

    /// Read-only view of the tree.
    pub fn tree(&self) -> &TreeNode {
        &self.tree
    }

    /// True if no values are stored. Recorded requests do not count.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.tree.has_key(key)
    }

    pub fn has_sub(&self, sub_path: &str) -> bool {
        self.tree.has_sub(sub_path)
    }

    /// True if the value under `key` is a bracketed vector literal.
    pub fn has_vector(&self, key: &str) -> bool {
        self.tree.get_raw(key).is_some_and(is_vector_literal)
    }

    /// The stored string, unconverted and unrecorded.
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.tree.get_raw(key)
    }

    /// All values as `(dotted.key, value)` pairs, ascending.
    pub fn flatten(&self) -> Vec<(String, String)> {
        self.tree.flatten()
    }

    /// Store the canonical encoding of `value` under `key`.
    ///
    /// Fails with `DuplicateKey` if the key exists and `overwrite` is false.
    pub fn set<T: Encode + ?Sized>(&mut self, key: &str, value: &T, overwrite: bool) -> Result<()> {
        self.tree.set_raw(key, value.encode(), overwrite)
    }

    /// Independent copy of the sub-tree at `sub_path`.
    ///
    /// The copy inherits the default-handling flags but starts with an empty
    /// ledger and never writes an exit log.
    pub fn sub(&self, sub_path: &str) -> Result<ConfigContainer> {
        let tree = self.tree.sub(sub_path)?;
        let options = self.options.clone().with_log_on_exit(false);
        Ok(Self::from_tree(tree, options))
    }

    /// Merge `other` (tree and ledger) into this container.
    ///
    /// With an empty `sub_id` the trees merge at the root, otherwise `other`
    /// lands under `sub_id`. See [`TreeNode::merge`] for the conflict rules;
    /// a rejected merge leaves both tree and ledger untouched.
    pub fn add(&mut self, other: &ConfigContainer, sub_id: &str, overwrite: bool) -> Result<()> {
        self.tree.merge(&other.tree, sub_id, overwrite)?;
        self.ledger.merge(&other.ledger);
        Ok(())
    }

    /// Merge a bare tree into this container.
    pub fn add_tree(&mut self, tree: &TreeNode, sub_id: &str, overwrite: bool) -> Result<()> {
        self.tree.merge(tree, sub_id, overwrite)
    }

    /// A new container holding both trees and both ledgers.
    ///
    /// Colliding keys fail with `DuplicateKey`. The result keeps the options
    /// of `self` but never writes an exit log.
    pub fn merged(&self, other: &ConfigContainer) -> Result<ConfigContainer> {
        let mut out = Self::from_tree(self.tree.clone(), self.options.clone().with_log_on_exit(false));
        out.ledger = self.ledger.clone();
        out.add(other, "", false)?;
        Ok(out)
    }

    pub fn report<W: Write + ?Sized>(&self, out: &mut W, prefix: &str) -> io::Result<()> {
        self.tree.report(out, prefix)
    }

    pub fn report_string(&self, prefix: &str) -> String {
        self.tree.report_string(prefix)
    }

    /// The recorded requests.
    pub fn requests(&self) -> &RequestLedger {
        &self.ledger
    }

    pub fn mismatched_defaults(&self, key: &str) -> BTreeSet<Request> {
        self.ledger.mismatched_defaults(key)
    }

    pub fn mismatched_defaults_map(&self) -> BTreeMap<String, BTreeSet<Request>> {
        self.ledger.mismatched_defaults_map()
    }

    pub fn print_requests<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        self.ledger.print_requests(out)
    }

    pub fn print_mismatched_defaults<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        self.ledger.print_mismatched_defaults(out)
    }

    /// Write the report and the mismatched defaults to the log file,
    /// creating its parent directories.
    pub fn write_log(&self) -> Result<()> {
        write_log_file(&self.options.logfile, self)
    }

    pub(crate) fn ledger_mut(&mut self) -> &mut RequestLedger {
        &mut self.ledger
    }

    pub(crate) fn tree_mut(&mut self) -> &mut TreeNode {
        &mut self.tree
    }
}

fn write_log_file(logfile: &Path, container: &ConfigContainer) -> Result<()> {
    if let Some(parent) = logfile.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut file = fs::File::create(logfile)?;
    container.report(&mut file, "")?;

    let mismatched = container.mismatched_defaults_map();
    if !mismatched.is_empty() {
        writeln!(file)?;
        writeln!(file, "Mismatched defaults:")?;
        container.print_mismatched_defaults(&mut file)?;
    }
    file.flush()?;
    debug!(logfile = %logfile.display(), "Wrote parameter log");
    Ok(())
}

impl Drop for ConfigContainer {
    fn drop(&mut self) {
        if !self.options.log_on_exit {
            return;
        }
        if let Err(e) = self.write_log() {
            warn!(
                logfile = %self.options.logfile.display(),
                error = %e,
                "Failed to write parameter log"
            );
        }
    }
}

impl fmt::Display for ConfigContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.tree, f)
    }
}
