//! Merge rules: overwrite policy, conflict detection, sub-path placement.
//!
//! Merges validate the whole incoming tree before touching `self`, so a
//! rejected merge leaves the target unchanged. Keys are visited in ascending
//! order, which makes repeated merges of the same inputs produce identical
//! trees.

use crate::error::{ConfigError, Result};
use crate::tree::node::TreeNode;
use crate::tree::path;
use tracing::debug;

impl TreeNode {
    /// Merge `other` into this tree.
    ///
    /// With an empty `under_path` the value keys and sub-trees of `other` are
    /// merged key by key into the root, recursing into same-named sub-trees.
    /// Otherwise `other` becomes the sub-tree at `under_path`, or is merged into
    /// the sub-tree already living there.
    ///
    /// An existing value key fails with `DuplicateKey` unless `overwrite` is set;
    /// a name that is a value on one side and a sub-tree on the other fails with
    /// `PathConflict`.
    pub fn merge(&mut self, other: &TreeNode, under_path: &str, overwrite: bool) -> Result<()> {
        debug!(under = under_path, overwrite, "Merging parameter tree");
        if under_path.trim().is_empty() {
            self.check_merge(other, "", overwrite)?;
            self.apply_merge(other);
            return Ok(());
        }

        let (parents, name) = path::split_last(under_path)?;
        self.check_placement(other, &parents, name, under_path, overwrite)?;

        let target = self.node_mut_or_create(&parents, under_path)?;
        target.values_mut().remove(name);
        target
            .children_mut()
            .entry(name.to_string())
            .or_default()
            .apply_merge(other);
        Ok(())
    }

    /// Copy every value of `other` whose key is not yet present.
    ///
    /// Existing values are kept and names that would conflict with the
    /// value/sub-tree split are skipped. Returns the number of values added.
    pub fn fill_missing(&mut self, other: &TreeNode) -> usize {
        let mut added = 0;
        for (key, value) in other.flatten() {
            if self.has_key(&key) {
                continue;
            }
            match self.set_raw(&key, value, false) {
                Ok(()) => added += 1,
                Err(e) => debug!(key = %key, error = %e, "Skipping conflicting key"),
            }
        }
        added
    }

    fn check_placement(
        &self,
        other: &TreeNode,
        parents: &[&str],
        name: &str,
        under_path: &str,
        overwrite: bool,
    ) -> Result<()> {
        let mut node = self;
        for segment in parents {
            if node.values().any(|(key, _)| key == *segment) {
                return Err(ConfigError::PathConflict {
                    path: under_path.to_string(),
                });
            }
            match node.children().find(|(child, _)| child == segment) {
                Some((_, child)) => node = child,
                // the remaining path does not exist yet and will be created
                None => return Ok(()),
            }
        }

        if node.has_key(name) && !overwrite {
            return Err(ConfigError::DuplicateKey {
                key: under_path.to_string(),
            });
        }
        match node.node_at(&[name]) {
            Some(existing) => existing.check_merge(other, under_path, overwrite),
            None => Ok(()),
        }
    }

    fn check_merge(&self, other: &TreeNode, prefix: &str, overwrite: bool) -> Result<()> {
        for key in other.value_keys() {
            let full = path::join(prefix, key);
            if self.node_at(&[key]).is_some() {
                return Err(ConfigError::PathConflict { path: full });
            }
            if self.has_key(key) && !overwrite {
                return Err(ConfigError::DuplicateKey { key: full });
            }
        }
        for (name, sub) in other.children() {
            let full = path::join(prefix, name);
            if self.has_key(name) {
                return Err(ConfigError::PathConflict { path: full });
            }
            if let Some(mine) = self.node_at(&[name]) {
                mine.check_merge(sub, &full, overwrite)?;
            }
        }
        Ok(())
    }

    /// Apply a merge that `check_merge` accepted.
    fn apply_merge(&mut self, other: &TreeNode) {
        for (key, value) in other.values() {
            self.values_mut().insert(key.to_string(), value.to_string());
        }
        for (name, sub) in other.children() {
            self.children_mut()
                .entry(name.to_string())
                .or_default()
                .apply_merge(sub);
        }
    }
}
