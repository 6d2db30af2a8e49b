//! Tree node: local values plus owned child sub-trees.

use crate::error::{ConfigError, Result};
use crate::tree::path;
use std::collections::BTreeMap;

/// One level of a parameter tree.
///
/// `values` holds the leaves of this level keyed by their local name (no dots),
/// `children` the named sub-trees. A local name is never both a value key and
/// a child name. Both maps are ordered, so iteration, merging and reporting
/// are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    values: BTreeMap<String, String>,
    children: BTreeMap<String, TreeNode>,
}

impl TreeNode {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from dotted `(key, value)` pairs.
    ///
    /// Fails with `DuplicateKey` if a key occurs twice.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut tree = Self::new();
        for (key, value) in pairs {
            tree.set_raw(key.as_ref(), value, false)?;
        }
        Ok(tree)
    }

    /// True if neither values nor sub-trees are stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.children.is_empty()
    }

    /// Local value keys of this level, ascending.
    pub fn value_keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Local sub-tree names of this level, ascending.
    pub fn sub_keys(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn children(&self) -> impl Iterator<Item = (&str, &TreeNode)> {
        self.children.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn value_count(&self) -> usize {
        self.values.len()
    }

    pub(crate) fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Check whether a value is stored under the dotted `key`.
    pub fn has_key(&self, key: &str) -> bool {
        self.get_raw(key).is_some()
    }

    /// Check whether a sub-tree exists under the dotted `sub_path`.
    pub fn has_sub(&self, sub_path: &str) -> bool {
        self.sub_ref(sub_path).is_some()
    }

    /// The unconverted string stored under `key`.
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        let (parents, name) = path::split_last(key).ok()?;
        self.node_at(&parents)?.values.get(name).map(String::as_str)
    }

    /// Store `value` under `key`, creating intermediate sub-trees as needed.
    ///
    /// Fails with `DuplicateKey` if the key exists and `overwrite` is false, and
    /// with `PathConflict` if the key or one of its parents names a sub-tree
    /// where a value is expected (or the other way round).
    pub fn set_raw(&mut self, key: &str, value: impl Into<String>, overwrite: bool) -> Result<()> {
        let (parents, name) = path::split_last(key)?;
        let node = self.node_mut_or_create(&parents, key)?;
        if node.children.contains_key(name) {
            return Err(ConfigError::PathConflict {
                path: key.to_string(),
            });
        }
        if node.values.contains_key(name) && !overwrite {
            return Err(ConfigError::DuplicateKey {
                key: key.to_string(),
            });
        }
        node.values.insert(name.to_string(), value.into());
        Ok(())
    }

    /// Independent copy of the sub-tree at `sub_path`.
    pub fn sub(&self, sub_path: &str) -> Result<TreeNode> {
        self.find_sub(sub_path)
            .ok_or_else(|| ConfigError::MissingSub(sub_path.to_string()))
    }

    /// Non-failing variant of [`TreeNode::sub`].
    pub fn find_sub(&self, sub_path: &str) -> Option<TreeNode> {
        self.sub_ref(sub_path).cloned()
    }

    /// All stored values as `(dotted.key, value)` pairs in ascending key order.
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        self.collect_flat("", &mut out);
        out.sort();
        out
    }

    fn collect_flat(&self, prefix: &str, out: &mut Vec<(String, String)>) {
        for (key, value) in &self.values {
            out.push((path::join(prefix, key), value.clone()));
        }
        for (name, child) in &self.children {
            child.collect_flat(&path::join(prefix, name), out);
        }
    }

    pub(crate) fn sub_ref(&self, sub_path: &str) -> Option<&TreeNode> {
        let segments = path::split(sub_path).ok()?;
        self.node_at(&segments)
    }

    pub(crate) fn node_at(&self, segments: &[&str]) -> Option<&TreeNode> {
        let mut node = self;
        for segment in segments {
            node = node.children.get(*segment)?;
        }
        Some(node)
    }

    /// Descend to `segments`, creating missing sub-trees. `full_path` is only
    /// used for error reporting.
    pub(crate) fn node_mut_or_create(
        &mut self,
        segments: &[&str],
        full_path: &str,
    ) -> Result<&mut TreeNode> {
        let mut node = self;
        for segment in segments {
            if node.values.contains_key(*segment) {
                return Err(ConfigError::PathConflict {
                    path: full_path.to_string(),
                });
            }
            node = node.children.entry((*segment).to_string()).or_default();
        }
        Ok(node)
    }

    pub(crate) fn values_mut(&mut self) -> &mut BTreeMap<String, String> {
        &mut self.values
    }

    pub(crate) fn children_mut(&mut self) -> &mut BTreeMap<String, TreeNode> {
        &mut self.children
    }
}
