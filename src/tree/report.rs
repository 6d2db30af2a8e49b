//! Flat text report of a tree, stable enough for log-parsing tools.
//!
//! Format: every leaf as `<prefix><key> = <value>`, every sub-tree holding
//! values introduced by a `<prefix>[ <dotted.path> ]` header. Chains of
//! sub-trees without values and with a single child collapse into one header.

use crate::tree::node::TreeNode;
use crate::tree::path;
use std::fmt::{self, Write as _};
use std::io;

impl TreeNode {
    /// Write the report of this tree to `out`, prepending `prefix` to each line.
    pub fn report<W: io::Write + ?Sized>(&self, out: &mut W, prefix: &str) -> io::Result<()> {
        out.write_all(self.report_string(prefix).as_bytes())
    }

    /// Report into a `String`.
    pub fn report_string(&self, prefix: &str) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = self.report_section(&mut out, prefix, "");
        out
    }

    /// Longest dotted path reachable from this node through nodes that hold
    /// no values and exactly one child. Empty if this node does not start
    /// such a chain.
    pub fn common_prefix(&self) -> String {
        let (chain, _) = self.descend_chain(String::new());
        chain
    }

    fn descend_chain(&self, mut chain: String) -> (String, &TreeNode) {
        let mut node = self;
        while node.value_count() == 0 && node.child_count() == 1 {
            let Some((name, child)) = node.children().next() else {
                break;
            };
            chain = path::join(&chain, name);
            node = child;
        }
        (chain, node)
    }

    fn report_section(&self, out: &mut String, prefix: &str, sub_path: &str) -> fmt::Result {
        for (key, value) in self.values() {
            writeln!(out, "{}{} = {}", prefix, key, value)?;
        }
        for (name, child) in self.children() {
            let (chain, node) = child.descend_chain(path::join(sub_path, name));
            if node.value_count() > 0 {
                writeln!(out, "{}[ {} ]", prefix, chain)?;
            }
            node.report_section(out, prefix, &chain)?;
        }
        Ok(())
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.report_string(""))
    }
}
