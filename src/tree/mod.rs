//! Parameter Tree
//!
//! A recursive map of string values organised into named sub-trees and
//! addressed by dotted paths (`"a.b.c"`). All typed access, auditing and
//! ingestion in this crate is layered on top of [`TreeNode`].

mod merge;
pub mod node;
pub mod path;
mod report;

pub use node::TreeNode;
