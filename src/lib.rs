//! paramtree: Hierarchical Typed Parameter Store
//!
//! A tree of string key/value pairs organised into named sub-trees, read
//! through typed getters with default fallback and pluggable validation.
//! Every default-providing lookup is recorded so that a key requested with
//! different defaults in different places can be found after the fact.

pub mod cli;
pub mod codec;
pub mod container;
pub mod error;
pub mod global;
pub mod ledger;
pub mod logging;
pub mod request;
pub mod tree;
pub mod validation;

pub use codec::{DenseMatrix, Decode, Encode, Shape};
pub use container::{ConfigContainer, ContainerOptions};
pub use error::{ConfigError, Result};
pub use ledger::RequestLedger;
pub use request::{CallSite, Request};
pub use tree::TreeNode;
pub use validation::{ValidateAny, Validator};
