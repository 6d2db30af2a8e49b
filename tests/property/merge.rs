//! Merge guarantees over generated trees.

use paramtree::{ConfigError, TreeNode};
use proptest::prelude::*;
use std::collections::BTreeMap;

/// Flat maps whose keys are all leaves: segment names never collide with
/// a value key because values live under `v*` and subs under `s*`.
fn tree_strategy(prefix: &'static str) -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map(
        "(s[a-c]\\.){0,2}v[0-9]{1,2}".prop_map(move |key| format!("{}{}", prefix, key)),
        "[a-z0-9]{1,6}",
        0..12,
    )
}

fn build(pairs: &BTreeMap<String, String>) -> TreeNode {
    TreeNode::from_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))).unwrap()
}

#[test]
fn test_disjoint_merge_is_union_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(tree_strategy("l"), tree_strategy("r")), |(left, right)| {
            let mut merged = build(&left);
            merged.merge(&build(&right), "", false).unwrap();

            for (key, value) in left.iter().chain(right.iter()) {
                prop_assert_eq!(merged.get_raw(key), Some(value.as_str()));
            }
            prop_assert_eq!(merged.flatten().len(), left.len() + right.len());
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_overwrite_prefers_incoming_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(tree_strategy(""), tree_strategy("")), |(left, right)| {
            let colliding = left.keys().any(|k| right.contains_key(k));

            let mut strict = build(&left);
            let result = strict.merge(&build(&right), "", false);
            if colliding {
                let rejected = matches!(result, Err(ConfigError::DuplicateKey { .. }));
                prop_assert!(rejected);
                prop_assert_eq!(&strict, &build(&left));
            } else {
                prop_assert!(result.is_ok());
            }

            let mut relaxed = build(&left);
            relaxed.merge(&build(&right), "", true).unwrap();
            for (key, value) in &right {
                prop_assert_eq!(relaxed.get_raw(key), Some(value.as_str()));
            }
            for (key, value) in &left {
                if !right.contains_key(key) {
                    prop_assert_eq!(relaxed.get_raw(key), Some(value.as_str()));
                }
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_merge_is_deterministic_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(tree_strategy(""), tree_strategy("")), |(left, right)| {
            let mut first = build(&left);
            let mut second = build(&left);
            let a = first.merge(&build(&right), "under", true);
            let b = second.merge(&build(&right), "under", true);
            prop_assert_eq!(a.is_ok(), b.is_ok());
            prop_assert_eq!(first.report_string(""), second.report_string(""));
            Ok(())
        })
        .unwrap();
}
