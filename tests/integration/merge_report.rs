//! Merging trees and containers, and the report format.

use paramtree::{ConfigContainer, ConfigError, TreeNode};

fn tree(pairs: &[(&str, &str)]) -> TreeNode {
    TreeNode::from_pairs(pairs.iter().copied()).unwrap()
}

#[test]
fn test_disjoint_merge_keeps_both_sides() {
    let mut a = tree(&[("a", "1"), ("s.x", "2")]);
    let b = tree(&[("b", "3"), ("s.y", "4")]);
    a.merge(&b, "", false).unwrap();

    assert_eq!(a.get_raw("a"), Some("1"));
    assert_eq!(a.get_raw("b"), Some("3"));
    assert_eq!(a.get_raw("s.x"), Some("2"));
    assert_eq!(a.get_raw("s.y"), Some("4"));
}

#[test]
fn test_collision_needs_overwrite() {
    let mut a = tree(&[("s.k", "old"), ("keep", "1")]);
    let b = tree(&[("s.k", "new"), ("extra", "2")]);

    let err = a.merge(&b, "", false).unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateKey { ref key } if key == "s.k"));
    // nothing was applied
    assert!(!a.has_key("extra"));

    a.merge(&b, "", true).unwrap();
    assert_eq!(a.get_raw("s.k"), Some("new"));
    assert_eq!(a.get_raw("extra"), Some("2"));
}

#[test]
fn test_value_versus_sub_conflict() {
    let mut a = tree(&[("x", "1")]);
    let b = tree(&[("x.y", "2")]);
    assert!(matches!(
        a.merge(&b, "", true),
        Err(ConfigError::PathConflict { .. })
    ));
}

#[test]
fn test_merge_under_path() {
    let mut a = tree(&[("top", "0")]);
    let b = tree(&[("k", "1")]);
    a.merge(&b, "deep.er", false).unwrap();
    assert_eq!(a.get_raw("deep.er.k"), Some("1"));

    let c = tree(&[("k", "2"), ("j", "3")]);
    assert!(a.merge(&c, "deep.er", false).is_err());
    a.merge(&c, "deep.er", true).unwrap();
    assert_eq!(a.get_raw("deep.er.k"), Some("2"));
    assert_eq!(a.get_raw("deep.er.j"), Some("3"));
}

#[test]
fn test_merge_is_deterministic() {
    let base = tree(&[("b", "1"), ("a.z", "2")]);
    let other = tree(&[("c", "3"), ("a.y", "4"), ("d.e.f", "5")]);

    let mut first = base.clone();
    first.merge(&other, "", false).unwrap();
    let mut second = base.clone();
    second.merge(&other, "", false).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.report_string(""), second.report_string(""));
}

#[test]
fn test_report_flattens_single_child_chains() {
    let t = tree(&[("a", "1"), ("x.y", "2")]);
    assert_eq!(t.report_string(""), "a = 1\n[ x ]\ny = 2\n");

    let t = tree(&[("top", "0"), ("a.b.c.d", "1")]);
    assert_eq!(t.report_string(""), "top = 0\n[ a.b.c ]\nd = 1\n");
    assert_eq!(t.sub("a").unwrap().common_prefix(), "b.c");
}

#[test]
fn test_report_prefix() {
    let t = tree(&[("a", "1"), ("s.b", "2")]);
    assert_eq!(t.report_string("  "), "  a = 1\n  [ s ]\n  b = 2\n");
}

#[test]
fn test_report_to_writer_matches_string() {
    let config = ConfigContainer::from_pairs(&["k", "s.t.u"], &["v", "w"]).unwrap();
    let mut out = Vec::new();
    config.report(&mut out, "# ").unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), config.report_string("# "));
    assert_eq!(config.to_string(), config.report_string(""));
}

#[test]
fn test_container_add_under_sub() {
    let mut config = ConfigContainer::with_value("a", &1).unwrap();
    let other = ConfigContainer::with_value("b", &2).unwrap();
    config.add(&other, "nested", false).unwrap();
    assert_eq!(config.report_string(""), "a = 1\n[ nested ]\nb = 2\n");
}
