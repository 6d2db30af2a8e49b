//! Request ledger through the container API.

use paramtree::validation::LessThan;
use paramtree::{call_site, ConfigContainer, Request, Shape, ValidateAny};

#[test]
fn test_same_default_twice_is_no_mismatch() {
    let mut config = ConfigContainer::new();
    config.get_or("k", 1).unwrap();
    config.get_or("k", 1).unwrap();
    assert!(config.mismatched_defaults("k").is_empty());
    assert!(config.mismatched_defaults_map().is_empty());
}

#[test]
fn test_different_defaults_are_reported_with_every_site() {
    let mut config = ConfigContainer::new();
    config
        .get_requested("k", 1, &ValidateAny, Shape::any(), Some(call_site!()))
        .unwrap();
    config
        .get_requested("k", 1, &ValidateAny, Shape::any(), Some(call_site!()))
        .unwrap();
    config
        .get_requested("k", 2, &ValidateAny, Shape::any(), Some(call_site!()))
        .unwrap();

    let mismatched = config.mismatched_defaults("k");
    assert_eq!(mismatched.len(), 3);
    let defaults: Vec<&str> = mismatched.iter().map(Request::default_value).collect();
    assert_eq!(defaults, vec!["1", "1", "2"]);

    let map = config.mismatched_defaults_map();
    assert_eq!(map.len(), 1);
    assert!(map.contains_key("k"));
}

#[test]
fn test_stored_keys_are_audited_too() {
    let mut config = ConfigContainer::with_value("k", &10).unwrap();
    assert_eq!(config.get_or("k", 1).unwrap(), 10);
    assert_eq!(config.get_or("k", 2).unwrap(), 10);
    assert_eq!(config.mismatched_defaults("k").len(), 2);
}

#[test]
fn test_validator_identity_is_recorded() {
    let mut config = ConfigContainer::new();
    config.get_or_valid("k", 1, &LessThan(5)).unwrap();
    config
        .get_requested("k", 1, &LessThan(5), Shape::any(), Some(call_site!(LessThan(5))))
        .unwrap();

    let requests = config.requests().requests("k").unwrap();
    let validators: Vec<&str> = requests.iter().map(Request::validator).collect();
    assert!(validators.contains(&"LessThan<i32>"));
    assert!(validators.contains(&"LessThan(5)"));
    assert!(config.mismatched_defaults("k").is_empty());
}

#[test]
fn test_add_unions_ledgers() {
    let mut a = ConfigContainer::new();
    a.get_or("k", 1).unwrap();
    let mut b = ConfigContainer::new();
    b.get_or("k", 2).unwrap();
    b.set("other", &3, false).unwrap();

    a.add(&b, "", false).unwrap();
    assert_eq!(a.requests().len(), 2);
    assert_eq!(a.mismatched_defaults("k").len(), 2);
}

#[test]
fn test_print_functions_are_sorted() {
    let mut config = ConfigContainer::new();
    config.get_or("zeta", 1).unwrap();
    config.get_or("alpha", "x".to_string()).unwrap();
    config.get_or("alpha", "y".to_string()).unwrap();

    let mut out = Vec::new();
    config.print_requests(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let alpha = text.find("alpha\n").unwrap();
    let zeta = text.find("zeta\n").unwrap();
    assert!(alpha < zeta);

    let mut out = Vec::new();
    config.print_mismatched_defaults(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("alpha\n"));
    assert!(!text.contains("zeta"));
}
