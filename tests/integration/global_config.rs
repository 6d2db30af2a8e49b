//! The process-wide container and the `param!` macro.

use paramtree::global::{self, config, reset, with_config};
use paramtree::validation::{AtLeast, LessThan};
use paramtree::{param, ConfigContainer, ConfigError, ContainerOptions};
use std::fs;
use std::sync::Mutex;
use tempfile::TempDir;

/// Serializes tests that touch the global container.
static GLOBAL_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_param_falls_back_to_default() {
    let _lock = GLOBAL_MUTEX.lock().unwrap();
    reset();

    let steps: u32 = param!("steps", 10).unwrap();
    assert_eq!(steps, 10);
    assert!(!config().has_key("steps"));

    config().set("steps", &12, true).unwrap();
    let steps: u32 = param!("steps", 10).unwrap();
    assert_eq!(steps, 12);
    reset();
}

#[test]
fn test_param_validates() {
    let _lock = GLOBAL_MUTEX.lock().unwrap();
    reset();

    let tol: f64 = param!("tol", 0.5, LessThan(1.0)).unwrap();
    assert_eq!(tol, 0.5);
    assert!(matches!(
        param!("tol", 2.0, LessThan(1.0)),
        Err(ConfigError::ValidationError { .. })
    ));
    reset();
}

#[test]
fn test_param_records_distinct_call_sites() {
    let _lock = GLOBAL_MUTEX.lock().unwrap();
    reset();

    let _: i32 = param!("depth", 1).unwrap();
    let _: i32 = param!("depth", 1, AtLeast(0)).unwrap();
    let _: i32 = param!("depth", 2).unwrap();

    let (count, mismatched, first_file) = with_config(|c| {
        let requests = c.requests().requests("depth").unwrap();
        (
            requests.len(),
            c.mismatched_defaults("depth").len(),
            requests.iter().next().unwrap().file().to_string(),
        )
    });
    assert_eq!(count, 3);
    assert_eq!(mismatched, 3);
    assert!(first_file.ends_with("global_config.rs"));
    reset();
}

#[test]
fn test_install_and_flush_log() {
    let _lock = GLOBAL_MUTEX.lock().unwrap();
    reset();

    let dir = TempDir::new().unwrap();
    let logfile = dir.path().join("log").join("params.log");
    let mut mine = ConfigContainer::with_options(
        ContainerOptions::global()
            .with_log_on_exit(false)
            .with_logfile(&logfile),
    );
    mine.set("grid.cells", &8, false).unwrap();
    let mut previous = global::install(mine);
    previous.set_log_on_exit(false);

    let _: i32 = param!("k", 1).unwrap();
    let _: i32 = param!("k", 2).unwrap();
    global::flush_log().unwrap();

    let text = fs::read_to_string(&logfile).unwrap();
    assert!(text.starts_with("[ grid ]\ncells = 8\n"));
    assert!(text.contains("Mismatched defaults:"));
    assert!(text.contains("k -- default: '1'"));
    assert!(text.contains("k -- default: '2'"));
    reset();
}
