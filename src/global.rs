//! Process-wide container.
//!
//! One [`ConfigContainer`] lives for the whole process, created on first use
//! with [`ContainerOptions::global`]. Access goes through a mutex; the
//! [`param!`](crate::param) macro reads from it and stamps each request with
//! its call site.
//!
//! The instance is never dropped, so its exit log is only written by
//! [`flush_log`]. Tests swap in fresh state with [`reset`].
//!
//! The lock is not reentrant: do not use `param!` inside [`with_config`].
//! The arguments of `param!` are evaluated before the lock is taken, so a
//! default may itself come from `param!`.

use crate::container::{ConfigContainer, ContainerOptions};
use crate::error::Result;
use parking_lot::{Mutex, MutexGuard};
use std::sync::OnceLock;

static GLOBAL: OnceLock<Mutex<ConfigContainer>> = OnceLock::new();

fn cell() -> &'static Mutex<ConfigContainer> {
    GLOBAL.get_or_init(|| Mutex::new(ConfigContainer::with_options(ContainerOptions::global())))
}

/// Lock the global container.
pub fn config() -> MutexGuard<'static, ConfigContainer> {
    cell().lock()
}

/// Run `f` with the global container locked.
pub fn with_config<R>(f: impl FnOnce(&mut ConfigContainer) -> R) -> R {
    f(&mut *config())
}

/// Replace the global container, returning the previous one.
pub fn install(container: ConfigContainer) -> ConfigContainer {
    std::mem::replace(&mut *config(), container)
}

/// Drop the global state and start over with an empty container. The old
/// container is discarded without writing its log.
pub fn reset() {
    let mut old = install(ConfigContainer::with_options(ContainerOptions::global()));
    old.set_log_on_exit(false);
}

/// Write the report and mismatched defaults of the global container to its
/// log file.
pub fn flush_log() -> Result<()> {
    config().write_log()
}

/// Call-site information for a lookup written at this point in the source.
///
/// `call_site!()` names no validator, `call_site!(validator)` records the
/// validator expression text.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::request::CallSite {
            file: file!(),
            line: line!(),
            validator: "none",
        }
    };
    ($validator:expr) => {
        $crate::request::CallSite {
            file: file!(),
            line: line!(),
            validator: stringify!($validator),
        }
    };
}

/// Look up a key in the global container with a default and an optional
/// validator, recording the call site.
///
/// ```
/// use paramtree::param;
/// use paramtree::validation::LessThan;
///
/// let steps: u32 = param!("solver.max_steps", 100).unwrap();
/// let tol: f64 = param!("solver.tol", 1e-8, LessThan(1.0)).unwrap();
/// assert_eq!(steps, 100);
/// assert_eq!(tol, 1e-8);
/// ```
#[macro_export]
macro_rules! param {
    ($key:expr, $default:expr) => {{
        let key: &str = &$key;
        let default = $default;
        let site = $crate::call_site!();
        $crate::global::with_config(|container| {
            container.get_requested(
                key,
                default,
                &$crate::validation::ValidateAny,
                $crate::codec::Shape::any(),
                Some(site),
            )
        })
    }};
    ($key:expr, $default:expr, $validator:expr) => {{
        let key: &str = &$key;
        let default = $default;
        let validator = $validator;
        let site = $crate::call_site!($validator);
        $crate::global::with_config(|container| {
            container.get_requested(
                key,
                default,
                &validator,
                $crate::codec::Shape::any(),
                Some(site),
            )
        })
    }};
}
