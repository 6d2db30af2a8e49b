//! Policy flags of a container.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the exit log goes unless told otherwise.
pub const DEFAULT_LOGFILE: &str = "data/log/paramtree.log";

/// How a [`ConfigContainer`] treats defaults and its exit log.
///
/// [`ConfigContainer`]: crate::container::ConfigContainer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerOptions {
    /// Write a used default back into the tree.
    #[serde(default)]
    pub record_defaults: bool,

    /// Emit a warning whenever a default is used.
    #[serde(default)]
    pub warn_on_default_access: bool,

    /// Write the report and mismatched defaults to `logfile` on drop.
    #[serde(default)]
    pub log_on_exit: bool,

    #[serde(default = "default_logfile")]
    pub logfile: PathBuf,
}

fn default_logfile() -> PathBuf {
    PathBuf::from(DEFAULT_LOGFILE)
}

impl ContainerOptions {
    /// The flags of the process-wide instance: defaults are announced and the
    /// log is written when asked to flush.
    pub fn global() -> Self {
        Self {
            record_defaults: false,
            warn_on_default_access: true,
            log_on_exit: true,
            logfile: default_logfile(),
        }
    }

    pub fn with_record_defaults(mut self, record: bool) -> Self {
        self.record_defaults = record;
        self
    }

    pub fn with_warn_on_default_access(mut self, warn: bool) -> Self {
        self.warn_on_default_access = warn;
        self
    }

    pub fn with_log_on_exit(mut self, log: bool) -> Self {
        self.log_on_exit = log;
        self
    }

    pub fn with_logfile(mut self, logfile: impl Into<PathBuf>) -> Self {
        self.logfile = logfile.into();
        self
    }
}

impl Default for ContainerOptions {
    fn default() -> Self {
        Self {
            record_defaults: false,
            warn_on_default_access: false,
            log_on_exit: false,
            logfile: default_logfile(),
        }
    }
}
