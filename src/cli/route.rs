//! CLI route: single route table and run context.

use crate::cli::output::{format_keys_table, format_keys_text};
use crate::cli::parse::{Commands, ValueType};
use crate::codec::{decode, DenseMatrix, Decode, Encode};
use crate::container::{ConfigContainer, ContainerOptions};
use crate::error::{ConfigError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Runtime context for CLI execution: the loaded parameter container.
pub struct RunContext {
    container: ConfigContainer,
}

impl RunContext {
    /// Load `file` if given, otherwise start from an empty container.
    pub fn new(file: Option<&Path>) -> Result<Self> {
        let container = match file {
            Some(path) => ConfigContainer::from_file(path, ContainerOptions::default())?,
            None => ConfigContainer::new(),
        };
        Ok(Self { container })
    }

    pub fn container(&self) -> &ConfigContainer {
        &self.container
    }

    /// Apply the command's overrides and run it, returning the text to print.
    pub fn execute(&mut self, command: &Commands) -> Result<String> {
        let overrides = &command.overrides().values;
        if !overrides.is_empty() {
            debug!(count = overrides.len(), "Applying command-line overrides");
            self.container.read_options(overrides)?;
        }

        match command {
            Commands::Report { prefix, .. } => Ok(self.container.report_string(prefix)),
            Commands::Get {
                key, default, kind, ..
            } => self.handle_get(key, default.as_deref(), *kind),
            Commands::Keys { format, .. } => self.handle_keys(format),
            Commands::Merge {
                other,
                under,
                overwrite,
                ..
            } => self.handle_merge(other, under, *overwrite),
            Commands::Requests {
                lookups, format, ..
            } => self.handle_requests(lookups, format),
        }
    }

    fn handle_get(&mut self, key: &str, default: Option<&str>, kind: ValueType) -> Result<String> {
        match kind {
            ValueType::String => self.lookup::<String>(key, default),
            ValueType::Int => self.lookup::<i64>(key, default),
            ValueType::Float => self.lookup::<f64>(key, default),
            ValueType::Bool => self.lookup::<bool>(key, default),
            ValueType::Vector => self.lookup::<Vec<String>>(key, default),
            ValueType::Matrix => self.lookup::<DenseMatrix<f64>>(key, default),
        }
    }

    /// Decode `key` as `T` and print its canonical form, marking values
    /// that came from the default.
    fn lookup<T: Decode + Encode>(&mut self, key: &str, default: Option<&str>) -> Result<String> {
        let from_default = !self.container.has_key(key);
        let value: T = match default {
            Some(raw) => {
                let default_value = decode::<T>(raw)?;
                self.container.get_or(key, default_value)?
            }
            None => self.container.get(key)?,
        };
        let mut out = value.encode();
        if default.is_some() && from_default {
            out.push_str("  (default)");
        }
        Ok(out)
    }

    fn handle_keys(&self, format: &str) -> Result<String> {
        let pairs = self.container.flatten();
        match format {
            "text" => Ok(format_keys_text(&pairs)),
            "table" => Ok(format_keys_table(&pairs)),
            other => Err(ConfigError::InvalidArgument(format!(
                "--format {} (must be 'text' or 'table')",
                other
            ))),
        }
    }

    fn handle_merge(&mut self, other: &Path, under: &str, overwrite: bool) -> Result<String> {
        let incoming = ConfigContainer::from_file(other, ContainerOptions::default())?;
        self.container.add(&incoming, under, overwrite)?;
        info!(file = %other.display(), under, overwrite, "Merged parameter file");
        Ok(self.container.report_string(""))
    }

    fn handle_requests(&mut self, lookups: &[String], format: &str) -> Result<String> {
        for lookup in lookups {
            let (key, default) = lookup
                .split_once('=')
                .ok_or_else(|| ConfigError::InvalidArgument(lookup.clone()))?;
            self.container.get_or(key.trim(), default.trim().to_string())?;
        }

        match format {
            "json" => {
                let json = serde_json::to_string_pretty(self.container.requests())
                    .map_err(std::io::Error::from)?;
                Ok(json)
            }
            "text" => {
                let mut out = Vec::new();
                self.container.print_requests(&mut out)?;
                if !self.container.mismatched_defaults_map().is_empty() {
                    out.extend_from_slice(b"\nMismatched defaults:\n");
                    self.container.print_mismatched_defaults(&mut out)?;
                }
                Ok(String::from_utf8_lossy(&out).into_owned())
            }
            other => Err(ConfigError::InvalidArgument(format!(
                "--format {} (must be 'text' or 'json')",
                other
            ))),
        }
    }
}
