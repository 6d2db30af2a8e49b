//! CLI parse: clap types for paramtree. No behavior; definitions only.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// paramtree - inspect and query hierarchical parameter files
#[derive(Parser)]
#[command(name = "paramtree")]
#[command(about = "Inspect and query hierarchical parameter files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Parameter file to load (INI, TOML, JSON or YAML by extension)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,
}

/// Trailing `key=value` pairs applied on top of the loaded file.
#[derive(Args, Debug, Clone, Default)]
pub struct Overrides {
    #[arg(value_name = "KEY=VALUE")]
    pub values: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the tree report
    Report {
        /// Prefix for every report line
        #[arg(long, default_value = "")]
        prefix: String,
        #[command(flatten)]
        overrides: Overrides,
    },
    /// Look up one key as a typed value
    Get {
        /// Dotted key
        key: String,
        /// Value to use if the key is missing
        #[arg(long)]
        default: Option<String>,
        /// Type to decode the value as
        #[arg(long, value_enum, default_value_t = ValueType::String)]
        kind: ValueType,
        #[command(flatten)]
        overrides: Overrides,
    },
    /// List every key with its value
    Keys {
        /// Output format (text or table)
        #[arg(long, default_value = "text")]
        format: String,
        #[command(flatten)]
        overrides: Overrides,
    },
    /// Merge a second parameter file and print the result
    Merge {
        /// File to merge in
        other: PathBuf,
        /// Sub-tree to place the file under
        #[arg(long, default_value = "")]
        under: String,
        /// Replace existing values instead of failing
        #[arg(long)]
        overwrite: bool,
        #[command(flatten)]
        overrides: Overrides,
    },
    /// Perform lookups with defaults and dump the request ledger
    Requests {
        /// Lookup as KEY=DEFAULT, may be repeated
        #[arg(long = "lookup", value_name = "KEY=DEFAULT")]
        lookups: Vec<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        #[command(flatten)]
        overrides: Overrides,
    },
}

impl Commands {
    pub fn overrides(&self) -> &Overrides {
        match self {
            Commands::Report { overrides, .. }
            | Commands::Get { overrides, .. }
            | Commands::Keys { overrides, .. }
            | Commands::Merge { overrides, .. }
            | Commands::Requests { overrides, .. } => overrides,
        }
    }
}

/// Value types understood by `get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueType {
    String,
    Int,
    Float,
    Bool,
    Vector,
    Matrix,
}
