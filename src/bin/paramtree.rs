//! paramtree CLI Binary
//!
//! Command-line front end for inspecting and querying parameter files.

use clap::Parser;
use paramtree::cli::{map_error, Cli, RunContext};
use paramtree::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let mut context = match RunContext::new(cli.file.as_deref()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    let logging_config = build_logging_config(&cli, &context);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("paramtree starting");

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            if output.ends_with('\n') {
                print!("{}", output);
            } else {
                println!("{}", output);
            }
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Logging settings from the `logging` section of the loaded file, with CLI
/// flags taking precedence. An unreadable section falls back to defaults.
fn build_logging_config(cli: &Cli, context: &RunContext) -> LoggingConfig {
    let mut config = LoggingConfig::from_container(context.container()).unwrap_or_default();

    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }

    config
}
