//! CLI domain: parse, route and output only.
//! The route table dispatches straight to the container API.

mod output;
mod parse;
mod route;

pub use output::{format_keys_table, format_keys_text, map_error};
pub use parse::{Cli, Commands, Overrides, ValueType};
pub use route::RunContext;
