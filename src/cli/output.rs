//! CLI output: error mapping and listings.

use crate::error::ConfigError;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Map an error to the line printed on stderr.
pub fn map_error(e: &ConfigError) -> String {
    format!("{} {}", "error:".red().bold(), e)
}

/// `key = value` per line.
pub fn format_keys_text(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{} = {}", key, value))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_keys_table(pairs: &[(String, String)]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Key", "Value"]);
    for (key, value) in pairs {
        table.add_row(vec![key, value]);
    }
    table.to_string()
}
