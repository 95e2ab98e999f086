// Command handlers module
pub mod activity;
pub mod config;
pub mod conversations;
pub mod distribution;
pub mod guardrails;
pub mod overview;
pub mod tokens;
pub mod users;

use crate::output::{OutputFormat, TableOptions};
use anyhow::{Context, Result};

/// Print a view-model as JSON or a table, per the output flags.
pub fn print_view(view: &impl OutputFormat, json_output: bool, opts: &TableOptions) -> Result<()> {
    if json_output {
        let json = view.to_json().context("Failed to serialize results")?;
        println!("{json}");
    } else {
        println!("{}", view.to_table_with_options(opts));
    }
    Ok(())
}
