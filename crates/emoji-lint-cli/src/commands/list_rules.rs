//! Lists the naming rules in evaluation order.

use anyhow::{Context, Result};
use colored::Colorize;
use emoji_lint::{RuleMetadata, RuleRegistry};
use std::process::ExitCode;

use super::check::OutputFormat;

/// Run the list-rules command.
pub fn run(format: OutputFormat) -> Result<ExitCode> {
    let rules = RuleRegistry::default_rules().rule_metadata();

    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&rules).context("Failed to serialize rule list")?
        ),
        OutputFormat::Text => {
            for line in format_rules(&rules) {
                println!("{}", line);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn format_rules(rules: &[RuleMetadata]) -> Vec<String> {
    let width = rules.iter().map(|r| r.id.len()).max().unwrap_or(0);
    rules
        .iter()
        .map(|r| format!("{:<width$}  {}", r.id.cyan(), r.description, width = width))
        .collect()
}
