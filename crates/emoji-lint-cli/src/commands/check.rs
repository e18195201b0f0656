//! Check command implementation
//!
//! Validates every filename in the emoji directory.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use emoji_lint::{resolve_target_dir, LintIssue, LintReport, RuleRegistry};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::ExitCode;

/// Output format for check results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Picks the format from the `--json` flag.
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Rule selection passed on the command line.
#[derive(Debug, Clone, Default)]
pub struct RuleSelection {
    /// Rule IDs to disable.
    pub disable_rules: Vec<String>,
    /// If provided, only run these rules (comma-separated).
    pub only_rules: Option<String>,
}

/// JSON output for the check command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutput {
    /// Whether the check passed (no issues).
    pub success: bool,
    /// Directory that was checked.
    pub directory: String,
    /// Number of directory entries examined.
    pub files_scanned: usize,
    /// Every issue, in scan order.
    pub issues: Vec<LintIssue>,
}

impl CheckOutput {
    pub fn new(directory: &Path, report: &LintReport) -> Self {
        Self {
            success: report.ok,
            directory: directory.display().to_string(),
            files_scanned: report.files_scanned,
            issues: report.issues.clone(),
        }
    }
}

/// Builds the rule registry for a selection.
///
/// Fails if any selected rule ID is not registered, so a typo cannot
/// silently switch rules off.
pub fn build_registry(selection: &RuleSelection) -> Result<RuleRegistry> {
    let mut registry = RuleRegistry::default_rules();
    let known: Vec<String> = registry.rule_metadata().into_iter().map(|r| r.id).collect();

    let only: Vec<&str> = selection
        .only_rules
        .as_deref()
        .map(|only| only.split(',').map(|s| s.trim()).collect())
        .unwrap_or_default();

    let unknown: Vec<&str> = selection
        .disable_rules
        .iter()
        .map(String::as_str)
        .chain(only.iter().copied())
        .filter(|id| !known.iter().any(|k| k == id))
        .collect();
    if !unknown.is_empty() {
        bail!(
            "unknown rule id(s): {} (run with --list-rules to see available rules)",
            unknown.join(", ")
        );
    }

    for rule_id in &selection.disable_rules {
        registry.disable_rule(rule_id);
    }

    if selection.only_rules.is_some() {
        registry.enable_only(&only);
    }

    Ok(registry)
}

/// Run the check command.
///
/// # Arguments
/// * `dir` - Directory to check; defaults to the emoji directory next to the executable
/// * `selection` - Rules to disable or restrict to
/// * `format` - Output format (text or json)
///
/// # Returns
/// Exit code: 0 if every name is valid, 1 otherwise. An unreadable
/// directory is returned as an error.
pub fn run(dir: Option<&Path>, selection: &RuleSelection, format: OutputFormat) -> Result<ExitCode> {
    let dir = resolve_target_dir(dir).context("Failed to locate the emoji directory")?;
    tracing::debug!(directory = %dir.display(), "resolved emoji directory");
    let registry = build_registry(selection)?;

    let report = registry.lint_directory(&dir)?;

    match format {
        OutputFormat::Json => {
            let output = CheckOutput::new(&dir, &report);
            println!(
                "{}",
                serde_json::to_string_pretty(&output).context("Failed to serialize check output")?
            );
        }
        OutputFormat::Text => print_text_output(&report),
    }

    if report.has_problems() {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Print check results in human-readable text format.
///
/// Stdout gets one line per issue and nothing else; the summary goes to stderr.
fn print_text_output(report: &LintReport) {
    for issue in &report.issues {
        println!("{}", issue);
    }
    eprintln!("{}", summary_line(report));
}

/// Final line of the text output.
pub(crate) fn summary_line(report: &LintReport) -> String {
    if report.ok {
        format!(
            "{} {}",
            "PASSED".green().bold(),
            format!("{} file(s) checked", report.files_scanned).dimmed()
        )
    } else {
        format!(
            "{} {}",
            "FAILED".red().bold(),
            format!(
                "{} problem(s) in {} of {} file(s)",
                report.total_issues(),
                report.files_with_issues(),
                report.files_scanned
            )
            .dimmed()
        )
    }
}
