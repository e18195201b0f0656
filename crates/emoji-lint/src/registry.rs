//! Rule registry for managing lint rules.

use crate::report::LintReport;
use crate::rules::filename::NonPngRule;
use crate::rules::{all_rules, LintRule};
use crate::scan::{self, ScanError};
use std::collections::HashSet;
use std::path::Path;

/// Registry of the naming rules applied to each directory entry.
pub struct RuleRegistry {
    extension: NonPngRule,
    rules: Vec<Box<dyn LintRule>>,
    disabled_rules: HashSet<String>,
    enabled_only: Option<HashSet<String>>,
}

impl RuleRegistry {
    /// Creates a registry with only the extension gate.
    pub fn new() -> Self {
        Self {
            extension: NonPngRule,
            rules: Vec::new(),
            disabled_rules: HashSet::new(),
            enabled_only: None,
        }
    }

    /// Creates a registry with all default rules registered.
    pub fn default_rules() -> Self {
        let mut registry = Self::new();
        for rule in all_rules() {
            registry.register(rule);
        }
        registry
    }

    /// Registers a new lint rule after the existing ones.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }

    /// Disables a rule by ID.
    pub fn disable_rule(&mut self, rule_id: &str) {
        self.disabled_rules.insert(rule_id.to_string());
    }

    /// Enables only the specified rules (disables all others).
    pub fn enable_only(&mut self, rule_ids: &[&str]) {
        self.enabled_only = Some(rule_ids.iter().map(|s| s.to_string()).collect());
    }

    /// Returns all registered base-name rules.
    pub fn rules(&self) -> &[Box<dyn LintRule>] {
        &self.rules
    }

    /// Returns rule metadata for documentation/introspection.
    ///
    /// The extension gate is listed first, then the rules in evaluation order.
    pub fn rule_metadata(&self) -> Vec<RuleMetadata> {
        std::iter::once(RuleMetadata {
            id: self.extension.id().to_string(),
            description: self.extension.description().to_string(),
        })
        .chain(self.rules.iter().map(|r| RuleMetadata {
            id: r.id().to_string(),
            description: r.description().to_string(),
        }))
        .collect()
    }

    /// Returns the number of registered base-name rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no base-name rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Checks if a rule is enabled.
    fn is_rule_enabled(&self, rule_id: &str) -> bool {
        if self.disabled_rules.contains(rule_id) {
            return false;
        }
        if let Some(ref enabled) = self.enabled_only {
            return enabled.contains(rule_id);
        }
        true
    }

    /// Runs every applicable rule on one directory entry name.
    ///
    /// A name without the `.png` extension only ever yields the extension
    /// issue. All other rules run independently and every violation is kept.
    pub fn lint_filename(&self, file_name: &str) -> LintReport {
        let mut report = LintReport::new();
        report.files_scanned = 1;

        let name = match self.extension.check(file_name) {
            Ok(name) => name,
            Err(issue) => {
                if self.is_rule_enabled(self.extension.id()) {
                    report.add_issue(issue);
                }
                return report;
            }
        };

        for rule in &self.rules {
            if !self.is_rule_enabled(rule.id()) {
                continue;
            }
            for issue in rule.check(&name) {
                report.add_issue(issue);
            }
        }

        tracing::debug!(
            file_name,
            issues = report.total_issues(),
            "linted entry"
        );
        report
    }

    /// Lints each name in turn, merging results in iteration order.
    pub fn lint_names<I, S>(&self, names: I) -> LintReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = LintReport::new();
        for name in names {
            report.merge(self.lint_filename(name.as_ref()));
        }
        report
    }

    /// Lists `dir` and lints every entry.
    ///
    /// Fails without linting anything if the directory cannot be listed.
    pub fn lint_directory(&self, dir: &Path) -> Result<LintReport, ScanError> {
        let names = scan::list_entry_names(dir)?;
        let report = self.lint_names(&names);
        tracing::info!(
            directory = %dir.display(),
            entries = report.files_scanned,
            issues = report.total_issues(),
            "scanned emoji directory"
        );
        Ok(report)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::default_rules()
    }
}

/// Metadata about a lint rule for documentation/introspection.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RuleMetadata {
    /// Rule identifier.
    pub id: String,
    /// Human-readable description.
    pub description: String,
}
