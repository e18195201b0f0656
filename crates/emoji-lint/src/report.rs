//! Lint report types for structured output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single naming violation detected for a directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintIssue {
    /// Identifier of the rule that fired (e.g., "filename/non-png", "codepoint/leading-zero").
    pub rule_id: String,

    /// The directory entry this issue was raised for.
    pub file_name: String,

    /// Human-readable description of the issue, naming the file.
    pub message: String,

    /// Human-readable explanation of how to fix.
    pub suggestion: String,

    /// The offending fragment of the name, when a rule can point at one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_value: Option<String>,
}

impl LintIssue {
    /// Creates a new lint issue with required fields.
    pub fn new(
        rule_id: impl Into<String>,
        file_name: impl Into<String>,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            file_name: file_name.into(),
            message: message.into(),
            suggestion: suggestion.into(),
            actual_value: None,
        }
    }

    /// Builder method to set the offending fragment.
    pub fn with_actual_value(mut self, value: impl Into<String>) -> Self {
        self.actual_value = Some(value.into());
        self
    }
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.message, self.suggestion)
    }
}

/// Complete lint report for a validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintReport {
    /// True if no issues were found.
    pub ok: bool,
    /// Number of directory entries examined.
    pub files_scanned: usize,
    /// Issues in the order they were detected.
    pub issues: Vec<LintIssue>,
}

impl LintReport {
    /// Creates a new empty lint report.
    pub fn new() -> Self {
        Self {
            ok: true,
            files_scanned: 0,
            issues: Vec::new(),
        }
    }

    /// Adds an issue to the report.
    pub fn add_issue(&mut self, issue: LintIssue) {
        self.ok = false;
        self.issues.push(issue);
    }

    /// Merges another report into this one, keeping issue order.
    pub fn merge(&mut self, other: LintReport) {
        self.files_scanned += other.files_scanned;
        for issue in other.issues {
            self.add_issue(issue);
        }
    }

    /// Returns true if any issue was found.
    pub fn has_problems(&self) -> bool {
        !self.ok
    }

    /// Returns the total issue count.
    pub fn total_issues(&self) -> usize {
        self.issues.len()
    }

    /// Returns the number of distinct files with at least one issue.
    pub fn files_with_issues(&self) -> usize {
        let mut names: Vec<&str> = self.issues.iter().map(|i| i.file_name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        names.len()
    }
}

impl Default for LintReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lint_issue_builder() {
        let issue = LintIssue::new(
            "codepoint/leading-zero",
            "U+0041.png",
            "Filename U+0041.png contains codepoint(s) with leading zeros.",
            "Leading zeros should be removed from codepoint(s).",
        )
        .with_actual_value("U+0");

        assert_eq!(issue.rule_id, "codepoint/leading-zero");
        assert_eq!(issue.actual_value, Some("U+0".to_string()));
        assert_eq!(
            issue.to_string(),
            "Filename U+0041.png contains codepoint(s) with leading zeros. \
             Leading zeros should be removed from codepoint(s)."
        );
    }

    #[test]
    fn test_lint_report_add_issue() {
        let mut report = LintReport::new();
        assert!(report.ok);
        assert!(!report.has_problems());

        report.add_issue(LintIssue::new("filename/non-png", "a.txt", "bad", "fix"));
        assert!(!report.ok);
        assert!(report.has_problems());
        assert_eq!(report.total_issues(), 1);
    }

    #[test]
    fn test_merge_keeps_order_and_counts() {
        let mut first = LintReport::new();
        first.files_scanned = 1;
        first.add_issue(LintIssue::new("a", "one.png", "m1", "s1"));

        let mut second = LintReport::new();
        second.files_scanned = 2;
        second.add_issue(LintIssue::new("b", "two.png", "m2", "s2"));
        second.add_issue(LintIssue::new("c", "two.png", "m3", "s3"));

        first.merge(second);
        assert_eq!(first.files_scanned, 3);
        let ids: Vec<&str> = first.issues.iter().map(|i| i.rule_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(first.files_with_issues(), 2);
    }

    #[test]
    fn test_merge_of_clean_report_stays_ok() {
        let mut report = LintReport::new();
        let mut clean = LintReport::new();
        clean.files_scanned = 4;
        report.merge(clean);
        assert!(report.ok);
        assert_eq!(report.files_scanned, 4);
    }
}
