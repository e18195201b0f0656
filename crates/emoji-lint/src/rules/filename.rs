//! Filename shape rules.
//!
//! Rules for the extension, the character set, and the separators between
//! codepoints in an emoji asset filename.

use std::sync::OnceLock;

use regex::Regex;

use crate::report::LintIssue;
use crate::rules::{AssetName, LintRule};

/// The only extension an emoji asset may carry.
pub const PNG_SUFFIX: &str = ".png";

/// Matches any character outside the filename alphabet.
const INVALID_CHAR_PATTERN: &str = r"[^A-FU0-9+_]";

static INVALID_CHAR_REGEX: OnceLock<Regex> = OnceLock::new();

fn invalid_char_regex() -> &'static Regex {
    INVALID_CHAR_REGEX.get_or_init(|| Regex::new(INVALID_CHAR_PATTERN).expect("invalid regex pattern"))
}

/// Builds the single issue a naming rule reports for `name`.
pub(crate) fn naming_issue(
    rule: &dyn LintRule,
    name: &AssetName,
    problem: &str,
    suggestion: &str,
) -> LintIssue {
    LintIssue::new(
        rule.id(),
        name.file_name,
        format!("Filename {} {}.", name.file_name, problem),
        suggestion,
    )
}

// ============================================================================
// Extension Gate
// ============================================================================

/// Rule: filename/non-png
/// Every entry in the emoji directory must be a `.png`.
///
/// This rule runs on the raw entry name before any other rule; an entry that
/// fails it has no base name and is not examined further.
pub struct NonPngRule;

impl NonPngRule {
    pub fn id(&self) -> &'static str {
        "filename/non-png"
    }

    pub fn description(&self) -> &'static str {
        "Entry is not a .png file"
    }

    /// Returns the asset name, or the issue to report when the entry is not a `.png`.
    pub fn check<'a>(&self, file_name: &'a str) -> Result<AssetName<'a>, LintIssue> {
        AssetName::from_file_name(file_name).ok_or_else(|| {
            LintIssue::new(
                self.id(),
                file_name,
                format!("Non-png file {} does not belong in the emoji directory.", file_name),
                "Only .png files should be placed here.",
            )
        })
    }
}

// ============================================================================
// Character and Separator Rules
// ============================================================================

/// Rule: filename/invalid-characters
/// Detects characters outside `A-F`, `U`, `0-9`, `+` and `_`.
pub struct InvalidCharactersRule;

impl LintRule for InvalidCharactersRule {
    fn id(&self) -> &'static str {
        "filename/invalid-characters"
    }

    fn description(&self) -> &'static str {
        "Name uses characters other than A-F, U, 0-9, + and _"
    }

    fn check(&self, name: &AssetName) -> Vec<LintIssue> {
        match invalid_char_regex().find(name.base_name) {
            Some(found) => vec![naming_issue(
                self,
                name,
                "contains invalid characters in its filename",
                "Only uppercase letters A-F and U, numbers, +, and _ should be used.",
            )
            .with_actual_value(found.as_str())],
            None => vec![],
        }
    }
}

/// Rule: filename/plus-separator
/// Detects `+` used between codepoints instead of `_`.
pub struct PlusSeparatorRule;

impl LintRule for PlusSeparatorRule {
    fn id(&self) -> &'static str {
        "filename/plus-separator"
    }

    fn description(&self) -> &'static str {
        "Codepoints are separated by + instead of _"
    }

    fn check(&self, name: &AssetName) -> Vec<LintIssue> {
        if name.base_name.contains("+U") {
            vec![naming_issue(
                self,
                name,
                "is incorrectly named",
                "\"_\" should be used as a separator between codepoints, not \"+\".",
            )
            .with_actual_value("+U")]
        } else {
            vec![]
        }
    }
}

/// Rule: filename/missing-underscore
/// Detects a `U` that neither starts the name nor follows a `_`.
pub struct MissingUnderscoreRule;

impl LintRule for MissingUnderscoreRule {
    fn id(&self) -> &'static str {
        "filename/missing-underscore"
    }

    fn description(&self) -> &'static str {
        "A codepoint after the first is not preceded by _"
    }

    fn check(&self, name: &AssetName) -> Vec<LintIssue> {
        let bytes = name.base_name.as_bytes();
        let missing = bytes
            .windows(2)
            .any(|pair| pair[1] == b'U' && pair[0] != b'_');

        if missing {
            vec![naming_issue(
                self,
                name,
                "is missing an underscore \"_\" between codepoints",
                "Separate codepoints with \"_\".",
            )]
        } else {
            vec![]
        }
    }
}

/// Rule: filename/missing-u
/// Detects a `_` that is not followed by `U`.
pub struct MissingURule;

impl LintRule for MissingURule {
    fn id(&self) -> &'static str {
        "filename/missing-u"
    }

    fn description(&self) -> &'static str {
        "An underscore is not followed by the U of a codepoint"
    }

    fn check(&self, name: &AssetName) -> Vec<LintIssue> {
        if followed_by_other(name.base_name.as_bytes(), b'_', b'U') {
            vec![naming_issue(
                self,
                name,
                "is either missing a \"U\" to indicate the start of a codepoint, \
                 or has a spurious underscore (\"_\")",
                "Prefix every codepoint with \"U+\".",
            )]
        } else {
            vec![]
        }
    }
}

/// Rule: filename/missing-plus
/// Detects a `U` that is not followed by `+`.
pub struct MissingPlusRule;

impl LintRule for MissingPlusRule {
    fn id(&self) -> &'static str {
        "filename/missing-plus"
    }

    fn description(&self) -> &'static str {
        "A U is not followed by +"
    }

    fn check(&self, name: &AssetName) -> Vec<LintIssue> {
        if followed_by_other(name.base_name.as_bytes(), b'U', b'+') {
            vec![naming_issue(
                self,
                name,
                "is either missing a \"+\" after a \"U\", or has a spurious \"U\"",
                "Write every codepoint as \"U+\" followed by hex digits.",
            )]
        } else {
            vec![]
        }
    }
}

/// True if some `marker` byte is followed by anything other than `expected`,
/// including the end of the name.
fn followed_by_other(bytes: &[u8], marker: u8, expected: u8) -> bool {
    bytes
        .iter()
        .enumerate()
        .any(|(i, &b)| b == marker && bytes.get(i + 1) != Some(&expected))
}
