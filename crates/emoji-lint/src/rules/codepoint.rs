//! Codepoint value rules.
//!
//! Rules that look at the codepoints a filename spells out rather than at
//! its punctuation.

use crate::report::LintIssue;
use crate::rules::filename::naming_issue;
use crate::rules::{AssetName, LintRule};

/// Highest valid Unicode scalar value.
pub const MAX_CODE_POINT: u64 = 0x10FFFF;

/// The emoji presentation selector, which must not appear in a name.
pub const PRESENTATION_SELECTOR: &str = "U+FE0F";

/// Separator between codepoint tokens.
pub const TOKEN_SEPARATOR: char = '_';

/// Prefix of every codepoint token.
pub const TOKEN_PREFIX: &str = "U+";

/// Why a codepoint token failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// The token does not start with `U+`.
    MissingPrefix,
    /// Nothing follows the `U+` prefix.
    NoDigits,
    /// A character after the prefix is not a hex digit.
    InvalidDigit,
}

/// Parses one `U+<hex>` token.
///
/// Lowercase hex digits are accepted here; the character-set rule reports
/// them separately. Values too wide for a `u64` saturate, which still places
/// them above [`MAX_CODE_POINT`].
pub fn parse_token(token: &str) -> Result<u64, TokenError> {
    let digits = token
        .strip_prefix(TOKEN_PREFIX)
        .ok_or(TokenError::MissingPrefix)?;
    if digits.is_empty() {
        return Err(TokenError::NoDigits);
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(TokenError::InvalidDigit);
    }
    Ok(u64::from_str_radix(digits, 16).unwrap_or(u64::MAX))
}

/// Parses every `_`-separated token of a base name.
pub fn parse_code_points(base_name: &str) -> Result<Vec<u64>, TokenError> {
    base_name.split(TOKEN_SEPARATOR).map(parse_token).collect()
}

/// Rule: codepoint/leading-zero
/// Detects `U+0`, i.e. a codepoint written with a leading zero.
pub struct LeadingZeroRule;

impl LintRule for LeadingZeroRule {
    fn id(&self) -> &'static str {
        "codepoint/leading-zero"
    }

    fn description(&self) -> &'static str {
        "A codepoint is written with leading zeros"
    }

    fn check(&self, name: &AssetName) -> Vec<LintIssue> {
        if name.base_name.contains("U+0") {
            vec![naming_issue(
                self,
                name,
                "contains codepoint(s) with leading zeros",
                "Leading zeros should be removed from codepoint(s).",
            )
            .with_actual_value("U+0")]
        } else {
            vec![]
        }
    }
}

/// Rule: codepoint/presentation-selector
/// Detects the emoji presentation selector U+FE0F.
pub struct PresentationSelectorRule;

impl LintRule for PresentationSelectorRule {
    fn id(&self) -> &'static str {
        "codepoint/presentation-selector"
    }

    fn description(&self) -> &'static str {
        "Name includes the emoji presentation selector U+FE0F"
    }

    fn check(&self, name: &AssetName) -> Vec<LintIssue> {
        if name.base_name.contains(PRESENTATION_SELECTOR) {
            vec![naming_issue(
                self,
                name,
                "should not include any emoji presentation selectors",
                "U+FE0F codepoints should be removed from the filename.",
            )
            .with_actual_value(PRESENTATION_SELECTOR)]
        } else {
            vec![]
        }
    }
}

/// Rule: codepoint/invalid
/// Detects tokens that are not `U+` followed by hex digits.
pub struct InvalidCodePointRule;

impl LintRule for InvalidCodePointRule {
    fn id(&self) -> &'static str {
        "codepoint/invalid"
    }

    fn description(&self) -> &'static str {
        "A token is not U+ followed by hexadecimal digits"
    }

    fn check(&self, name: &AssetName) -> Vec<LintIssue> {
        let bad_token = name
            .base_name
            .split(TOKEN_SEPARATOR)
            .find(|token| parse_token(token).is_err());

        match bad_token {
            Some(token) => vec![naming_issue(
                self,
                name,
                "contains invalid Unicode code points",
                "Codepoints must be written as U+ followed by hexadecimal digits.",
            )
            .with_actual_value(token)],
            None => vec![],
        }
    }
}

/// Rule: codepoint/out-of-range
/// Detects codepoints above U+10FFFF.
///
/// Only fires when every token parsed, so it never overlaps with
/// `codepoint/invalid`.
pub struct CodePointRangeRule;

impl LintRule for CodePointRangeRule {
    fn id(&self) -> &'static str {
        "codepoint/out-of-range"
    }

    fn description(&self) -> &'static str {
        "A codepoint exceeds U+10FFFF"
    }

    fn check(&self, name: &AssetName) -> Vec<LintIssue> {
        let Ok(values) = parse_code_points(name.base_name) else {
            return vec![];
        };

        match values.into_iter().find(|&value| value > MAX_CODE_POINT) {
            Some(value) => vec![naming_issue(
                self,
                name,
                "contains a code point exceeding U+10FFFF",
                "Codepoints must lie within U+0..U+10FFFF.",
            )
            .with_actual_value(format!("U+{:X}", value))],
            None => vec![],
        }
    }
}
