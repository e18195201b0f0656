//! Lint rule trait and the naming rule modules.

use crate::report::LintIssue;

pub mod codepoint;
pub mod filename;

/// A directory entry that passed the extension check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetName<'a> {
    /// Full entry name as listed (e.g. "U+1F600.png").
    pub file_name: &'a str,
    /// Entry name with the `.png` suffix removed (e.g. "U+1F600").
    pub base_name: &'a str,
}

impl<'a> AssetName<'a> {
    /// Splits `file_name` into an asset name, or returns `None` if it is not a `.png`.
    ///
    /// The suffix comparison is case-insensitive.
    pub fn from_file_name(file_name: &'a str) -> Option<Self> {
        let split = file_name.len().checked_sub(filename::PNG_SUFFIX.len())?;
        if !file_name.is_char_boundary(split) {
            return None;
        }
        let (base_name, suffix) = file_name.split_at(split);
        if !suffix.eq_ignore_ascii_case(filename::PNG_SUFFIX) {
            return None;
        }
        Some(Self {
            file_name,
            base_name,
        })
    }
}

/// A naming rule evaluated against the base name of a `.png` entry.
pub trait LintRule: Send + Sync {
    /// Unique identifier (e.g., "filename/missing-u", "codepoint/out-of-range").
    fn id(&self) -> &'static str;

    /// Human-readable description.
    fn description(&self) -> &'static str;

    /// Run the check. A rule reports at most one issue per name.
    fn check(&self, name: &AssetName) -> Vec<LintIssue>;
}

/// Returns every base-name rule in evaluation order.
pub fn all_rules() -> Vec<Box<dyn LintRule>> {
    vec![
        Box::new(filename::InvalidCharactersRule),
        Box::new(codepoint::LeadingZeroRule),
        Box::new(filename::PlusSeparatorRule),
        Box::new(filename::MissingUnderscoreRule),
        Box::new(filename::MissingURule),
        Box::new(filename::MissingPlusRule),
        Box::new(codepoint::PresentationSelectorRule),
        Box::new(codepoint::InvalidCodePointRule),
        Box::new(codepoint::CodePointRangeRule),
    ]
}
