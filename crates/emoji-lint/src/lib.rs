//! Filename lint system for emoji image assets.
//!
//! Emoji assets are named after the codepoints they render, e.g.
//! `U+1F3F3_U+200D_U+1F308.png`. This crate checks a directory of such
//! files and reports every naming violation.
//!
//! # Example
//!
//! ```no_run
//! use emoji_lint::RuleRegistry;
//! use std::path::Path;
//!
//! let registry = RuleRegistry::default_rules();
//! let report = registry.lint_directory(Path::new("Base/res/emoji")).unwrap();
//!
//! if report.has_problems() {
//!     for issue in &report.issues {
//!         println!("{}", issue);
//!     }
//! }
//! ```

pub mod config;
pub mod registry;
pub mod report;
pub mod rules;
pub mod scan;

pub use config::{resolve_target_dir, ConfigError, DEFAULT_EMOJI_SUBDIR};
pub use registry::{RuleMetadata, RuleRegistry};
pub use report::{LintIssue, LintReport};
pub use rules::{AssetName, LintRule};
pub use scan::{validate_directory, ScanError};
