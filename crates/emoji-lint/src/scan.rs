//! Directory listing and the one-shot validation pass.

use std::fs;
use std::path::{Path, PathBuf};

use crate::registry::RuleRegistry;
use crate::report::LintReport;

/// Errors that stop a scan before any entry is linted.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The directory could not be opened or an entry could not be read.
    #[error("error reading directory {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Lists the names of every entry directly inside `dir`, sorted.
///
/// Subdirectories and other non-file entries are included. Names that are
/// not valid UTF-8 are converted lossily.
pub fn list_entry_names(dir: &Path) -> Result<Vec<String>, ScanError> {
    let read_dir_error = |source: std::io::Error| ScanError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let name = entry.file_name().into_string().unwrap_or_else(|raw| {
            let lossy = raw.to_string_lossy().into_owned();
            tracing::warn!(name = %lossy, "entry name is not valid UTF-8");
            lossy
        });
        names.push(name);
    }
    names.sort();
    Ok(names)
}

/// Validates every entry of `dir` with the default rule set.
pub fn validate_directory(dir: &Path) -> Result<LintReport, ScanError> {
    RuleRegistry::default_rules().lint_directory(dir)
}
