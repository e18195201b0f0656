//! Resolution of the directory to validate.

use std::path::{Path, PathBuf};

/// Emoji directory relative to the directory holding the executable.
pub const DEFAULT_EMOJI_SUBDIR: &str = "../Base/res/emoji";

/// Errors raised while working out which directory to scan.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The running executable could not be located.
    #[error("could not locate the running executable")]
    ExecutableLocation(#[source] std::io::Error),
}

/// Returns the directory to validate.
///
/// An explicit path always wins. Otherwise the emoji directory is found
/// relative to the running executable.
pub fn resolve_target_dir(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    let exe = std::env::current_exe().map_err(ConfigError::ExecutableLocation)?;
    Ok(default_target_dir(&exe))
}

/// Emoji directory for an executable installed at `exe`.
pub fn default_target_dir(exe: &Path) -> PathBuf {
    exe.parent()
        .unwrap_or_else(|| Path::new(""))
        .join(DEFAULT_EMOJI_SUBDIR)
}
