//! Test fixture utilities for creating synthetic emoji directories.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory standing in for `Base/res/emoji`.
pub struct EmojiDirFixture {
    pub root: TempDir,
}

impl EmojiDirFixture {
    /// Create a new empty emoji directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        Self { root }
    }

    /// Create a fixture holding an empty file for each name.
    pub fn with_files(names: &[&str]) -> Self {
        let fixture = Self::new();
        for name in names {
            fixture.add_file(name);
        }
        fixture
    }

    /// Get the directory path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Add an empty file. Contents are never inspected by the linter.
    pub fn add_file(&self, name: &str) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, b"").expect("Failed to write fixture file");
        path
    }

    /// Add a subdirectory entry.
    pub fn add_dir(&self, name: &str) -> PathBuf {
        let path = self.root.path().join(name);
        fs::create_dir(&path).expect("Failed to create fixture dir");
        path
    }

    /// Path inside the fixture that does not exist.
    pub fn missing_path(&self) -> PathBuf {
        self.root.path().join("no-such-directory")
    }
}

impl Default for EmojiDirFixture {
    fn default() -> Self {
        Self::new()
    }
}
