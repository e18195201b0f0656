//! emoji-lint End-to-End Test Infrastructure
//!
//! Fixtures for building throwaway emoji directories, shared by the
//! integration tests here and the CLI tests in `emoji-lint-cli`.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p emoji-lint-tests
//! ```

pub mod fixtures;

pub use fixtures::EmojiDirFixture;
