//! emoji-lint CLI library.
//!
//! Command implementations and logging setup for the `check-emoji` binary.

pub mod commands;
pub mod logging;
