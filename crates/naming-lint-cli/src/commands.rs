//! Subcommand implementations.

pub mod check;
pub mod dump;
pub mod init;
pub mod list_rules;
pub mod output;
