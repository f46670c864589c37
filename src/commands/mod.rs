//! Subcommand handlers for the binary.

pub mod analyze;
pub mod completions;
pub mod config;
pub mod extract;
