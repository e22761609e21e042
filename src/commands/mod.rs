//! Subcommand handlers

pub mod completions;
pub mod config;
pub mod hero;
pub mod play;
