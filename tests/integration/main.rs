//! Integration tests for herotype

mod cli_test;
mod config_test;
mod helpers;
mod typewriter_test;
