//! Hero subcommand handler

use std::path::Path;

use anyhow::{Context, Result};

use herotype::tui::HeroApp;
use herotype::typewriter::RunLimit;
use herotype::Config;

use super::play;

/// Show the hero screen, or line-mode output when stdout is not a terminal.
#[cfg(not(tarpaulin_include))]
pub fn handle(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load_or_default_path(config_path).context("Failed to load config")?;

    if !atty::is(atty::Stream::Stdout) {
        tracing::warn!("stdout is not a terminal, falling back to line mode");
        return play::run_typewriter(&config, RunLimit::Forever);
    }

    let mut app = HeroApp::new(&config)?;
    app.run()
}
