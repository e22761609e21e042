//! Play subcommand handler

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use herotype::render::{LineMode, LineWriter};
use herotype::tui::Tone;
use herotype::typewriter::{self, CancelToken, RunLimit, SystemClock, Typewriter};
use herotype::Config;

/// Load the config, apply the command-line roles, and play.
pub fn handle(config_path: Option<&Path>, roles: Vec<String>, cycles: Option<u64>) -> Result<()> {
    let mut config = Config::load_or_default_path(config_path).context("Failed to load config")?;
    if !roles.is_empty() {
        config.hero.roles = roles;
    }
    let limit = cycles.map_or(RunLimit::Forever, RunLimit::Cycles);
    run_typewriter(&config, limit)
}

/// Run the typewriter on stdout until Ctrl-C or `limit`.
pub fn run_typewriter(config: &Config, limit: RunLimit) -> Result<()> {
    let roles = config.role_list()?;

    let cancel = CancelToken::new();
    let handler_token = cancel.clone();
    ctrlc::set_handler(move || handler_token.cancel())
        .context("Failed to install Ctrl-C handler")?;

    let writer = LineWriter::stdout();
    if writer.mode() == LineMode::Inline {
        let theme = config.theme().for_cli();
        println!("{}", theme.paint(Tone::Text, &config.hero.title));
    }

    let mut machine = Typewriter::start(roles, config.timings(), Some(writer), Instant::now())?;
    let summary = typewriter::run(&mut machine, &SystemClock, &cancel, limit);
    machine.target_mut().finish()?;

    tracing::info!(
        steps = summary.steps,
        cycles = summary.cycles,
        "playback finished"
    );
    Ok(())
}
