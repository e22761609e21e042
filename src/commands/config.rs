//! Config subcommands handler

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};

use herotype::tui::{Theme, Tone};
use herotype::Config;

/// Show the effective configuration as TOML or JSON.
pub fn handle_show(config_path: Option<&Path>, json: bool) -> Result<()> {
    let config = Config::load_or_default_path(config_path).context("Failed to load config")?;
    let text = if json {
        serde_json::to_string_pretty(&config)?
    } else {
        config.to_toml()?
    };
    println!("{}", text.trim_end());
    Ok(())
}

/// Write the default configuration.
///
/// An existing file is only replaced with `--force` or after confirmation.
pub fn handle_init(force: bool, path: Option<&Path>) -> Result<()> {
    let theme = Theme::default().for_cli();
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::config_path()?,
    };

    if path.exists()
        && !force
        && !prompt_confirmation(&format!("Overwrite {}?", path.display()), &theme)?
    {
        println!("{}", theme.paint(Tone::Text, "No changes made."));
        return Ok(());
    }

    Config::default().save_to(&path)?;
    tracing::info!(path = %path.display(), "default config written");
    println!(
        "{}",
        theme.paint(Tone::Success, &format!("Config written to {}", path.display()))
    );
    Ok(())
}

/// Print where the user configuration lives.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Prompt user for yes/no confirmation.
///
/// Returns true if user confirms (y/yes), false otherwise.
/// If stdin is not a TTY (non-interactive), returns false.
fn prompt_confirmation(message: &str, theme: &Theme) -> Result<bool> {
    if !atty::is(atty::Stream::Stdin) {
        println!(
            "{}",
            theme.paint(Tone::Muted, "Non-interactive mode: use --force to overwrite")
        );
        return Ok(false);
    }

    print!("{} [y/N] ", theme.paint(Tone::Text, message));
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
