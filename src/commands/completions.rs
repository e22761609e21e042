//! Shell completion generation

use std::io;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;

use herotype::cli::Cli;

/// Print completions for `shell` to stdout.
pub fn handle(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "herotype", &mut io::stdout());
    Ok(())
}
