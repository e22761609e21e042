//! herotype binary entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use herotype::cli::{Cli, Commands, ConfigCommands};
use herotype::logging::{self, LogTarget};
use herotype::tui::{Theme, Tone};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        let theme = Theme::default().for_cli();
        eprintln!("{}", theme.paint(Tone::Error, &format!("Error: {:#}", e)));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let full_screen = matches!(cli.command, Commands::Hero { .. });
    let log_target = match (cli.log_file, full_screen) {
        (Some(path), _) => LogTarget::File(path),
        (None, true) => LogTarget::Silent,
        (None, false) => LogTarget::Stderr,
    };
    logging::init(cli.verbose, log_target)?;

    match cli.command {
        Commands::Hero { config } => commands::hero::handle(config.as_deref()),
        Commands::Play {
            config,
            roles,
            cycles,
        } => commands::play::handle(config.as_deref(), roles, cycles),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show { config, json } => {
                commands::config::handle_show(config.as_deref(), json)
            }
            ConfigCommands::Init { force, path } => {
                commands::config::handle_init(force, path.as_deref())
            }
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
