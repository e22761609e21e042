//! Command-line interface definitions
//!
//! Lives in the library so `xtask` can generate man pages and completions
//! from the same definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

#[cfg(not(feature = "release"))]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("HEROTYPE_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("HEROTYPE_BUILD_DATE"),
    ")"
);

/// Terminal hero banner with a role typewriter, counters and skill bars
#[derive(Parser, Debug)]
#[command(name = "herotype", version, long_version = LONG_VERSION, about)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the full-screen hero banner
    ///
    /// Falls back to `play` when stdout is not a terminal.
    Hero {
        /// Config file to use instead of the user config
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,
    },

    /// Type and erase the roles on a single line
    Play {
        /// Config file to use instead of the user config
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Role to show; repeat for several (replaces the configured roles)
        #[arg(long = "role", value_name = "TEXT")]
        roles: Vec<String>,

        /// Stop after this many passes over the role list
        #[arg(long, value_name = "N")]
        cycles: Option<u64>,
    },

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show {
        /// Config file to use instead of the user config
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Print JSON instead of TOML
        #[arg(long)]
        json: bool,
    },

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,

        /// Write here instead of the user config path
        #[arg(long, value_name = "PATH")]
        path: Option<PathBuf>,
    },

    /// Print the path of the user configuration file
    Path,
}
