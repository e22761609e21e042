//! Development tasks for herotype
//!
//! Run with `cargo run -p xtask -- <task>`.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate the man page
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
    /// Generate completion scripts for all supported shells
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => man(out),
        Task::Completions { out } => completions(out),
    }
}

fn man(out: PathBuf) -> Result<()> {
    fs::create_dir_all(&out).with_context(|| format!("Failed to create {}", out.display()))?;
    let cmd = herotype::cli::Cli::command();
    let path = out.join("herotype.1");

    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd).render(&mut buffer)?;
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Wrote {}", path.display());
    Ok(())
}

fn completions(out: PathBuf) -> Result<()> {
    fs::create_dir_all(&out).with_context(|| format!("Failed to create {}", out.display()))?;
    let mut cmd = herotype::cli::Cli::command();

    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
        let path = clap_complete::generate_to(shell, &mut cmd, "herotype", &out)?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}
