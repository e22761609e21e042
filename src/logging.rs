//! Tracing initialisation for the herotype binary.
//!
//! `RUST_LOG` wins over the `-v` count. Where the output goes depends on the
//! command: the hero screen owns the terminal, so it only logs to a file.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Destination of log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// Drop everything (full-screen mode without a log file)
    Silent,
}

/// Default level for a `-v` count: warn, info, debug, then trace.
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber.
///
/// Only the first call in a process takes effect.
pub fn init(verbosity: u8, target: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity).as_str()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match target {
        LogTarget::Stderr => {
            builder.with_writer(std::io::stderr).try_init().ok();
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .ok();
        }
        LogTarget::Silent => {
            builder.with_writer(std::io::sink).try_init().ok();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0), Level::WARN);
        assert_eq!(level_for(1), Level::INFO);
        assert_eq!(level_for(2), Level::DEBUG);
        assert_eq!(level_for(3), Level::TRACE);
        assert_eq!(level_for(200), Level::TRACE);
    }

    #[test]
    fn unwritable_log_file_is_an_error() {
        let err = init(0, LogTarget::File(PathBuf::from("/nonexistent/dir/herotype.log")))
            .unwrap_err();
        assert!(err.to_string().contains("herotype.log"));
    }
}
