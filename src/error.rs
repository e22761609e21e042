//! Error types for the typewriter and the configuration file.

use std::path::PathBuf;

/// A typewriter that cannot be started.
///
/// These are detected when the machine is built; a caller that receives one
/// simply does not start the animation loop.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidConfiguration {
    #[error("Role list is empty; at least one role is required")]
    EmptyRoleList,

    #[error("Role {index} is empty")]
    EmptyRole { index: usize },

    #[error("No render target available")]
    MissingRenderTarget,
}

/// Errors that can occur while loading or saving the configuration file.
///
/// Messages name the operation only; the cause is the error's `source()`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the user configuration directory")]
    NoConfigDir,

    #[error("Failed to read config {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write config {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config")]
    Serialize(#[from] toml::ser::Error),

    #[error("Unknown theme '{0}' (expected default, classic or ocean)")]
    UnknownTheme(String),

    #[error("Skill '{name}' has percentage {percentage}, expected 0-100")]
    PercentageOutOfRange { name: String, percentage: u8 },

    #[error("Invalid roles")]
    Roles(#[from] InvalidConfiguration),
}
