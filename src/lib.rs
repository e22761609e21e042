//! herotype - terminal hero banner
//!
//! A role typewriter state machine with pluggable render targets, hosted in
//! a ratatui hero screen (title, typed roles, counters, skill bars) or a
//! plain line-mode player.

pub mod animation;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod tui;
pub mod typewriter;

pub use config::Config;
pub use error::{ConfigError, InvalidConfiguration};
pub use render::RenderTarget;
pub use typewriter::{RoleList, Timings, Typewriter};
