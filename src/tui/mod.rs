//! TUI (Text User Interface) module for herotype
//!
//! This module provides the full-screen hero banner using ratatui/crossterm.

pub mod footer;
pub mod hero_app;
pub mod theme;
pub mod ui;

pub use hero_app::{HeroApp, HeroState, InputResult};
pub use theme::{Theme, Tone};
