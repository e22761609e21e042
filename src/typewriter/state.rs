//! Typewriter state and timing types
//!
//! Contains the `TypewriterState` record mutated by the machine's steps,
//! the `Phase` enum, and the `Timings` that set the delay between steps.

use std::fmt;
use std::time::Duration;

/// One of the four states of the typewriter state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Appending one character per step
    #[default]
    Typing,
    /// Full role shown, waiting before erasing
    PausedAfterTyping,
    /// Removing one character per step
    Erasing,
    /// Display empty, waiting before typing the next role
    PausedAfterErasing,
}

impl Phase {
    /// Whether this phase is one of the two holds between typing and erasing.
    pub fn is_pause(&self) -> bool {
        matches!(self, Phase::PausedAfterTyping | Phase::PausedAfterErasing)
    }

    /// Short label for logs and the status line.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Typing => "typing",
            Phase::PausedAfterTyping => "holding",
            Phase::Erasing => "erasing",
            Phase::PausedAfterErasing => "next",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Mutable state of a running typewriter.
///
/// `char_count` is always a valid prefix length of the role at
/// `role_index`; only the machine's own steps change these fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypewriterState {
    pub(crate) role_index: usize,
    pub(crate) char_count: usize,
    pub(crate) phase: Phase,
    pub(crate) cycles: u64,
}

impl TypewriterState {
    /// Index of the active role.
    pub fn role_index(&self) -> usize {
        self.role_index
    }

    /// Number of characters of the active role currently shown.
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of times the role list wrapped back to the first role.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }
}

/// Delays between typewriter steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Delay between typed characters
    pub type_interval: Duration,
    /// Hold with the full role shown
    pub hold_after_typing: Duration,
    /// Delay between erased characters
    pub erase_interval: Duration,
    /// Hold with the display empty before the next role
    pub hold_after_erasing: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            type_interval: Duration::from_millis(100),
            hold_after_typing: Duration::from_millis(2000),
            erase_interval: Duration::from_millis(50),
            hold_after_erasing: Duration::from_millis(500),
        }
    }
}

impl Timings {
    /// All delays zero; every poll runs a step. Useful for tests and dumps.
    pub fn instant() -> Self {
        Self {
            type_interval: Duration::ZERO,
            hold_after_typing: Duration::ZERO,
            erase_interval: Duration::ZERO,
            hold_after_erasing: Duration::ZERO,
        }
    }

    /// Total time to type, hold, erase and hold a role of `chars` characters.
    ///
    /// The first typed character appears without delay, so typing takes
    /// `chars - 1` intervals. Counts beyond `u32::MAX` saturate.
    pub fn cycle_duration(&self, chars: usize) -> Duration {
        let n = u32::try_from(chars).unwrap_or(u32::MAX);
        self.type_interval * n.saturating_sub(1)
            + self.hold_after_typing
            + self.erase_interval * n.saturating_sub(1)
            + self.hold_after_erasing
    }
}
