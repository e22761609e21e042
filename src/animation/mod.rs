//! Time-driven hero animations
//!
//! - `counter`: stats counting up to their target
//! - `skills`: skill bars filling one after another
//!
//! Both are pure functions of elapsed time so the TUI can redraw them at any
//! frame rate.

pub mod counter;
pub mod skills;

pub use counter::{format_number, Counter};
pub use skills::{build_skill_bar_chars, SkillStagger};
