//! Role typewriter
//!
//! Types and erases a fixed, ordered list of role strings in a loop:
//!
//! - `roles`: the validated `RoleList`
//! - `state`: `TypewriterState`, `Phase` and `Timings`
//! - `machine`: the `Typewriter` state machine with its single pending step
//! - `driver`: a blocking loop with cancellation for line-mode output
//!
//! # Usage
//!
//! ```
//! use std::time::Instant;
//! use herotype::typewriter::{RoleList, Timings, Typewriter};
//!
//! let roles = RoleList::new(["A", "BC"]).unwrap();
//! let now = Instant::now();
//! let target: Vec<String> = Vec::new();
//! let mut tw = Typewriter::start(roles, Timings::instant(), Some(target), now).unwrap();
//! for _ in 0..4 {
//!     tw.poll(now);
//! }
//! assert_eq!(tw.target(), &vec!["A", "", "B", "BC"]);
//! ```

pub mod driver;
mod machine;
mod roles;
pub mod state;

pub use driver::{run, CancelToken, Clock, RunLimit, RunSummary, StopReason, SystemClock};
pub use machine::Typewriter;
pub use roles::{Role, RoleList};
pub use state::{Phase, Timings, TypewriterState};
