//! The role typewriter state machine.
//!
//! A `Typewriter` owns its state and holds at most one pending step (a
//! deadline). The host drives it by calling [`Typewriter::poll`] with the
//! current time; each step renders one full string to the target and arms
//! exactly one follow-up step. [`Typewriter::cancel`] clears the pending
//! step, after which the machine never mutates or renders again.

use std::time::{Duration, Instant};

use crate::error::InvalidConfiguration;
use crate::render::RenderTarget;

use super::roles::{Role, RoleList};
use super::state::{Phase, Timings, TypewriterState};

/// Scheduling state of the single pending step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    /// Next step runs at this instant
    At(Instant),
    /// Suspended with this much delay left
    Paused(Duration),
    /// Cancelled; nothing will run again
    Cancelled,
}

/// Typewriter bound to a render target.
#[derive(Debug)]
pub struct Typewriter<T: RenderTarget> {
    roles: RoleList,
    timings: Timings,
    state: TypewriterState,
    target: T,
    pending: Pending,
    steps: u64,
}

impl<T: RenderTarget> Typewriter<T> {
    /// Bind a typewriter to `target` and schedule its first step at `now`.
    ///
    /// Fails with [`InvalidConfiguration::MissingRenderTarget`] when there is
    /// no target; the caller should then not start its loop.
    pub fn start(
        roles: RoleList,
        timings: Timings,
        target: Option<T>,
        now: Instant,
    ) -> Result<Self, InvalidConfiguration> {
        let target = target.ok_or(InvalidConfiguration::MissingRenderTarget)?;

        tracing::debug!(roles = roles.len(), "typewriter started");

        Ok(Self {
            roles,
            timings,
            state: TypewriterState::default(),
            target,
            pending: Pending::At(now),
            steps: 0,
        })
    }

    // === Scheduling ===

    /// Run the pending step if it is due at `now`.
    ///
    /// Runs at most one step and re-arms the next one relative to `now`, so
    /// a late poll delays the rest of the animation rather than bursting
    /// through missed steps. Returns whether a step ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Pending::At(deadline) if deadline <= now => {
                let delay = self.step();
                self.pending = Pending::At(now + delay);
                true
            }
            _ => false,
        }
    }

    /// Instant at which the pending step is due, if one is armed.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.pending {
            Pending::At(deadline) => Some(deadline),
            Pending::Paused(_) | Pending::Cancelled => None,
        }
    }

    /// Time left until the pending step; zero if it is already due.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Clear the pending step. No further state change or render happens.
    pub fn cancel(&mut self) {
        if self.pending != Pending::Cancelled {
            tracing::debug!(steps = self.steps, "typewriter cancelled");
        }
        self.pending = Pending::Cancelled;
    }

    /// Suspend the pending step, remembering how long it still had to wait.
    pub fn pause(&mut self, now: Instant) {
        if let Pending::At(deadline) = self.pending {
            self.pending = Pending::Paused(deadline.saturating_duration_since(now));
        }
    }

    /// Re-arm a paused step with its remaining delay.
    pub fn resume(&mut self, now: Instant) {
        if let Pending::Paused(remaining) = self.pending {
            self.pending = Pending::At(now + remaining);
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.pending == Pending::Cancelled
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.pending, Pending::Paused(_))
    }

    // === Accessors ===

    pub fn state(&self) -> &TypewriterState {
        &self.state
    }

    pub fn roles(&self) -> &RoleList {
        &self.roles
    }

    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    /// The role currently being typed or erased.
    pub fn current_role(&self) -> &Role {
        &self.roles[self.state.role_index]
    }

    /// The text the target was last given.
    pub fn displayed(&self) -> &str {
        self.current_role().prefix(self.state.char_count)
    }

    /// Total steps run since start.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }

    // === Transitions ===

    /// Perform the current phase's action and return the delay before the
    /// next step.
    fn step(&mut self) -> Duration {
        self.steps += 1;
        let delay = match self.state.phase {
            Phase::Typing => self.type_char(),
            Phase::PausedAfterTyping => {
                self.state.phase = Phase::Erasing;
                self.erase_char()
            }
            Phase::Erasing => self.erase_char(),
            Phase::PausedAfterErasing => {
                self.state.phase = Phase::Typing;
                self.type_char()
            }
        };

        tracing::trace!(
            role = self.state.role_index,
            chars = self.state.char_count,
            phase = %self.state.phase,
            "typewriter step"
        );

        delay
    }

    fn type_char(&mut self) -> Duration {
        let len = self.current_role().char_len();
        self.state.char_count = (self.state.char_count + 1).min(len);
        self.render();

        if self.state.char_count == len {
            self.state.phase = Phase::PausedAfterTyping;
            self.timings.hold_after_typing
        } else {
            self.timings.type_interval
        }
    }

    fn erase_char(&mut self) -> Duration {
        self.state.char_count = self.state.char_count.saturating_sub(1);
        self.render();

        if self.state.char_count == 0 {
            self.state.phase = Phase::PausedAfterErasing;
            self.state.role_index = self.roles.next_index(self.state.role_index);
            if self.state.role_index == 0 {
                self.state.cycles += 1;
            }
            self.timings.hold_after_erasing
        } else {
            self.timings.erase_interval
        }
    }

    fn render(&mut self) {
        let text = self.roles[self.state.role_index].prefix(self.state.char_count);
        self.target.render(text);
    }
}
