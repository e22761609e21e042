//! Blocking driver loop for a typewriter.
//!
//! Sleeps until the machine's next deadline, polls it, and repeats until a
//! `CancelToken` fires or a cycle limit is reached. Time comes from a
//! `Clock` so tests can run the loop on a manual clock.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::render::RenderTarget;

use super::machine::Typewriter;

/// Longest single sleep, so a cancel is noticed within this bound.
const MAX_SLEEP_SLICE: Duration = Duration::from_millis(50);

/// Cloneable cancellation flag shared between the driver and e.g. a
/// Ctrl-C handler.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Source of time for the driver loop.
pub trait Clock {
    fn now(&self) -> Instant;
    fn sleep(&self, duration: Duration);
}

/// Wall clock backed by `Instant::now` and `thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// When the driver should stop on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunLimit {
    /// Only a cancel stops the loop
    #[default]
    Forever,
    /// Stop once this many full passes over the role list completed
    Cycles(u64),
}

/// Why the driver returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The cancel token fired
    Cancelled,
    /// The cycle limit was reached
    LimitReached,
}

/// Summary of a finished driver run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub steps: u64,
    pub cycles: u64,
    pub reason: StopReason,
}

/// Drive `machine` until `cancel` fires or `limit` is reached.
///
/// The machine is cancelled before returning either way, so no step is left
/// pending.
pub fn run<T, C>(
    machine: &mut Typewriter<T>,
    clock: &C,
    cancel: &CancelToken,
    limit: RunLimit,
) -> RunSummary
where
    T: RenderTarget,
    C: Clock + ?Sized,
{
    let reason = loop {
        if cancel.is_cancelled() {
            break StopReason::Cancelled;
        }
        if let RunLimit::Cycles(n) = limit {
            if machine.state().cycles() >= n {
                break StopReason::LimitReached;
            }
        }

        let now = clock.now();
        match machine.time_until_next(now) {
            // Cancelled (or paused) by someone else; nothing will ever be due
            None => break StopReason::Cancelled,
            Some(wait) if wait.is_zero() => {
                machine.poll(now);
            }
            Some(wait) => clock.sleep(wait.min(MAX_SLEEP_SLICE)),
        }
    };

    machine.cancel();

    let summary = RunSummary {
        steps: machine.steps(),
        cycles: machine.state().cycles(),
        reason,
    };
    tracing::debug!(
        steps = summary.steps,
        cycles = summary.cycles,
        reason = ?summary.reason,
        "typewriter driver stopped"
    );
    summary
}
