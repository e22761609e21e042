//! Count-up animation for the hero stats.
//!
//! A counter advances in fixed 16 ms frames; the first frame is shown
//! immediately. After `k` frames the raw value is `k * target / frames`,
//! where `frames = duration / 16ms`. The display rounds up until the raw
//! value reaches the target and then shows the target exactly.

use std::time::Duration;

/// Length of one animation frame.
pub const FRAME: Duration = Duration::from_millis(16);

/// Default count-up duration.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);

/// A number counting up to `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Counter {
    target: u64,
    duration: Duration,
}

impl Counter {
    pub fn new(target: u64, duration: Duration) -> Self {
        Self { target, duration }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Frames shown after `elapsed`, counting the immediate first frame.
    fn frames_at(elapsed: Duration) -> u128 {
        elapsed.as_millis() / FRAME.as_millis() + 1
    }

    /// Value to display after `elapsed`.
    ///
    /// Computed as `ceil(frames * target * 16 / duration_ms)` in integers so
    /// the last frame lands exactly on the target.
    pub fn value_at(&self, elapsed: Duration) -> u64 {
        if self.is_finished(elapsed) {
            return self.target;
        }
        let scaled = Self::frames_at(elapsed) * self.target as u128 * FRAME.as_millis();
        let value = scaled.div_ceil(self.duration.as_millis());
        (value as u64).min(self.target)
    }

    /// Whether the counter has settled on its target.
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        self.target == 0
            || Self::frames_at(elapsed) * FRAME.as_millis() >= self.duration.as_millis()
    }
}

/// Format a number with comma thousands separators.
///
/// `1234567` becomes `"1,234,567"`.
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
