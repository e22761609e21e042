//! Staggered skill bar fill.
//!
//! Bar `i` starts `i * stagger` after the section appears and grows linearly
//! to its percentage over `fill`.

use std::time::Duration;

/// Glyph for the filled part of a bar.
pub const FILLED: char = '█';
/// Glyph for the empty part of a bar.
pub const EMPTY: char = '░';

/// Timing of the skill bar animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillStagger {
    /// Delay between the start of consecutive bars
    pub stagger: Duration,
    /// Time for one bar to grow to its percentage
    pub fill: Duration,
}

impl Default for SkillStagger {
    fn default() -> Self {
        Self {
            stagger: Duration::from_millis(200),
            fill: Duration::from_millis(800),
        }
    }
}

impl SkillStagger {
    /// Fill of bar `index` after `elapsed`, as a fraction of the full width.
    ///
    /// `percentage` is clamped to 100.
    pub fn fill_fraction(&self, index: usize, percentage: u8, elapsed: Duration) -> f64 {
        let goal = f64::from(percentage.min(100)) / 100.0;
        let start = self.stagger * index as u32;
        if elapsed < start {
            return 0.0;
        }
        let since = elapsed - start;
        if self.fill.is_zero() || since >= self.fill {
            return goal;
        }
        goal * since.as_secs_f64() / self.fill.as_secs_f64()
    }

    /// Whether all of `count` bars have reached their percentage.
    pub fn is_finished(&self, count: usize, elapsed: Duration) -> bool {
        if count == 0 {
            return true;
        }
        elapsed >= self.stagger * (count - 1) as u32 + self.fill
    }
}

/// Build the glyphs of a bar `width` cells wide filled to `fraction`.
///
/// Returns the glyphs and the number of filled cells.
pub fn build_skill_bar_chars(width: usize, fraction: f64) -> (Vec<char>, usize) {
    let fraction = fraction.clamp(0.0, 1.0);
    let filled = ((width as f64 * fraction).round() as usize).min(width);

    let mut bar = vec![EMPTY; width];
    for cell in bar.iter_mut().take(filled) {
        *cell = FILLED;
    }
    (bar, filled)
}
