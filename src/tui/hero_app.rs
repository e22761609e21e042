//! Hero screen application
//!
//! Full-screen banner driven by a single-threaded event loop: crossterm
//! input is polled with a timeout bounded by the typewriter's next deadline
//! and the animation frame rate.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{
    cursor,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::theme::Theme;
use super::ui::{render_hero, HeroView, SkillView, StatView};
use crate::animation::counter::FRAME;
use crate::animation::{Counter, SkillStagger};
use crate::config::{Config, SkillConfig, StatConfig};
use crate::error::ConfigError;
use crate::typewriter::Typewriter;

/// Cursor blink half-period.
const BLINK: Duration = Duration::from_millis(500);

/// Longest wait between loop iterations.
const MAX_WAIT: Duration = Duration::from_millis(250);

/// Result of processing an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Leave the hero screen
    Quit,
}

/// All state of the hero screen, independent of the terminal.
#[derive(Debug)]
pub struct HeroState {
    title: String,
    stats: Vec<(StatConfig, Counter)>,
    skills: Vec<SkillConfig>,
    stagger: SkillStagger,
    typewriter: Typewriter<String>,
    /// Start of the animation clock
    started: Instant,
    /// Set while paused
    paused_at: Option<Instant>,
    /// Total time spent paused, excluded from the animation clock
    paused_total: Duration,
    show_help: bool,
}

impl HeroState {
    /// Build the hero state from a validated config, starting all
    /// animations at `now`.
    pub fn new(config: &Config, now: Instant) -> Result<Self, ConfigError> {
        let typewriter = Typewriter::start(
            config.role_list()?,
            config.timings(),
            Some(String::new()),
            now,
        )?;
        let duration = config.counter_duration();

        Ok(Self {
            title: config.hero.title.clone(),
            stats: config
                .stats
                .iter()
                .map(|s| (s.clone(), Counter::new(s.target, duration)))
                .collect(),
            skills: config.skills.clone(),
            stagger: config.skill_stagger(),
            typewriter,
            started: now,
            paused_at: None,
            paused_total: Duration::ZERO,
            show_help: false,
        })
    }

    pub fn typewriter(&self) -> &Typewriter<String> {
        &self.typewriter
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Animation time at `now`, not counting pauses.
    pub fn elapsed(&self, now: Instant) -> Duration {
        let until = self.paused_at.unwrap_or(now);
        until
            .saturating_duration_since(self.started)
            .saturating_sub(self.paused_total)
    }

    /// Advance the typewriter if its step is due.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.typewriter.poll(now)
    }

    /// Pause or resume every animation.
    pub fn toggle_pause(&mut self, now: Instant) {
        match self.paused_at.take() {
            Some(paused_at) => {
                self.paused_total += now.saturating_duration_since(paused_at);
                self.typewriter.resume(now);
                tracing::debug!("hero resumed");
            }
            None => {
                self.paused_at = Some(now);
                self.typewriter.pause(now);
                tracing::debug!("hero paused");
            }
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> InputResult {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return InputResult::Quit;
        }

        // If help is showing, any key closes it
        if self.show_help {
            self.show_help = false;
            return InputResult::Continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
            KeyCode::Char(' ') => {
                self.toggle_pause(now);
                InputResult::Continue
            }
            KeyCode::Char('?') => {
                self.toggle_help();
                InputResult::Continue
            }
            _ => InputResult::Continue,
        }
    }

    /// Whether the counters or skill bars are still moving.
    fn animations_running(&self, elapsed: Duration) -> bool {
        self.stats.iter().any(|(_, c)| !c.is_finished(elapsed))
            || !self.stagger.is_finished(self.skills.len(), elapsed)
    }

    /// How long the loop may wait for input before something must redraw.
    pub fn next_wake(&self, now: Instant) -> Duration {
        if self.is_paused() {
            return MAX_WAIT;
        }
        let elapsed = self.elapsed(now);

        let mut wait = MAX_WAIT;
        if let Some(until_step) = self.typewriter.time_until_next(now) {
            wait = wait.min(until_step);
        }
        if self.animations_running(elapsed) {
            wait = wait.min(FRAME);
        }
        let into_blink = Duration::from_nanos((elapsed.as_nanos() % BLINK.as_nanos()) as u64);
        wait.min(BLINK - into_blink)
    }

    /// Snapshot of what to draw at `now`.
    pub fn view(&self, now: Instant) -> HeroView<'_> {
        let elapsed = self.elapsed(now);
        let blink_on = (elapsed.as_millis() / BLINK.as_millis()) % 2 == 0;
        let state = self.typewriter.state();

        let status = if self.is_paused() {
            "paused".to_string()
        } else {
            format!(
                "{} · role {}/{}",
                state.phase(),
                state.role_index() + 1,
                self.typewriter.roles().len()
            )
        };

        HeroView {
            title: &self.title,
            typed: self.typewriter.target(),
            cursor_visible: self.is_paused() || blink_on,
            stats: self
                .stats
                .iter()
                .map(|(stat, counter)| StatView {
                    label: &stat.label,
                    value: counter.value_at(elapsed),
                    suffix: &stat.suffix,
                })
                .collect(),
            skills: self
                .skills
                .iter()
                .enumerate()
                .map(|(i, skill)| SkillView {
                    name: &skill.name,
                    percentage: skill.percentage,
                    fraction: self.stagger.fill_fraction(i, skill.percentage, elapsed),
                })
                .collect(),
            status,
            show_help: self.show_help,
        }
    }

    /// Stop the typewriter; nothing is scheduled afterwards.
    pub fn shutdown(&mut self) {
        self.typewriter.cancel();
    }
}

/// Terminal-owning hero application.
pub struct HeroApp {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    state: HeroState,
    theme: Theme,
}

impl HeroApp {
    /// Enter raw mode and the alternate screen.
    pub fn new(config: &Config) -> Result<Self> {
        let state = HeroState::new(config, Instant::now())?;

        let terminal = enter_raw_mode(enable_raw_mode, restore_terminal, || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
            Terminal::new(CrosstermBackend::new(stdout))
        })?;

        Ok(Self {
            terminal,
            state,
            theme: config.theme(),
        })
    }

    /// Run until the user quits.
    #[cfg(not(tarpaulin_include))]
    pub fn run(&mut self) -> Result<()> {
        loop {
            let now = Instant::now();
            self.state.tick(now);

            let view = self.state.view(now);
            let theme = &self.theme;
            self.terminal.draw(|frame| render_hero(frame, &view, theme))?;

            let timeout = self.state.next_wake(Instant::now());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.state.handle_key(key, Instant::now()) == InputResult::Quit {
                            break;
                        }
                    }
                    // Redrawn on the next iteration at the new size
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        self.state.shutdown();
        Ok(())
    }
}

impl Drop for HeroApp {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

/// Leave raw mode and the alternate screen, showing the cursor again.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)
}

/// Turn raw mode on and run `setup`.
///
/// If `setup` fails there is no `HeroApp` whose `Drop` would clean up, so
/// `restore` runs before the error is returned.
fn enter_raw_mode<T>(
    enable: impl FnOnce() -> io::Result<()>,
    restore: impl FnOnce() -> io::Result<()>,
    setup: impl FnOnce() -> io::Result<T>,
) -> io::Result<T> {
    enable()?;
    setup().map_err(|e| {
        let _ = restore();
        e
    })
}
