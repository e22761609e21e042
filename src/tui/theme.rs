//! Color themes for the hero screen and CLI messages
//!
//! Every color is addressed through a [`Tone`], so the hero screen (ratatui
//! styles) and plain CLI output (SGR escapes) stay in step.

use ratatui::style::{Color, Modifier, Style};

/// Theme names accepted in the config file.
pub const THEME_NAMES: [&str; 3] = ["default", "classic", "ocean"];

/// What a piece of text is, independent of its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Title and role text
    Text,
    /// Labels, empty bar cells, footer
    Muted,
    /// Cursor, counters, filled bar cells
    Accent,
    Error,
    Success,
}

/// Palette plus the ANSI switch for CLI output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub error: Color,
    pub success: Color,
    /// Whether `paint` emits escape codes
    pub ansi: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::terminal()
    }
}

impl Theme {
    /// Standard ANSI palette: gray text, green accent.
    pub fn terminal() -> Self {
        Self {
            text: Color::Gray,
            muted: Color::DarkGray,
            accent: Color::Green,
            error: Color::Red,
            success: Color::Green,
            ansi: true,
        }
    }

    /// White text, yellow accent.
    pub fn classic() -> Self {
        Self {
            text: Color::White,
            accent: Color::Yellow,
            ..Self::terminal()
        }
    }

    pub fn ocean() -> Self {
        Self {
            text: Color::Cyan,
            accent: Color::LightCyan,
            ..Self::terminal()
        }
    }

    /// Look up a theme by its config name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::terminal()),
            "classic" => Some(Self::classic()),
            "ocean" => Some(Self::ocean()),
            _ => None,
        }
    }

    /// Honour `NO_COLOR` for CLI output.
    pub fn for_cli(mut self) -> Self {
        self.ansi = std::env::var_os("NO_COLOR").is_none();
        self
    }

    pub fn color(&self, tone: Tone) -> Color {
        match tone {
            Tone::Text => self.text,
            Tone::Muted => self.muted,
            Tone::Accent => self.accent,
            Tone::Error => self.error,
            Tone::Success => self.success,
        }
    }

    /// Foreground style for `tone`.
    pub fn style(&self, tone: Tone) -> Style {
        Style::default().fg(self.color(tone))
    }

    /// Bold accent, for the typed role and counter values.
    pub fn highlight_style(&self) -> Style {
        self.style(Tone::Accent).add_modifier(Modifier::BOLD)
    }

    /// Wrap `text` in the SGR codes for `tone`, unless ANSI is off.
    pub fn paint(&self, tone: Tone, text: &str) -> String {
        match sgr_code(self.color(tone)) {
            Some(code) if self.ansi => format!("\x1b[{code}m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    }
}

/// SGR foreground code for the 16 named colors.
fn sgr_code(color: Color) -> Option<u8> {
    let code = match color {
        Color::Black => 30,
        Color::Red => 31,
        Color::Green => 32,
        Color::Yellow => 33,
        Color::Blue => 34,
        Color::Magenta => 35,
        Color::Cyan => 36,
        Color::Gray => 37,
        Color::DarkGray => 90,
        Color::LightRed => 91,
        Color::LightGreen => 92,
        Color::LightYellow => 93,
        Color::LightBlue => 94,
        Color::LightMagenta => 95,
        Color::LightCyan => 96,
        Color::White => 97,
        _ => return None,
    };
    Some(code)
}
