//! Line-mode render target.
//!
//! Writes the typewriter text to a terminal or pipe. On a terminal the line
//! is redrawn in place; when piped each value goes on its own line so the
//! output can be read back.

use std::io::{self, Write};

use unicode_width::UnicodeWidthChar;

use super::RenderTarget;

/// ANSI: return to column 0 and clear the line.
const CLEAR_LINE: &str = "\r\x1b[2K";

/// How rendered values are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMode {
    /// Redraw a single line in place (terminal)
    Inline,
    /// One value per line (pipes, files)
    Lines,
}

/// Render target that writes to any `Write`.
#[derive(Debug)]
pub struct LineWriter<W: Write> {
    out: W,
    mode: LineMode,
    prefix: String,
    cursor: Option<char>,
    max_width: Option<usize>,
    failed: bool,
}

impl LineWriter<io::Stdout> {
    /// Writer on stdout, inline when stdout is a terminal.
    ///
    /// Inline output is truncated to the terminal width so a long role never
    /// wraps (a wrapped line can't be cleared with a carriage return).
    pub fn stdout() -> Self {
        if atty::is(atty::Stream::Stdout) {
            let width = terminal_size::terminal_size().map(|(w, _)| w.0 as usize);
            let mut writer = Self::new(io::stdout(), LineMode::Inline).with_cursor('▌');
            writer.max_width = width.map(|w| w.saturating_sub(1));
            writer
        } else {
            Self::new(io::stdout(), LineMode::Lines)
        }
    }
}

impl<W: Write> LineWriter<W> {
    pub fn new(out: W, mode: LineMode) -> Self {
        Self {
            out,
            mode,
            prefix: String::new(),
            cursor: None,
            max_width: None,
            failed: false,
        }
    }

    /// Text written before every value.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Cursor glyph drawn after the text (inline mode only).
    pub fn with_cursor(mut self, cursor: char) -> Self {
        self.cursor = Some(cursor);
        self
    }

    /// Maximum display width of a written line.
    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn mode(&self) -> LineMode {
        self.mode
    }

    /// Whether a write has failed; later values are dropped.
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// End the inline line so the shell prompt starts on a fresh row.
    pub fn finish(&mut self) -> io::Result<()> {
        if self.mode == LineMode::Inline && !self.failed {
            writeln!(self.out)?;
            self.out.flush()?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn compose(&self, text: &str) -> String {
        let mut line = String::with_capacity(self.prefix.len() + text.len() + 4);
        line.push_str(&self.prefix);
        line.push_str(text);
        if self.mode == LineMode::Inline {
            if let Some(cursor) = self.cursor {
                line.push(cursor);
            }
        }
        match self.max_width {
            Some(width) => truncate_to_width(&line, width).to_string(),
            None => line,
        }
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        match self.mode {
            LineMode::Inline => write!(self.out, "{}{}", CLEAR_LINE, line)?,
            LineMode::Lines => writeln!(self.out, "{}", line)?,
        }
        self.out.flush()
    }
}

impl<W: Write> RenderTarget for LineWriter<W> {
    fn render(&mut self, text: &str) {
        if self.failed {
            return;
        }
        let line = self.compose(text);
        if let Err(e) = self.write_line(&line) {
            // Usually a closed pipe; nothing more will get through
            tracing::warn!(error = %e, "line output failed, dropping further frames");
            self.failed = true;
        }
    }
}

/// Longest prefix of `text` whose display width fits in `width` columns.
pub fn truncate_to_width(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (idx, c) in text.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            return &text[..idx];
        }
        used += w;
    }
    text
}
