//! Status line and footer rendering for the hero screen
//!
//! One row each: the typewriter status (phase, role position) and the
//! keybinding hints.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::{Theme, Tone};

/// Render the muted, centered status line.
pub fn render_status_line(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
    let status = Paragraph::new(text.to_string())
        .style(theme.style(Tone::Muted))
        .alignment(Alignment::Center);
    frame.render_widget(status, area);
}

/// Render `(key, description)` hints centered, e.g. `q: quit | ?: help`.
pub fn render_footer(frame: &mut Frame, area: Rect, keys: &[(&str, &str)], theme: &Theme) {
    let spans = build_footer_spans(keys, theme);
    let footer = Paragraph::new(Line::from(spans))
        .style(theme.style(Tone::Muted))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Key in the accent color, description muted, hints separated by " | ".
fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    keys.iter()
        .enumerate()
        .flat_map(|(i, (key, desc))| {
            let separator = (i > 0).then(|| Span::styled(" | ", theme.style(Tone::Muted)));
            separator.into_iter().chain([
                Span::styled(key.to_string(), theme.style(Tone::Accent)),
                Span::styled(format!(": {desc}"), theme.style(Tone::Muted)),
            ])
        })
        .collect()
}
