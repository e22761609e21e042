//! Hero screen rendering
//!
//! Draws a `HeroView` snapshot: title, typewriter line, stats row, skill
//! bars, status line and footer, plus the help overlay.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::footer::{render_footer, render_status_line};
use super::theme::{Theme, Tone};
use crate::animation::{build_skill_bar_chars, format_number};

/// Glyph drawn after the typed text.
pub const CURSOR: &str = "▌";

/// Footer key hints.
const FOOTER_KEYS: [(&str, &str); 3] = [("space", "pause"), ("?", "help"), ("q", "quit")];

/// A counter as it should be drawn this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatView<'a> {
    pub label: &'a str,
    pub value: u64,
    pub suffix: &'a str,
}

/// A skill bar as it should be drawn this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillView<'a> {
    pub name: &'a str,
    pub percentage: u8,
    /// Current fill, 0.0 to 1.0 of the full width
    pub fraction: f64,
}

/// Everything the hero screen shows for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroView<'a> {
    pub title: &'a str,
    pub typed: &'a str,
    pub cursor_visible: bool,
    pub stats: Vec<StatView<'a>>,
    pub skills: Vec<SkillView<'a>>,
    pub status: String,
    pub show_help: bool,
}

/// Render the full hero screen.
pub fn render_hero(frame: &mut Frame, view: &HeroView<'_>, theme: &Theme) {
    let area = frame.area();
    let skills_height = view.skills.len() as u16;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1), // title
            Constraint::Length(1),
            Constraint::Length(1), // typewriter
            Constraint::Length(1),
            Constraint::Length(2), // stats
            Constraint::Length(1),
            Constraint::Length(skills_height),
            Constraint::Min(0),
            Constraint::Length(1), // status
            Constraint::Length(1), // footer
        ])
        .split(area);

    let title = Paragraph::new(view.title.to_string())
        .style(theme.style(Tone::Text))
        .alignment(Alignment::Center);
    frame.render_widget(title, rows[1]);

    render_typed_line(frame, rows[3], view, theme);
    render_stats(frame, rows[5], &view.stats, theme);
    render_skills(frame, centered_rect(70, 100, rows[7]), &view.skills, theme);
    render_status_line(frame, rows[9], &view.status, theme);
    render_footer(frame, rows[10], &FOOTER_KEYS, theme);

    if view.show_help {
        render_help(frame, area, theme);
    }
}

fn render_typed_line(frame: &mut Frame, area: Rect, view: &HeroView<'_>, theme: &Theme) {
    let cursor = if view.cursor_visible { CURSOR } else { " " };
    let line = Line::from(vec![
        Span::styled(view.typed.to_string(), theme.highlight_style()),
        Span::styled(cursor.to_string(), theme.style(Tone::Accent)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_stats(frame: &mut Frame, area: Rect, stats: &[StatView<'_>], theme: &Theme) {
    if stats.is_empty() {
        return;
    }
    let constraints: Vec<Constraint> = stats
        .iter()
        .map(|_| Constraint::Ratio(1, stats.len() as u32))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (stat, column) in stats.iter().zip(columns.iter()) {
        let lines = vec![
            Line::styled(
                format!("{}{}", format_number(stat.value), stat.suffix),
                theme.highlight_style(),
            ),
            Line::styled(stat.label.to_string(), theme.style(Tone::Muted)),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            *column,
        );
    }
}

fn render_skills(frame: &mut Frame, area: Rect, skills: &[SkillView<'_>], theme: &Theme) {
    let name_width = skills
        .iter()
        .map(|s| UnicodeWidthStr::width(s.name))
        .max()
        .unwrap_or(0);
    // name, space, bar, " 100%"
    let bar_width = (area.width as usize).saturating_sub(name_width + 1 + 5);

    let lines: Vec<Line> = skills
        .iter()
        .map(|skill| {
            let (bar, filled) = build_skill_bar_chars(bar_width, skill.fraction);
            let padding = name_width - UnicodeWidthStr::width(skill.name);
            let filled_part: String = bar[..filled].iter().collect();
            let empty_part: String = bar[filled..].iter().collect();
            Line::from(vec![
                Span::styled(
                    format!("{}{} ", skill.name, " ".repeat(padding)),
                    theme.style(Tone::Text),
                ),
                Span::styled(filled_part, theme.style(Tone::Accent)),
                Span::styled(empty_part, theme.style(Tone::Muted)),
                Span::styled(
                    format!(" {:>3}%", skill.percentage),
                    theme.style(Tone::Muted),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Render the help modal overlay.
pub fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let modal_area = centered_rect(50, 50, area);
    frame.render_widget(Clear, modal_area);

    let key = |k: &str, desc: &str| {
        Line::from(vec![
            Span::styled(format!("  {:<8}", k), theme.highlight_style()),
            Span::styled(desc.to_string(), theme.style(Tone::Text)),
        ])
    };
    let lines = vec![
        Line::from(""),
        key("space", "Pause / resume the animation"),
        key("?", "Toggle this help"),
        key("q", "Quit"),
        key("Esc", "Close help, or quit"),
        key("Ctrl+C", "Quit"),
    ];
    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.style(Tone::Accent))
            .title(" Help "),
    );
    frame.render_widget(help, modal_area);
}

/// Create a centered layout with the given constraints.
///
/// Returns the center area that can be used for content.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical_layout[1])[1]
}
