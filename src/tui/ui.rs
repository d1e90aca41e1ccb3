//! Shared frame chrome: tab bar, body area and status line.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Tabs},
};
use strum::IntoEnumIterator;

use crate::Notice;
use crate::tui::tab::TabKind;

/// Areas of one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameLayout {
    /// Tab bar.
    pub tabs: Rect,
    /// Active tab body.
    pub body: Rect,
    /// Status line.
    pub status: Rect,
}

/// Splits the frame into tab bar, body and status line.
pub fn frame_layout(area: Rect) -> FrameLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);
    FrameLayout {
        tabs: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Renders the tab titles with `active` highlighted.
pub fn render_tab_bar(frame: &mut Frame, area: Rect, active: TabKind) {
    let titles: Vec<Line> = TabKind::iter()
        .enumerate()
        .map(|(i, kind)| Line::from(format!("{} {}", i + 1, kind)))
        .collect();
    let selected = TabKind::iter().position(|k| k == active).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Tab / Shift+Tab: Switch | q: Quit"),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

/// Renders the latest notice; errors in red.
pub fn render_status(frame: &mut Frame, area: Rect, notice: &Notice) {
    let style = match notice {
        Notice::Error(_) => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::Green),
    };
    let status = Paragraph::new(notice.to_string())
        .style(style)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, area);
}
