//! Global score tab - totals across the whole group.

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tracing::instrument;

use crate::Session;
use crate::tui::tab::{Tab, TabAction};

/// Read-only summary tab.
#[derive(Debug, Default)]
pub struct GlobalScoreTab;

impl Tab for GlobalScoreTab {
    #[instrument(skip(self, frame, session))]
    fn render(&self, frame: &mut Frame, area: Rect, session: &Session) {
        let board = session.scoreboard();
        let lines = vec![
            Line::from(format!("Players: {}", board.len())),
            Line::from(format!("Total points: {}", board.total())),
            Line::from(format!("Elapsed: {}", session.elapsed_display())),
        ];
        let summary = Paragraph::new(lines)
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Global Score"));
        frame.render_widget(summary, area);
    }

    fn handle_key(&mut self, _key: KeyEvent, _session: &Session) -> TabAction {
        TabAction::Ignored
    }
}
