//! Scoreboard tab - ranked player scores.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use tracing::{debug, instrument};

use crate::tui::tab::{Tab, TabAction};
use crate::{Command, Session};

/// State for the scoreboard tab.
///
/// The selection is a roster index so it follows the player when the
/// ranking reorders.
#[derive(Debug, Default)]
pub struct ScoreboardTab {
    selected: Option<usize>,
}

impl ScoreboardTab {
    /// Creates the scoreboard tab.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing ScoreboardTab");
        Self::default()
    }

    /// Roster index of the selected player.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Moves the selection one rank up or down, wrapping.
    #[instrument(skip(self, session))]
    fn step(&mut self, session: &Session, down: bool) {
        let order: Vec<usize> = session
            .scoreboard()
            .ranked()
            .iter()
            .map(|(i, _)| *i)
            .collect();
        if order.is_empty() {
            self.selected = None;
            return;
        }
        let pos = self
            .selected
            .and_then(|sel| order.iter().position(|i| *i == sel));
        let next = match (pos, down) {
            (None, _) => 0,
            (Some(p), true) => (p + 1) % order.len(),
            (Some(0), false) => order.len() - 1,
            (Some(p), false) => p - 1,
        };
        self.selected = Some(order[next]);
    }
}

impl Tab for ScoreboardTab {
    #[instrument(skip(self, frame, session))]
    fn render(&self, frame: &mut Frame, area: Rect, session: &Session) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(3)])
            .split(area);

        let header = Row::new(vec![
            Cell::from("Rank").style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from("Player").style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from("Score").style(Style::default().add_modifier(Modifier::BOLD)),
        ])
        .style(Style::default().fg(Color::Yellow));

        let rows: Vec<Row> = session
            .scoreboard()
            .ranked()
            .into_iter()
            .enumerate()
            .map(|(rank, (index, entry))| {
                let style = if self.selected == Some(index) {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                Row::new(vec![
                    Cell::from((rank + 1).to_string()),
                    Cell::from(entry.name().as_str()),
                    Cell::from(entry.score().to_string()),
                ])
                .style(style)
            })
            .collect();

        let widths = [
            Constraint::Percentage(15),
            Constraint::Percentage(60),
            Constraint::Percentage(25),
        ];
        let title = if session.scoreboard().is_empty() {
            "Scoreboard (submit players on the group tab)"
        } else {
            "Scoreboard"
        };
        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(table, chunks[0]);

        let help = Paragraph::new("↑↓: Select | +: Award point | -: Deduct point")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[1]);
    }

    #[instrument(skip(self, key, session))]
    fn handle_key(&mut self, key: KeyEvent, session: &Session) -> TabAction {
        match key.code {
            KeyCode::Up => {
                self.step(session, false);
                TabAction::Stay
            }
            KeyCode::Down => {
                self.step(session, true);
                TabAction::Stay
            }
            KeyCode::Char('+') | KeyCode::Char('=') => match self.selected {
                Some(i) => TabAction::Dispatch(Command::AwardPoint(i)),
                None => TabAction::Stay,
            },
            KeyCode::Char('-') => match self.selected {
                Some(i) => TabAction::Dispatch(Command::DeductPoint(i)),
                None => TabAction::Stay,
            },
            _ => TabAction::Ignored,
        }
    }

    #[instrument(skip(self, session))]
    fn on_enter(&mut self, session: &Session) {
        let len = session.scoreboard().len();
        if self.selected.is_none_or(|i| i >= len) {
            self.selected = session.scoreboard().ranked().first().map(|(i, _)| *i);
        }
    }
}
