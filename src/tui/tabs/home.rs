//! Home tab - title, PLAY/STOP/RESET buttons and the timer label.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::tui::tab::{Tab, TabAction};
use crate::{Command, Session, TimerState};

/// Buttons on the home tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HomeButton {
    Play,
    Stop,
    Reset,
}

impl HomeButton {
    #[instrument]
    fn label(self) -> &'static str {
        match self {
            Self::Play => "PLAY",
            Self::Stop => "STOP",
            Self::Reset => "RESET",
        }
    }

    #[instrument]
    fn command(self) -> Command {
        match self {
            Self::Play => Command::Start,
            Self::Stop => Command::Stop,
            Self::Reset => Command::Reset,
        }
    }

    #[instrument]
    fn all() -> &'static [HomeButton] {
        &[Self::Play, Self::Stop, Self::Reset]
    }
}

/// State for the home tab.
#[derive(Debug, Getters)]
pub struct HomeTab {
    title: String,
    list_state: ListState,
}

impl HomeTab {
    /// Creates the home tab with the configured title.
    #[instrument]
    pub fn new(title: String) -> Self {
        debug!("Initializing HomeTab");
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { title, list_state }
    }

    #[instrument(skip(self))]
    fn select_previous(&mut self) {
        let count = HomeButton::all().len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    #[instrument(skip(self))]
    fn select_next(&mut self) {
        let count = HomeButton::all().len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    #[instrument(skip(self))]
    fn selected_button(&self) -> HomeButton {
        let buttons = HomeButton::all();
        let idx = self.list_state.selected().unwrap_or(0);
        buttons[idx.min(buttons.len() - 1)]
    }
}

impl Tab for HomeTab {
    #[instrument(skip(self, frame, session))]
    fn render(&self, frame: &mut Frame, area: Rect, session: &Session) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Min(3),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new(self.title.as_str())
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = HomeButton::all()
            .iter()
            .map(|b| ListItem::new(b.label()))
            .collect();
        let buttons = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Controls"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        let mut list_state = self.list_state;
        frame.render_stateful_widget(buttons, chunks[1], &mut list_state);

        let timer_color = match session.clock().state() {
            TimerState::Running => Color::Green,
            TimerState::Stopped => Color::White,
        };
        let timer = Paragraph::new(session.elapsed_display())
            .style(
                Style::default()
                    .fg(timer_color)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(session.clock().state().to_string()),
            );
        frame.render_widget(timer, chunks[2]);

        let help = Paragraph::new("↑↓ + Enter: Press button | p: Play | s: Stop | r: Reset")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key, _session))]
    fn handle_key(&mut self, key: KeyEvent, _session: &Session) -> TabAction {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                TabAction::Stay
            }
            KeyCode::Down => {
                self.select_next();
                TabAction::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let button = self.selected_button();
                info!(button = button.label(), "Home button pressed");
                TabAction::Dispatch(button.command())
            }
            KeyCode::Char('p') | KeyCode::Char('P') => TabAction::Dispatch(Command::Start),
            KeyCode::Char('s') | KeyCode::Char('S') => TabAction::Dispatch(Command::Stop),
            KeyCode::Char('r') | KeyCode::Char('R') => TabAction::Dispatch(Command::Reset),
            _ => TabAction::Ignored,
        }
    }
}
