//! Settings tab - edit and save session preferences.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::tui::tab::{Tab, TabAction};
use crate::{Command, Session, Settings};

/// State for the settings tab.
///
/// Edits a draft that only reaches the session when saved.
#[derive(Debug)]
pub struct SettingsTab {
    draft: Settings,
    list_state: ListState,
}

impl SettingsTab {
    /// Creates the settings tab pre-populated with `settings`.
    #[instrument]
    pub fn new(settings: Settings) -> Self {
        debug!("Initializing SettingsTab");
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            draft: settings,
            list_state,
        }
    }

    /// The unsaved settings.
    pub fn draft(&self) -> Settings {
        self.draft
    }

    #[instrument(skip(self))]
    fn toggle_time_format(&mut self) {
        self.draft.time_format = self.draft.time_format.toggle();
        info!(time_format = %self.draft.time_format, "Toggled time format");
    }
}

impl Tab for SettingsTab {
    #[instrument(skip(self, frame, session))]
    fn render(&self, frame: &mut Frame, area: Rect, session: &Session) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(3)])
            .split(area);

        let unsaved = if self.draft != *session.settings() {
            " (unsaved)"
        } else {
            ""
        };
        let items = vec![ListItem::new(format!(
            "Time format    [ {} ]",
            self.draft.time_format.label()
        ))];
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Preferences{}", unsaved)),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        let mut list_state = self.list_state;
        frame.render_stateful_widget(list, chunks[0], &mut list_state);

        let help = Paragraph::new("Enter / Space: Toggle | s: Save Settings")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[1]);
    }

    #[instrument(skip(self, key, _session))]
    fn handle_key(&mut self, key: KeyEvent, _session: &Session) -> TabAction {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.toggle_time_format();
                TabAction::Stay
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                TabAction::Dispatch(Command::SaveSettings(self.draft))
            }
            _ => TabAction::Ignored,
        }
    }

    #[instrument(skip(self, session))]
    fn on_enter(&mut self, session: &Session) {
        self.draft = *session.settings();
    }
}
