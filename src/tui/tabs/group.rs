//! Group tab - group size input, per-player name inputs and the accepted roster.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::tui::tab::{Tab, TabAction};
use crate::{Command, Notice, Session};

/// Which control on the group tab has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupFocus {
    /// The group-size text input.
    SizeInput,
    /// The name input for this player slot.
    Name(usize),
    /// The "Submit Players" button.
    Submit,
}

/// State for the group tab.
#[derive(Debug, Getters)]
pub struct GroupTab {
    size_input: String,
    names: Vec<String>,
    focus: GroupFocus,
    awaiting_size: bool,
    sized: bool,
}

impl Default for GroupTab {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupTab {
    /// Creates the group tab with an empty size input.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing GroupTab");
        Self {
            size_input: String::new(),
            names: Vec::new(),
            focus: GroupFocus::SizeInput,
            awaiting_size: false,
            sized: false,
        }
    }

    /// Focus order: size input, each name, then submit once a size is accepted.
    #[instrument(skip(self))]
    fn focus_order(&self) -> Vec<GroupFocus> {
        let mut order = vec![GroupFocus::SizeInput];
        order.extend((0..self.names.len()).map(GroupFocus::Name));
        if self.sized {
            order.push(GroupFocus::Submit);
        }
        order
    }

    #[instrument(skip(self))]
    fn move_focus(&mut self, forward: bool) {
        let order = self.focus_order();
        let pos = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (pos + 1) % order.len()
        } else if pos == 0 {
            order.len() - 1
        } else {
            pos - 1
        };
        self.focus = order[next];
    }

    /// Edits the focused text input and returns the command to apply, if any.
    #[instrument(skip(self))]
    fn edit(&mut self, ch: Option<char>) -> TabAction {
        let buffer = match self.focus {
            GroupFocus::SizeInput => &mut self.size_input,
            GroupFocus::Name(i) => match self.names.get_mut(i) {
                Some(name) => name,
                None => return TabAction::Stay,
            },
            GroupFocus::Submit => return TabAction::Ignored,
        };
        match ch {
            Some(c) => buffer.push(c),
            None => {
                buffer.pop();
            }
        }
        match self.focus {
            GroupFocus::Name(index) => TabAction::Dispatch(Command::RecordName {
                index,
                name: buffer.clone(),
            }),
            _ => TabAction::Stay,
        }
    }

    #[instrument(skip(self))]
    fn confirm(&mut self) -> TabAction {
        match self.focus {
            GroupFocus::SizeInput => {
                self.awaiting_size = true;
                info!(input = %self.size_input, "Submitting group size");
                TabAction::Dispatch(Command::SetGroupSize(self.size_input.clone()))
            }
            GroupFocus::Name(_) => {
                self.move_focus(true);
                TabAction::Stay
            }
            GroupFocus::Submit if !self.sized => TabAction::Stay,
            GroupFocus::Submit => {
                info!("Submitting players");
                TabAction::Dispatch(Command::SubmitRoster)
            }
        }
    }
}

impl Tab for GroupTab {
    #[instrument(skip(self, frame, session))]
    fn render(&self, frame: &mut Frame, area: Rect, session: &Session) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        let focused = Style::default().fg(Color::Yellow);
        let unfocused = Style::default().fg(Color::White);

        let size_style = if self.focus == GroupFocus::SizeInput {
            focused
        } else {
            unfocused
        };
        let size = Paragraph::new(self.size_input.as_str())
            .style(size_style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Enter number of players (Enter: Submit Group Size)"),
            );
        frame.render_widget(size, chunks[0]);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);

        let name_items: Vec<ListItem> = self
            .names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let style = if self.focus == GroupFocus::Name(i) {
                    focused.add_modifier(Modifier::BOLD)
                } else {
                    unfocused
                };
                let shown = if name.is_empty() {
                    "<enter player name>"
                } else {
                    name.as_str()
                };
                ListItem::new(format!("Player {}: {}", i + 1, shown)).style(style)
            })
            .collect();
        let names = List::new(name_items)
            .block(Block::default().borders(Borders::ALL).title("Players"));
        frame.render_widget(names, middle[0]);

        let accepted_items: Vec<ListItem> = session
            .accepted_roster()
            .map(|roster| {
                roster
                    .iter()
                    .map(|name| ListItem::new(format!("Player: {}", name)))
                    .collect()
            })
            .unwrap_or_default();
        let accepted = List::new(accepted_items)
            .style(Style::default().fg(Color::Green))
            .block(Block::default().borders(Borders::ALL).title("Roster"));
        frame.render_widget(accepted, middle[1]);

        let submit_style = if self.focus == GroupFocus::Submit {
            focused.add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let submit = Paragraph::new("[ Submit Players ]")
            .style(submit_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(submit, chunks[2]);

        let help = Paragraph::new("↑↓: Move | Type to edit | Enter: Confirm | Esc: Leave input")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key, _session))]
    fn handle_key(&mut self, key: KeyEvent, _session: &Session) -> TabAction {
        match key.code {
            KeyCode::Up => {
                self.move_focus(false);
                TabAction::Stay
            }
            KeyCode::Down => {
                self.move_focus(true);
                TabAction::Stay
            }
            KeyCode::Enter => self.confirm(),
            KeyCode::Backspace => self.edit(None),
            KeyCode::Esc if self.is_editing() => {
                self.focus = GroupFocus::Submit;
                TabAction::Stay
            }
            KeyCode::Char(c) if self.is_editing() => self.edit(Some(c)),
            _ => TabAction::Ignored,
        }
    }

    #[instrument(skip(self, session))]
    fn after_dispatch(&mut self, notice: &Notice, session: &Session) {
        if !self.awaiting_size {
            return;
        }
        self.awaiting_size = false;
        if notice.is_error() {
            return;
        }
        self.names = session.roster().pending().clone();
        self.sized = true;
        self.focus = if self.names.is_empty() {
            GroupFocus::Submit
        } else {
            GroupFocus::Name(0)
        };
        debug!(slots = self.names.len(), "Rebuilt player inputs");
    }

    fn is_editing(&self) -> bool {
        matches!(self.focus, GroupFocus::SizeInput | GroupFocus::Name(_))
    }
}
