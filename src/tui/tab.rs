//! Tab trait and key-handling outcome for the tabbed UI.

use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};
use strum::{Display, EnumIter};

use crate::{Command, Notice, Session};

/// Identifies one tab of the panel, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum TabKind {
    /// Timer controls and display.
    #[strum(to_string = "Home")]
    Home,
    /// Group size and player names.
    #[strum(to_string = "Group Info & Settings")]
    Group,
    /// Totals across the whole group.
    #[strum(to_string = "Global Score")]
    GlobalScore,
    /// Ranked player scores.
    #[strum(to_string = "Scoreboard")]
    Scoreboard,
    /// Session preferences.
    #[strum(to_string = "Settings")]
    Settings,
}

/// The result of handling a key event on a tab.
///
/// Tabs return this from [`Tab::handle_key`]; the
/// [`TimerController`](super::TimerController) applies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabAction {
    /// Key consumed, no core change.
    Stay,
    /// Apply a command to the session.
    Dispatch(Command),
    /// Not handled here; the controller may use it for navigation.
    Ignored,
}

/// Trait implemented by each tab.
///
/// Each tab owns its own input state, renders its body, and translates key
/// events into [`Command`]s. Core state is only read through the session.
pub trait Tab {
    /// Renders the tab body into `area`.
    fn render(&self, frame: &mut Frame, area: Rect, session: &Session);

    /// Handles a key event.
    fn handle_key(&mut self, key: KeyEvent, session: &Session) -> TabAction;

    /// Called when the tab becomes active.
    fn on_enter(&mut self, _session: &Session) {}

    /// Called after a command this tab produced has been applied.
    fn after_dispatch(&mut self, _notice: &Notice, _session: &Session) {}

    /// Returns true while a text input has focus, so printable keys are not
    /// treated as shortcuts.
    fn is_editing(&self) -> bool {
        false
    }
}
