//! Terminal UI for the S4D timer.

mod controller;
mod tab;
mod tabs;
mod ui;

use std::io::{self, Write};
use std::sync::Once;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, error, info, instrument, warn};

use crate::AppConfig;

pub use controller::{Flow, MIN_TICK_INTERVAL, TimerController};
pub use tab::{Tab, TabAction, TabKind};
pub use tabs::{GlobalScoreTab, GroupFocus, GroupTab, HomeTab, ScoreboardTab, SettingsTab};

/// Runs the terminal UI until the user quits.
///
/// The terminal is restored on every exit path: normal return, error,
/// or panic.
#[instrument(skip(config))]
pub async fn run_tui(config: AppConfig) -> Result<()> {
    info!("Starting S4D timer TUI");

    let guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut controller = TimerController::new(&config);
    let res = controller.run(&mut terminal).await;
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Timer loop error");
    }
    res
}

/// Holds raw mode and the alternate screen; restores both when dropped.
#[derive(Debug)]
struct TerminalGuard;

impl TerminalGuard {
    #[instrument]
    fn enter() -> Result<Self> {
        install_panic_hook();
        enable_raw_mode()?;
        // Created before entering the alternate screen so a failure there
        // still leaves raw mode.
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen)?;
        debug!("Terminal prepared");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal(&mut io::stdout());
    }
}

/// Leaves raw mode and the alternate screen and shows the cursor.
///
/// Every step runs even if an earlier one fails; failures are logged.
pub fn restore_terminal<W: Write>(out: &mut W) {
    if let Err(err) = disable_raw_mode() {
        warn!(error = %err, "Failed to disable raw mode");
    }
    if let Err(err) = execute!(out, LeaveAlternateScreen, Show) {
        warn!(error = %err, "Failed to leave alternate screen");
    }
}

/// Restores the terminal before the default panic message is printed.
fn install_panic_hook() {
    static INSTALLED: Once = Once::new();
    INSTALLED.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            restore_terminal(&mut io::stdout());
            previous(panic_info);
        }));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_leaves_alternate_screen_and_shows_cursor() {
        let mut out: Vec<u8> = Vec::new();
        restore_terminal(&mut out);
        let written = String::from_utf8(out).expect("ANSI output is UTF-8");
        assert!(written.contains("\x1b[?1049l"), "left alternate screen: {written:?}");
        assert!(written.contains("\x1b[?25h"), "cursor shown: {written:?}");
    }

    #[test]
    fn test_restore_is_safe_outside_raw_mode() {
        let mut out: Vec<u8> = Vec::new();
        restore_terminal(&mut out);
        restore_terminal(&mut out);
        assert!(!out.is_empty());
    }

    #[test]
    fn test_panic_hook_installs_once_and_keeps_unwinding() {
        install_panic_hook();
        install_panic_hook();
        let result = std::panic::catch_unwind(|| panic!("loop failure"));
        assert!(result.is_err());
    }
}
