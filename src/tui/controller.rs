//! Timer controller - owns the session, the tabs and the tick-driven event loop.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use derive_getters::Getters;
use ratatui::{Frame, Terminal, backend::Backend};
use strum::IntoEnumIterator;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info, instrument};

use crate::tui::tab::{Tab, TabAction, TabKind};
use crate::tui::tabs::{GlobalScoreTab, GroupTab, HomeTab, ScoreboardTab, SettingsTab};
use crate::tui::ui;
use crate::{AppConfig, Command, Notice, Session, Settings};

/// Shortest tick period the event loop will run with.
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Whether the event loop should keep going after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Controller that drives the tabbed timer UI.
///
/// Call [`TimerController::run`] to start the event loop.
#[derive(Debug, Getters)]
pub struct TimerController {
    session: Session,
    active: TabKind,
    notice: Notice,
    tick_interval: Duration,
    #[getter(skip)]
    home: HomeTab,
    #[getter(skip)]
    group: GroupTab,
    #[getter(skip)]
    global_score: GlobalScoreTab,
    #[getter(skip)]
    scoreboard: ScoreboardTab,
    #[getter(skip)]
    settings: SettingsTab,
}

impl TimerController {
    /// Creates a controller from the loaded configuration.
    #[instrument(skip(config))]
    pub fn new(config: &AppConfig) -> Self {
        info!("Creating TimerController");
        let settings = Settings::from_config(config);
        Self {
            session: Session::new(settings),
            active: TabKind::Home,
            notice: Notice::Quiet,
            // `interval` panics on a zero period.
            tick_interval: config.tick_interval().max(MIN_TICK_INTERVAL),
            home: HomeTab::new(config.title().clone()),
            group: GroupTab::new(),
            global_score: GlobalScoreTab,
            scoreboard: ScoreboardTab::new(),
            settings: SettingsTab::new(settings),
        }
    }

    /// Runs the event loop until the user quits.
    ///
    /// Every tick of the interval applies one [`Command::Tick`]; pending key
    /// events are drained between ticks and the frame is redrawn.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!(tick_ms = self.tick_interval.as_millis() as u64, "Starting timer event loop");

        let mut ticker = interval(self.tick_interval);
        // Late ticks are replayed so none are lost.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Burst);

        loop {
            ticker.tick().await;
            self.session.dispatch(Command::Tick);

            while event::poll(Duration::ZERO)? {
                let Event::Key(key) = event::read()? else {
                    continue;
                };
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if self.handle_key(key) == Flow::Quit {
                    info!("Timer UI quitting");
                    return Ok(());
                }
            }

            terminal.draw(|f| self.render(f))?;
        }
    }

    /// Renders the tab bar, the active tab and the status line.
    #[instrument(skip(self, frame), level = "trace")]
    pub fn render(&self, frame: &mut Frame) {
        let layout = ui::frame_layout(frame.area());
        ui::render_tab_bar(frame, layout.tabs, self.active);
        let session = &self.session;
        match self.active {
            TabKind::Home => self.home.render(frame, layout.body, session),
            TabKind::Group => self.group.render(frame, layout.body, session),
            TabKind::GlobalScore => self.global_score.render(frame, layout.body, session),
            TabKind::Scoreboard => self.scoreboard.render(frame, layout.body, session),
            TabKind::Settings => self.settings.render(frame, layout.body, session),
        }
        ui::render_status(frame, layout.status, &self.notice);
    }

    /// Routes one key press: global shortcuts first, then the active tab.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Flow::Quit;
        }
        match key.code {
            KeyCode::Tab => {
                self.switch_tab(1);
                return Flow::Continue;
            }
            KeyCode::BackTab => {
                self.switch_tab(TabKind::iter().count() - 1);
                return Flow::Continue;
            }
            _ => {}
        }

        let session = &self.session;
        let tab: &mut dyn Tab = match self.active {
            TabKind::Home => &mut self.home,
            TabKind::Group => &mut self.group,
            TabKind::GlobalScore => &mut self.global_score,
            TabKind::Scoreboard => &mut self.scoreboard,
            TabKind::Settings => &mut self.settings,
        };
        let editing = tab.is_editing();
        let action = tab.handle_key(key, session);

        match action {
            TabAction::Stay => Flow::Continue,
            TabAction::Dispatch(command) => {
                self.dispatch(command);
                Flow::Continue
            }
            TabAction::Ignored if editing => Flow::Continue,
            TabAction::Ignored => match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Flow::Quit,
                KeyCode::Right => {
                    self.switch_tab(1);
                    Flow::Continue
                }
                KeyCode::Left => {
                    self.switch_tab(TabKind::iter().count() - 1);
                    Flow::Continue
                }
                KeyCode::Char(c) => {
                    if let Some(kind) = c
                        .to_digit(10)
                        .and_then(|d| TabKind::iter().nth((d as usize).checked_sub(1)?))
                    {
                        self.select_tab(kind);
                    }
                    Flow::Continue
                }
                _ => Flow::Continue,
            },
        }
    }

    /// Applies a command and lets the active tab react to the outcome.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, command: Command) {
        let notice = self.session.dispatch(command);
        debug!(notice = %notice, "Command applied");
        let session = &self.session;
        match self.active {
            TabKind::Home => self.home.after_dispatch(&notice, session),
            TabKind::Group => self.group.after_dispatch(&notice, session),
            TabKind::GlobalScore => self.global_score.after_dispatch(&notice, session),
            TabKind::Scoreboard => self.scoreboard.after_dispatch(&notice, session),
            TabKind::Settings => self.settings.after_dispatch(&notice, session),
        }
        if notice != Notice::Quiet {
            self.notice = notice;
        }
    }

    /// Makes `kind` the active tab.
    #[instrument(skip(self))]
    pub fn select_tab(&mut self, kind: TabKind) {
        debug!(from = %self.active, to = %kind, "Switching tab");
        self.active = kind;
        let session = &self.session;
        match kind {
            TabKind::Home => self.home.on_enter(session),
            TabKind::Group => self.group.on_enter(session),
            TabKind::GlobalScore => self.global_score.on_enter(session),
            TabKind::Scoreboard => self.scoreboard.on_enter(session),
            TabKind::Settings => self.settings.on_enter(session),
        }
    }

    #[instrument(skip(self))]
    fn switch_tab(&mut self, offset: usize) {
        let count = TabKind::iter().count();
        let pos = TabKind::iter().position(|k| k == self.active).unwrap_or(0);
        if let Some(next) = TabKind::iter().nth((pos + offset) % count) {
            self.select_tab(next);
        }
    }
}
