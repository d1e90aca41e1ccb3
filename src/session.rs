//! Session - applies UI commands to the timer, roster and scoreboard.
//!
//! Any front end drives the core through [`Session::dispatch`] with plain
//! [`Command`] values and renders the returned [`Notice`].

use derive_getters::Getters;
use derive_more::Display;
use tracing::{debug, info, instrument, warn};

use crate::{Elapsed, Roster, RosterCollector, RosterError, Scoreboard, Settings, TimerClock};

/// A discrete user action or tick pulse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start (or restart) the timer.
    Start,
    /// Stop the timer.
    Stop,
    /// Stop the timer and clear elapsed time.
    Reset,
    /// One pulse from the tick source.
    Tick,
    /// Open the given number of player slots.
    SetGroupSize(String),
    /// Fill one player slot.
    RecordName {
        /// Zero-based slot index.
        index: usize,
        /// Player name.
        name: String,
    },
    /// Accept the pending roster.
    SubmitRoster,
    /// Add one point to the player at this roster index.
    AwardPoint(usize),
    /// Remove one point from the player at this roster index.
    DeductPoint(usize),
    /// Replace the session settings.
    SaveSettings(Settings),
}

/// Status-line feedback from a dispatched command.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Notice {
    /// Nothing worth showing.
    #[display("")]
    Quiet,
    /// Informational message.
    #[display("{_0}")]
    Info(String),
    /// Recoverable error message.
    #[display("{_0}")]
    Error(String),
}

impl Notice {
    /// Returns true for [`Notice::Error`].
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl From<RosterError> for Notice {
    fn from(err: RosterError) -> Self {
        Self::Error(err.kind.to_string())
    }
}

/// All core state owned by the UI thread.
#[derive(Debug, Clone, Default, Getters)]
pub struct Session {
    clock: TimerClock,
    roster: RosterCollector,
    scoreboard: Scoreboard,
    settings: Settings,
}

impl Session {
    /// Creates a session with the given initial settings.
    #[instrument]
    pub fn new(settings: Settings) -> Self {
        info!("Creating Session");
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Elapsed time in the configured format.
    pub fn elapsed_display(&self) -> String {
        self.clock.display(self.settings.time_format)
    }

    /// The accepted roster, if any.
    pub fn accepted_roster(&self) -> Option<&Roster> {
        self.roster.accepted().as_ref()
    }

    /// Applies one command.
    #[instrument(skip(self), level = "debug")]
    pub fn dispatch(&mut self, command: Command) -> Notice {
        match command {
            Command::Start => {
                self.clock.start();
                Notice::Info("Timer running".to_string())
            }
            Command::Stop => {
                self.clock.stop();
                Notice::Info(format!("Timer stopped at {}", self.elapsed_display()))
            }
            Command::Reset => {
                self.clock.reset();
                Notice::Info("Timer reset".to_string())
            }
            Command::Tick => {
                self.tick();
                Notice::Quiet
            }
            Command::SetGroupSize(raw) => match self.roster.set_group_size(&raw) {
                Ok(size) => Notice::Info(format!("Enter names for {} players", size)),
                Err(e) => {
                    warn!(error = %e, "Group size rejected");
                    e.into()
                }
            },
            Command::RecordName { index, name } => {
                self.roster.record_name(index, name);
                Notice::Quiet
            }
            Command::SubmitRoster => self.submit_roster(),
            Command::AwardPoint(index) => self.adjust_score(index, true),
            Command::DeductPoint(index) => self.adjust_score(index, false),
            Command::SaveSettings(settings) => {
                self.settings = settings;
                info!(time_format = %settings.time_format, "Settings saved");
                Notice::Info("Settings saved successfully!".to_string())
            }
        }
    }

    /// Applies one tick, returning the new elapsed time when running.
    pub fn tick(&mut self) -> Option<Elapsed> {
        self.clock.tick()
    }

    #[instrument(skip(self))]
    fn submit_roster(&mut self) -> Notice {
        match self.roster.submit() {
            Ok(roster) => {
                let count = roster.len();
                self.scoreboard = Scoreboard::from_roster(roster);
                Notice::Info(format!("Roster accepted: {} players", count))
            }
            Err(e) => {
                warn!(error = %e, "Roster rejected");
                e.into()
            }
        }
    }

    #[instrument(skip(self))]
    fn adjust_score(&mut self, index: usize, award: bool) -> Notice {
        let score = if award {
            self.scoreboard.award(index, 1)
        } else {
            self.scoreboard.deduct(index, 1)
        };
        match score {
            Some(score) => {
                debug!(index, score, "Score adjusted");
                Notice::Quiet
            }
            None => Notice::Error("No player selected".to_string()),
        }
    }
}
