//! S4D timer library - a tabbed terminal stopwatch with group roster support.
//!
//! # Architecture
//!
//! - **Clock**: elapsed-time accumulation and the start/stop/reset state machine
//! - **Roster**: group-size and player-name collection, plus the scoreboard
//! - **Session**: the command interface any front end drives
//! - **TUI**: ratatui tabs and the tick-driven event loop
//!
//! # Example
//!
//! ```
//! use s4d_timer::{Command, Session, Settings};
//!
//! let mut session = Session::new(Settings::new());
//! session.dispatch(Command::Start);
//! for _ in 0..250 {
//!     session.dispatch(Command::Tick);
//! }
//! session.dispatch(Command::Stop);
//! assert_eq!(session.elapsed_display(), "00:02:50");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod clock;
mod config;
mod roster;
mod session;
mod settings;

pub mod tui;

// Crate-level exports - Clock
pub use clock::{Elapsed, TickSubscription, TimeFormat, TimerClock, TimerState};

// Crate-level exports - Roster and scoreboard
pub use roster::{
    MAX_GROUP_SIZE, Roster, RosterCollector, RosterError, RosterErrorKind, ScoreEntry, Scoreboard,
};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};
pub use settings::Settings;

// Crate-level exports - Command interface
pub use session::{Command, Notice, Session};
