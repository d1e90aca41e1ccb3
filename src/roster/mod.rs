//! Player roster collection and the scoreboard seeded from it.

mod collector;
mod error;
mod scoreboard;

pub use collector::{MAX_GROUP_SIZE, Roster, RosterCollector};
pub use error::{RosterError, RosterErrorKind};
pub use scoreboard::{ScoreEntry, Scoreboard};
