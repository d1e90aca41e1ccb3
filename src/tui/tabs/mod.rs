//! Tab implementations.

mod global_score;
mod group;
mod home;
mod scoreboard;
mod settings;

pub use global_score::GlobalScoreTab;
pub use group::{GroupFocus, GroupTab};
pub use home::HomeTab;
pub use scoreboard::ScoreboardTab;
pub use settings::SettingsTab;
