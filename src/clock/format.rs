//! Display formats for elapsed time.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tracing::instrument;

/// How the timer label renders elapsed time.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TimeFormat {
    /// `MM:SS:CC`, with an `H:` prefix once an hour has elapsed.
    #[default]
    Stopwatch,
    /// `HH:MM:SS`.
    Clock,
}

impl TimeFormat {
    /// Human-readable label for the settings tab.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::Stopwatch => "Stopwatch (MM:SS:CC)",
            Self::Clock => "Clock (HH:MM:SS)",
        }
    }

    /// Switches to the other format.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Stopwatch => Self::Clock,
            Self::Clock => Self::Stopwatch,
        }
    }
}
