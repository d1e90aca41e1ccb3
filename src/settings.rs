//! In-session settings - user preferences that last until the process exits.

use tracing::instrument;

use crate::{AppConfig, TimeFormat};

/// User-configurable settings for the running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    /// How elapsed time is rendered.
    pub time_format: TimeFormat,
}

impl Settings {
    /// Creates settings with defaults.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial settings taken from the loaded configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            time_format: *config.time_format(),
        }
    }
}
