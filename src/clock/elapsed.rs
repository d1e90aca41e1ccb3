//! Elapsed time as a single centisecond counter.

use derive_more::From;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::TimeFormat;

/// Centiseconds in one second.
pub const CENTIS_PER_SECOND: u64 = 100;
/// Seconds in one minute.
pub const SECONDS_PER_MINUTE: u64 = 60;
/// Minutes in one hour.
pub const MINUTES_PER_HOUR: u64 = 60;

const CENTIS_PER_MINUTE: u64 = CENTIS_PER_SECOND * SECONDS_PER_MINUTE;
const CENTIS_PER_HOUR: u64 = CENTIS_PER_MINUTE * MINUTES_PER_HOUR;

/// Accumulated stopwatch time, counted in hundredths of a second.
///
/// Hours, minutes, seconds and centiseconds are derived views of the one
/// counter, so rollover (100 cs → 1 s, 60 s → 1 min, 60 min → 1 h) can
/// never leave a field out of range.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    From,
    Serialize,
    Deserialize,
)]
pub struct Elapsed(u64);

impl Elapsed {
    /// Zero elapsed time.
    pub const ZERO: Self = Self(0);

    /// Creates an elapsed value from a centisecond count.
    pub const fn from_centis(centis: u64) -> Self {
        Self(centis)
    }

    /// Total centiseconds.
    pub const fn total_centis(self) -> u64 {
        self.0
    }

    /// Whole hours.
    pub const fn hours(self) -> u64 {
        self.0 / CENTIS_PER_HOUR
    }

    /// Minutes within the current hour (0..60).
    pub const fn minutes(self) -> u64 {
        (self.0 / CENTIS_PER_MINUTE) % MINUTES_PER_HOUR
    }

    /// Seconds within the current minute (0..60).
    pub const fn seconds(self) -> u64 {
        (self.0 / CENTIS_PER_SECOND) % SECONDS_PER_MINUTE
    }

    /// Centiseconds within the current second (0..100).
    pub const fn centis(self) -> u64 {
        self.0 % CENTIS_PER_SECOND
    }

    /// Advances by exactly one centisecond.
    pub(super) fn advance(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// Renders the elapsed time in the requested format.
    #[instrument(level = "trace")]
    pub fn format(self, format: TimeFormat) -> String {
        match format {
            TimeFormat::Stopwatch if self.hours() > 0 => format!(
                "{}:{:02}:{:02}:{:02}",
                self.hours(),
                self.minutes(),
                self.seconds(),
                self.centis()
            ),
            TimeFormat::Stopwatch => format!(
                "{:02}:{:02}:{:02}",
                self.minutes(),
                self.seconds(),
                self.centis()
            ),
            TimeFormat::Clock => format!(
                "{:02}:{:02}:{:02}",
                self.hours(),
                self.minutes(),
                self.seconds()
            ),
        }
    }
}

impl std::fmt::Display for Elapsed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format(TimeFormat::Stopwatch))
    }
}
