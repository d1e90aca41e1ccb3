//! Stopwatch state machine.
//!
//! Two states, `Stopped` (initial) and `Running`, with the elapsed time
//! carried across both. Only ticks received while running advance the clock.

use derive_getters::Getters;
use strum::Display;
use tracing::{debug, info, instrument};

use super::{Elapsed, TimeFormat};

/// Observable state of a [`TimerClock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TimerState {
    /// Ticks are ignored.
    Stopped,
    /// Each tick advances elapsed time by one centisecond.
    Running,
}

/// An active subscription to the tick source.
///
/// Held by the clock only while it is running; its absence is what makes
/// the clock stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters)]
pub struct TickSubscription {
    /// Sequence number of the `start` call that created this subscription.
    id: u64,
    /// Ticks applied through this subscription.
    ticks: u64,
}

/// Elapsed-time accumulator driven by an external tick source.
#[derive(Debug, Clone, Default, Getters)]
pub struct TimerClock {
    elapsed: Elapsed,
    subscription: Option<TickSubscription>,
    #[getter(skip)]
    starts: u64,
}

impl TimerClock {
    /// Creates a stopped clock at zero.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> TimerState {
        if self.subscription.is_some() {
            TimerState::Running
        } else {
            TimerState::Stopped
        }
    }

    /// Returns true while ticks advance the clock.
    pub fn is_running(&self) -> bool {
        self.subscription.is_some()
    }

    /// Starts the clock, restarting the subscription if already running.
    ///
    /// Elapsed time is left unchanged.
    #[instrument(skip(self), fields(elapsed = %self.elapsed))]
    pub fn start(&mut self) {
        self.stop();
        self.starts += 1;
        self.subscription = Some(TickSubscription {
            id: self.starts,
            ticks: 0,
        });
        info!(subscription = self.starts, "Timer started");
    }

    /// Stops the clock. A no-op when already stopped.
    #[instrument(skip(self), fields(elapsed = %self.elapsed))]
    pub fn stop(&mut self) {
        if let Some(sub) = self.subscription.take() {
            info!(subscription = sub.id, ticks = sub.ticks, "Timer stopped");
        }
    }

    /// Stops the clock and clears elapsed time.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.stop();
        self.elapsed = Elapsed::ZERO;
        info!("Timer reset");
    }

    /// Applies one tick.
    ///
    /// Returns the new elapsed time when running, or `None` when the tick
    /// was ignored.
    pub fn tick(&mut self) -> Option<Elapsed> {
        let sub = self.subscription.as_mut()?;
        sub.ticks += 1;
        self.elapsed.advance();
        Some(self.elapsed)
    }

    /// Formats current elapsed time.
    pub fn display(&self, format: TimeFormat) -> String {
        self.elapsed.format(format)
    }

    /// Applies `count` ticks, returning how many advanced the clock.
    #[instrument(skip(self))]
    pub fn tick_n(&mut self, count: u64) -> u64 {
        let applied = (0..count).filter(|_| self.tick().is_some()).count() as u64;
        debug!(applied, elapsed = %self.elapsed, "Applied ticks");
        applied
    }
}
