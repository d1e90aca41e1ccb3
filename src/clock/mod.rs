//! Stopwatch clock - elapsed-time accumulation and the start/stop/reset state machine.

mod elapsed;
mod format;
mod timer;

pub use elapsed::Elapsed;
pub use format::TimeFormat;
pub use timer::{TickSubscription, TimerClock, TimerState};
