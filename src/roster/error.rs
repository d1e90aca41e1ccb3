//! Roster error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong while collecting a roster.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum RosterErrorKind {
    /// Group size was not a whole number from 0 to `MAX_GROUP_SIZE`.
    #[display("Invalid group size {input:?}: enter a whole number of players up to 64")]
    InvalidSize {
        /// The raw text that failed to parse.
        input: String,
    },
    /// Submit was attempted with blank player slots.
    #[display("Incomplete roster: missing names for players {}", format_slots(missing))]
    IncompleteRoster {
        /// Zero-based indices of the blank slots.
        missing: Vec<usize>,
    },
}

fn format_slots(missing: &[usize]) -> String {
    missing
        .iter()
        .map(|i| (i + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Roster error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Roster error: {} at {}:{}", kind, file, line)]
pub struct RosterError {
    /// Error kind.
    pub kind: RosterErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl RosterError {
    /// Creates a new roster error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: RosterErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns true for [`RosterErrorKind::InvalidSize`].
    pub fn is_invalid_size(&self) -> bool {
        matches!(self.kind, RosterErrorKind::InvalidSize { .. })
    }

    /// Returns true for [`RosterErrorKind::IncompleteRoster`].
    pub fn is_incomplete(&self) -> bool {
        matches!(self.kind, RosterErrorKind::IncompleteRoster { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_lists_one_based_slots() {
        let kind = RosterErrorKind::IncompleteRoster {
            missing: vec![0, 2],
        };
        assert_eq!(
            kind.to_string(),
            "Incomplete roster: missing names for players 1, 3"
        );
    }
}
