//! Group roster collection.
//!
//! A collector is sized by a raw group-size input, filled slot by slot, and
//! accepts the roster only once every slot holds a name.

use derive_getters::Getters;
use tracing::{debug, info, instrument, warn};

use super::{RosterError, RosterErrorKind};

/// Largest group size the collector will open slots for.
pub const MAX_GROUP_SIZE: usize = 64;

/// A finalized, validated sequence of player names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Number of players.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true when the roster holds no players.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates player names in entry order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// Collects player names for one group.
#[derive(Debug, Clone, Default, Getters)]
pub struct RosterCollector {
    expected_size: usize,
    pending: Vec<String>,
    accepted: Option<Roster>,
}

impl RosterCollector {
    /// Creates an empty collector expecting no players.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `raw` as the group size and opens that many blank slots.
    ///
    /// Sizes above [`MAX_GROUP_SIZE`] are rejected like unparsable input.
    /// On failure nothing changes, including any previously accepted roster.
    #[instrument(skip(self))]
    pub fn set_group_size(&mut self, raw: &str) -> Result<usize, RosterError> {
        let size = raw
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|size| *size <= MAX_GROUP_SIZE)
            .ok_or_else(|| {
                warn!(input = %raw, max = MAX_GROUP_SIZE, "Rejected group size");
                RosterError::new(RosterErrorKind::InvalidSize {
                    input: raw.to_string(),
                })
            })?;

        self.expected_size = size;
        self.pending = vec![String::new(); size];
        self.accepted = None;
        info!(size, "Group size set");
        Ok(size)
    }

    /// Stores `name` in slot `index`.
    ///
    /// Blank names are accepted here and caught by [`submit`](Self::submit).
    #[instrument(skip(self, name))]
    pub fn record_name(&mut self, index: usize, name: impl Into<String>) {
        match self.pending.get_mut(index) {
            Some(slot) => {
                *slot = name.into();
                debug!(index, "Recorded player name");
            }
            None => warn!(
                index,
                expected_size = self.expected_size,
                "Ignoring name for nonexistent slot"
            ),
        }
    }

    /// Indices of slots that are still blank.
    pub fn missing(&self) -> Vec<usize> {
        self.pending
            .iter()
            .enumerate()
            .filter(|(_, name)| name.trim().is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// Accepts the pending names as the roster.
    #[instrument(skip(self), fields(expected_size = self.expected_size))]
    pub fn submit(&mut self) -> Result<&Roster, RosterError> {
        let missing = self.missing();
        if !missing.is_empty() {
            warn!(?missing, "Roster incomplete");
            return Err(RosterError::new(RosterErrorKind::IncompleteRoster {
                missing,
            }));
        }

        let roster = Roster {
            names: self.pending.iter().map(|n| n.trim().to_string()).collect(),
        };
        for name in roster.iter() {
            info!(player = %name, "Player accepted");
        }
        info!(players = roster.len(), "Roster accepted");

        Ok(self.accepted.insert(roster))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_size_is_invalid() {
        let mut collector = RosterCollector::new();
        let err = collector.set_group_size("-1").unwrap_err();
        assert!(err.is_invalid_size());
    }

    #[test]
    fn test_size_input_is_trimmed() {
        let mut collector = RosterCollector::new();
        assert_eq!(collector.set_group_size(" 4\n").unwrap(), 4);
        assert_eq!(collector.pending().len(), 4);
    }

    #[test]
    fn test_out_of_range_name_is_ignored() {
        let mut collector = RosterCollector::new();
        collector.set_group_size("1").unwrap();
        collector.record_name(5, "Ghost");
        assert_eq!(collector.pending(), &vec![String::new()]);
    }

    #[test]
    fn test_whitespace_name_counts_as_missing() {
        let mut collector = RosterCollector::new();
        collector.set_group_size("2").unwrap();
        collector.record_name(0, "  ");
        collector.record_name(1, "Bob");
        assert_eq!(collector.missing(), vec![0]);
    }

    #[test]
    fn test_zero_players_submits_empty_roster() {
        let mut collector = RosterCollector::new();
        collector.set_group_size("0").unwrap();
        assert!(collector.submit().unwrap().is_empty());
    }

    #[test]
    fn test_new_size_clears_accepted_roster() {
        let mut collector = RosterCollector::new();
        collector.set_group_size("1").unwrap();
        collector.record_name(0, "Alice");
        collector.submit().unwrap();
        collector.set_group_size("2").unwrap();
        assert!(collector.accepted().is_none());
    }
}
