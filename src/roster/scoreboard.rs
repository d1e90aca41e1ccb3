//! Scoreboard - per-player points ranked for display.

use derive_getters::Getters;
use derive_new::new;
use tracing::{debug, info, instrument};

use super::Roster;

/// One player's score.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct ScoreEntry {
    name: String,
    score: u32,
}

/// Scores for the players of the accepted roster, in roster order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct Scoreboard {
    entries: Vec<ScoreEntry>,
}

impl Scoreboard {
    /// Creates a scoreboard from explicit entries.
    #[instrument(skip(entries))]
    pub fn new(entries: Vec<ScoreEntry>) -> Self {
        Self { entries }
    }

    /// Seeds a scoreboard with every roster player at zero.
    #[instrument(skip(roster), fields(players = roster.len()))]
    pub fn from_roster(roster: &Roster) -> Self {
        info!("Seeding scoreboard from roster");
        Self {
            entries: roster
                .iter()
                .map(|name| ScoreEntry::new(name.to_string(), 0))
                .collect(),
        }
    }

    /// Number of players on the board.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when nobody is on the board.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds `points` to the player at `index` (roster order).
    ///
    /// Returns the new score, or `None` if no such player exists.
    #[instrument(skip(self))]
    pub fn award(&mut self, index: usize, points: u32) -> Option<u32> {
        let entry = self.entries.get_mut(index)?;
        entry.score = entry.score.saturating_add(points);
        debug!(player = %entry.name, score = entry.score, "Awarded points");
        Some(entry.score)
    }

    /// Removes `points` from the player at `index`, stopping at zero.
    #[instrument(skip(self))]
    pub fn deduct(&mut self, index: usize, points: u32) -> Option<u32> {
        let entry = self.entries.get_mut(index)?;
        entry.score = entry.score.saturating_sub(points);
        debug!(player = %entry.name, score = entry.score, "Deducted points");
        Some(entry.score)
    }

    /// Entries with their roster index, sorted by descending score.
    ///
    /// Ties keep roster order.
    pub fn ranked(&self) -> Vec<(usize, &ScoreEntry)> {
        let mut ranked: Vec<(usize, &ScoreEntry)> = self.entries.iter().enumerate().collect();
        ranked.sort_by(|(_, a), (_, b)| b.score.cmp(&a.score));
        ranked
    }

    /// Sum of all scores.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.score)).sum()
    }
}
