//! Player identity, rating and history

use crate::matches::MatchRecord;
use crate::player::history::{HistoryEntry, MatchHistory};
use crate::types::{MatchSide, PlayerName, Rating, DEFAULT_RATING};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use skillratings::elo::EloRating;

/// A rated player
///
/// The rating and history change only through
/// [`MatchRecorder::record_match`](crate::matches::MatchRecorder::record_match).
/// No internal synchronization is performed; share players across threads
/// behind your own lock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    name: PlayerName,
    rating: Rating,
    match_history: MatchHistory,
}

impl Player {
    /// Create a player with the default rating of 1000
    pub fn new(name: impl Into<PlayerName>) -> Self {
        Self::with_rating(name, DEFAULT_RATING)
    }

    pub fn with_rating(name: impl Into<PlayerName>, rating: Rating) -> Self {
        Self {
            name: name.into(),
            rating,
            match_history: MatchHistory::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the player. Records already in any history keep the old name.
    pub fn set_name(&mut self, name: impl Into<PlayerName>) {
        self.name = name.into();
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn match_history(&self) -> &MatchHistory {
        &self.match_history
    }

    pub fn games_played(&self) -> usize {
        self.match_history.len()
    }

    pub fn wins(&self) -> usize {
        self.count_side(MatchSide::Winner)
    }

    pub fn losses(&self) -> usize {
        self.count_side(MatchSide::Loser)
    }

    pub fn last_match(&self) -> Option<&HistoryEntry> {
        self.match_history.latest()
    }

    /// Saturates at the bounds of [`Rating`]
    pub(crate) fn adjust_rating(&mut self, delta: Rating) {
        self.rating = self.rating.saturating_add(delta);
    }

    pub(crate) fn push_history(
        &mut self,
        timestamp: String,
        played_at: DateTime<Utc>,
        record: MatchRecord,
    ) -> u64 {
        self.match_history.push(timestamp, played_at, record)
    }

    // Side is taken from the stored winner/loser names, which were copied
    // at match time, so a renamed player no longer matches old entries.
    fn count_side(&self, side: MatchSide) -> usize {
        self.match_history
            .iter()
            .filter(|entry| entry.record.side_of(&self.name) == Some(side))
            .count()
    }
}

impl From<&Player> for EloRating {
    fn from(player: &Player) -> Self {
        crate::types::to_elo_rating(player.rating)
    }
}
