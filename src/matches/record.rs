//! Immutable record of one resolved match

use crate::types::{ExpectedWinRates, MatchSide, PlayerName, Rating, RatingPair};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Result of resolving one match between two players
///
/// Names are copied at resolution time, so renaming a player later does not
/// touch records already stored in any history. Both participants receive
/// an identical copy, sharing the same `match_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    match_id: Uuid,
    winner_name: PlayerName,
    loser_name: PlayerName,
    starting_ratings: RatingPair,
    final_ratings: RatingPair,
    expected_win_rates: ExpectedWinRates,
}

impl MatchRecord {
    pub(crate) fn new(
        winner_name: PlayerName,
        loser_name: PlayerName,
        starting_ratings: RatingPair,
        final_ratings: RatingPair,
        expected_win_rates: ExpectedWinRates,
    ) -> Self {
        Self {
            match_id: Uuid::new_v4(),
            winner_name,
            loser_name,
            starting_ratings,
            final_ratings,
            expected_win_rates,
        }
    }

    pub fn match_id(&self) -> Uuid {
        self.match_id
    }

    pub fn winner_name(&self) -> &str {
        &self.winner_name
    }

    pub fn loser_name(&self) -> &str {
        &self.loser_name
    }

    /// Ratings before the update
    pub fn starting_ratings(&self) -> RatingPair {
        self.starting_ratings
    }

    /// Ratings after the update
    pub fn final_ratings(&self) -> RatingPair {
        self.final_ratings
    }

    pub fn expected_win_rates(&self) -> ExpectedWinRates {
        self.expected_win_rates
    }

    /// Points the winner gained, which is also what the loser gave up
    pub fn rating_change(&self) -> Rating {
        self.final_ratings.winner - self.starting_ratings.winner
    }

    /// Side played by `name`, if they took part in this match
    pub fn side_of(&self, name: &str) -> Option<MatchSide> {
        if self.winner_name == name {
            Some(MatchSide::Winner)
        } else if self.loser_name == name {
            Some(MatchSide::Loser)
        } else {
            None
        }
    }

    /// Name of the other participant from `name`'s point of view
    pub fn opponent_of(&self, name: &str) -> Option<&str> {
        match self.side_of(name)? {
            MatchSide::Winner => Some(&self.loser_name),
            MatchSide::Loser => Some(&self.winner_name),
        }
    }
}
