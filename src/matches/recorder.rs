//! Resolution of a single match between two players
//!
//! The recorder asks its [`RatingCalculator`] for the winner's expected
//! probability and the resulting rating transfer, moves the points between
//! the two players, and stores an identical [`MatchRecord`] in both
//! histories under the current local timestamp.

use crate::config::RatingConfig;
use crate::matches::clock::{Clock, SystemClock};
use crate::matches::record::MatchRecord;
use crate::player::Player;
use crate::rating::{EloRatingCalculator, RatingCalculator};
use crate::types::{ExpectedWinRates, PlayerName, RatingPair};
use crate::utils::format_match_timestamp;
use chrono::Utc;
use std::sync::Arc;
use tracing::debug;

/// Applies match outcomes to players
#[derive(Clone)]
pub struct MatchRecorder {
    calculator: Arc<dyn RatingCalculator>,
    clock: Arc<dyn Clock>,
}

impl MatchRecorder {
    pub fn new(calculator: Arc<dyn RatingCalculator>, clock: Arc<dyn Clock>) -> Self {
        Self { calculator, clock }
    }

    /// ELO recorder with the given configuration and the wall clock
    pub fn with_config(config: RatingConfig) -> crate::error::Result<Self> {
        let calculator = EloRatingCalculator::new(config)?;
        Ok(Self::new(Arc::new(calculator), Arc::new(SystemClock)))
    }

    pub fn calculator(&self) -> &dyn RatingCalculator {
        self.calculator.as_ref()
    }

    /// Create a player starting at the calculator's initial rating
    pub fn new_player(&self, name: impl Into<PlayerName>) -> Player {
        Player::with_rating(name, self.calculator.get_initial_rating())
    }

    /// Record that `winner` beat `loser`
    ///
    /// Both ratings are updated in place and the returned record is also
    /// appended to each player's history. Winner and loser must be passed in
    /// that order; a reversed call silently transfers points the wrong way.
    ///
    /// Names are not checked: two distinct players sharing a name resolve
    /// like any other pair. Name uniqueness is enforced by [`Roster`].
    ///
    /// [`Roster`]: crate::player::Roster
    pub fn record_match(&self, winner: &mut Player, loser: &mut Player) -> MatchRecord {
        let starting_ratings = RatingPair::new(winner.rating(), loser.rating());

        let probability = self
            .calculator
            .win_probability(starting_ratings.winner, starting_ratings.loser);
        let delta = self.calculator.rating_delta(probability);

        winner.adjust_rating(delta);
        loser.adjust_rating(-delta);

        let record = MatchRecord::new(
            winner.name().to_string(),
            loser.name().to_string(),
            starting_ratings,
            RatingPair::new(winner.rating(), loser.rating()),
            ExpectedWinRates::from_winner(probability),
        );

        let now = self.clock.now();
        let timestamp = format_match_timestamp(&now);
        let played_at = now.with_timezone(&Utc);

        winner.push_history(timestamp.clone(), played_at, record.clone());
        loser.push_history(timestamp, played_at, record.clone());

        debug!(
            "{} ({} -> {}) beat {} ({} -> {}), expected {:.2}, delta {}",
            record.winner_name(),
            starting_ratings.winner,
            record.final_ratings().winner,
            record.loser_name(),
            starting_ratings.loser,
            record.final_ratings().loser,
            probability,
            delta
        );

        record
    }
}

impl Default for MatchRecorder {
    fn default() -> Self {
        Self::new(
            Arc::new(EloRatingCalculator::default()),
            Arc::new(SystemClock),
        )
    }
}

impl std::fmt::Debug for MatchRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchRecorder")
            .field("calculator", &self.calculator.config())
            .finish_non_exhaustive()
    }
}
