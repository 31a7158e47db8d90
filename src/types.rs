//! Common types used throughout the rating tracker

use serde::{Deserialize, Serialize};
use skillratings::elo::EloRating;

/// Player identifier; unique by convention
pub type PlayerName = String;

/// Integer ELO rating. Unbounded in both directions.
pub type Rating = i64;

/// Rating assigned to players created without an explicit rating
pub const DEFAULT_RATING: Rating = 1000;

/// A winner/loser pair of ratings captured at one point of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingPair {
    pub winner: Rating,
    pub loser: Rating,
}

impl RatingPair {
    pub fn new(winner: Rating, loser: Rating) -> Self {
        Self { winner, loser }
    }
}

/// Pre-match win probabilities of both sides
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpectedWinRates {
    pub winner: f64,
    pub loser: f64,
}

impl ExpectedWinRates {
    /// Build from the winner's probability; the loser gets the complement
    pub fn from_winner(winner_probability: f64) -> Self {
        Self {
            winner: winner_probability,
            loser: 1.0 - winner_probability,
        }
    }
}

/// Which side of a match a player was on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchSide {
    Winner,
    Loser,
}

impl std::fmt::Display for MatchSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchSide::Winner => write!(f, "Winner"),
            MatchSide::Loser => write!(f, "Loser"),
        }
    }
}

/// Lift an integer rating into the skillratings representation
pub fn to_elo_rating(rating: Rating) -> EloRating {
    EloRating {
        rating: rating as f64,
    }
}
