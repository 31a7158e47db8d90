//! ELO expected-score and rating-delta arithmetic
//!
//! These are pure functions over integer ratings. The win probability is
//! deliberately truncated to two decimal places before it is used to derive
//! the rating delta, which biases every probability slightly downwards.

use crate::types::Rating;

/// Maximum number of rating points a single match can move
pub const DEFAULT_K_FACTOR: u32 = 32;

/// Rating gap that corresponds to a tenfold change in odds
pub const RATING_SCALE: f64 = 400.0;

/// Probability that a player rated `rating_a` beats one rated `rating_b`,
/// truncated (not rounded) to two decimal places.
///
/// Uses `10^(a/400) / (10^(a/400) + 10^(b/400))`. For ratings large enough
/// to overflow `f64` the equivalent logistic form is used instead.
pub fn win_probability(rating_a: Rating, rating_b: Rating) -> f64 {
    truncate_to_hundredths(raw_win_probability(rating_a, rating_b))
}

/// Untruncated expected score of `rating_a` against `rating_b`
pub fn raw_win_probability(rating_a: Rating, rating_b: Rating) -> f64 {
    let transformed_a = 10f64.powf(rating_a as f64 / RATING_SCALE);
    let transformed_b = 10f64.powf(rating_b as f64 / RATING_SCALE);
    let probability = transformed_a / (transformed_a + transformed_b);

    if probability.is_finite() {
        probability
    } else {
        let exponent = (rating_b as f64 - rating_a as f64) / RATING_SCALE;
        1.0 / (1.0 + 10f64.powf(exponent))
    }
}

/// Rating points the winner takes from the loser, given the winner's
/// pre-match probability. Exact halves round to the nearest even integer.
pub fn rating_delta(winner_win_probability: f64, k_factor: u32) -> Rating {
    ((1.0 - winner_win_probability) * k_factor as f64).round_ties_even() as Rating
}

fn truncate_to_hundredths(value: f64) -> f64 {
    (value * 100.0).floor() / 100.0
}
