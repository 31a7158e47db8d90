//! ELO rating math and the calculator seam used by the match recorder

pub mod calculator;
pub mod math;

// Re-export commonly used types
pub use calculator::{EloRatingCalculator, MockRatingCalculator, RatingCalculator};
pub use math::{rating_delta, win_probability, DEFAULT_K_FACTOR};
