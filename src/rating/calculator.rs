//! Rating calculator trait and implementations
//!
//! This module defines the interface the match recorder uses to turn two
//! ratings into an expected win probability and a rating transfer, together
//! with the K-factor ELO implementation.

use crate::config::RatingConfig;
use crate::error::EloError;
use crate::rating::math;
use crate::types::Rating;
use std::sync::Mutex;

/// Trait for calculating the outcome of a head-to-head match
pub trait RatingCalculator: Send + Sync {
    /// Expected probability that `rating_a` beats `rating_b`
    fn win_probability(&self, rating_a: Rating, rating_b: Rating) -> f64;

    /// Points transferred from loser to winner given the winner's probability
    fn rating_delta(&self, winner_win_probability: f64) -> Rating;

    /// Get the initial rating for new players
    fn get_initial_rating(&self) -> Rating;

    /// Get current configuration as JSON
    fn config(&self) -> serde_json::Value;

    /// Update configuration from JSON
    fn update_config(&mut self, config: serde_json::Value) -> crate::error::Result<()>;
}

/// Classic two-player ELO with a fixed K-factor
#[derive(Debug, Clone, Default)]
pub struct EloRatingCalculator {
    config: RatingConfig,
}

impl EloRatingCalculator {
    /// Create a new ELO calculator, rejecting invalid configuration
    pub fn new(config: RatingConfig) -> crate::error::Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    pub fn k_factor(&self) -> u32 {
        self.config.k_factor
    }

    pub fn rating_config(&self) -> &RatingConfig {
        &self.config
    }
}

impl RatingCalculator for EloRatingCalculator {
    fn win_probability(&self, rating_a: Rating, rating_b: Rating) -> f64 {
        math::win_probability(rating_a, rating_b)
    }

    fn rating_delta(&self, winner_win_probability: f64) -> Rating {
        math::rating_delta(winner_win_probability, self.config.k_factor)
    }

    fn get_initial_rating(&self) -> Rating {
        self.config.default_rating
    }

    fn config(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or(serde_json::Value::Null)
    }

    fn update_config(&mut self, config: serde_json::Value) -> crate::error::Result<()> {
        let new_config: RatingConfig =
            serde_json::from_value(config).map_err(|e| EloError::ConfigurationError {
                message: format!("Invalid ELO configuration: {}", e),
            })?;

        new_config.validate()?;
        self.config = new_config;
        Ok(())
    }
}

/// Mock rating calculator for testing
///
/// Returns a fixed probability and delta and records every probability
/// request it receives.
#[derive(Debug)]
pub struct MockRatingCalculator {
    probability_calls: Mutex<Vec<(Rating, Rating)>>,
    fixed_probability: f64,
    fixed_delta: Rating,
    initial_rating: Rating,
}

impl MockRatingCalculator {
    pub fn new(fixed_probability: f64, fixed_delta: Rating) -> Self {
        Self {
            probability_calls: Mutex::new(Vec::new()),
            fixed_probability,
            fixed_delta,
            initial_rating: crate::types::DEFAULT_RATING,
        }
    }

    /// Get all probability calls made (for testing)
    pub fn get_probability_calls(&self) -> Vec<(Rating, Rating)> {
        self.probability_calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl RatingCalculator for MockRatingCalculator {
    fn win_probability(&self, rating_a: Rating, rating_b: Rating) -> f64 {
        if let Ok(mut calls) = self.probability_calls.lock() {
            calls.push((rating_a, rating_b));
        }
        self.fixed_probability
    }

    fn rating_delta(&self, _winner_win_probability: f64) -> Rating {
        self.fixed_delta
    }

    fn get_initial_rating(&self) -> Rating {
        self.initial_rating
    }

    fn config(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "mock",
            "fixed_probability": self.fixed_probability,
            "fixed_delta": self.fixed_delta,
        })
    }

    fn update_config(&mut self, config: serde_json::Value) -> crate::error::Result<()> {
        if let Some(probability) = config.get("fixed_probability").and_then(|v| v.as_f64()) {
            self.fixed_probability = probability;
        }
        if let Some(delta) = config.get("fixed_delta").and_then(|v| v.as_i64()) {
            self.fixed_delta = delta;
        }
        Ok(())
    }
}
