//! Rating system configuration

use crate::error::EloError;
use crate::rating::math::DEFAULT_K_FACTOR;
use crate::types::{Rating, DEFAULT_RATING};
use serde::{Deserialize, Serialize};
use skillratings::elo::EloConfig;

/// K-factor and starting rating for the ELO calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Maximum rating swing of a single match
    pub k_factor: u32,
    /// Rating given to players created without one
    pub default_rating: Rating,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            k_factor: DEFAULT_K_FACTOR,
            default_rating: DEFAULT_RATING,
        }
    }
}

impl RatingConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.k_factor == 0 {
            return Err(EloError::ConfigurationError {
                message: "K-factor must be positive".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl From<&RatingConfig> for EloConfig {
    fn from(config: &RatingConfig) -> Self {
        EloConfig {
            k: config.k_factor as f64,
        }
    }
}
