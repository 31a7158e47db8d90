//! ELO rating tracker
//!
//! This crate rates players in head-to-head matches with a K-factor ELO
//! update and keeps every resolved match in both participants' histories.
//!
//! ```
//! use elo_tracker::{MatchRecorder, Player};
//!
//! let recorder = MatchRecorder::default();
//! let mut underdog = Player::new("A");
//! let mut favourite = Player::with_rating("B", 1200);
//!
//! let record = recorder.record_match(&mut underdog, &mut favourite);
//! assert_eq!(underdog.rating(), 1024);
//! assert_eq!(favourite.rating(), 1176);
//! assert_eq!(record.expected_win_rates().winner, 0.24);
//! ```

pub mod config;
pub mod error;
pub mod matches;
pub mod player;
pub mod rating;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{EloError, Result};
pub use types::*;

// Re-export key components
pub use matches::{MatchRecord, MatchRecorder};
pub use player::{MatchHistory, Player, Roster};
pub use rating::{EloRatingCalculator, RatingCalculator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
