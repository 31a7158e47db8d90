//! TOML match logs replayed through a roster
//!
//! ```toml
//! [[players]]
//! name = "alice"
//! rating = 1200
//!
//! [[matches]]
//! winner = "alice"
//! loser = "bob"
//! ```
//!
//! Players listed under `[[players]]` are registered first; anyone who only
//! appears in `[[matches]]` starts at the roster's default rating.

use crate::error::EloError;
use crate::matches::{MatchRecord, MatchRecorder};
use crate::player::Roster;
use crate::types::{PlayerName, Rating};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Starting entry for a player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSeed {
    pub name: PlayerName,
    pub rating: Option<Rating>,
}

/// One played match, winner first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEntry {
    pub winner: PlayerName,
    pub loser: PlayerName,
}

/// Ordered list of seeds and matches
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchLog {
    pub players: Vec<PlayerSeed>,
    pub matches: Vec<MatchEntry>,
}

impl MatchLog {
    pub fn from_toml_str(contents: &str) -> crate::error::Result<Self> {
        let log: Self = toml::from_str(contents).map_err(|e| EloError::InvalidMatchLog {
            reason: e.to_string(),
        })?;
        log.validate()?;
        Ok(log)
    }

    pub fn from_file(path: &Path) -> crate::error::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read match log {}", path.display()))?;
        Self::from_toml_str(&contents)
    }

    fn validate(&self) -> crate::error::Result<()> {
        if let Some(seed) = self.players.iter().find(|seed| seed.name.is_empty()) {
            return Err(EloError::InvalidMatchLog {
                reason: format!("player with rating {:?} has an empty name", seed.rating),
            }
            .into());
        }

        for (index, entry) in self.matches.iter().enumerate() {
            if entry.winner.is_empty() || entry.loser.is_empty() {
                return Err(EloError::InvalidMatchLog {
                    reason: format!("match #{} has an empty player name", index + 1),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Register the seeds and record every match in order
    pub fn replay(
        &self,
        roster: &mut Roster,
        recorder: &MatchRecorder,
    ) -> crate::error::Result<Vec<MatchRecord>> {
        for seed in &self.players {
            match seed.rating {
                Some(rating) => roster.register_with_rating(seed.name.as_str(), rating)?,
                None => roster.register(seed.name.as_str())?,
            };
        }

        let mut records = Vec::with_capacity(self.matches.len());
        for (index, entry) in self.matches.iter().enumerate() {
            roster.get_or_register(&entry.winner);
            roster.get_or_register(&entry.loser);

            let record = roster
                .record_match(recorder, &entry.winner, &entry.loser)
                .with_context(|| format!("Failed to record match #{}", index + 1))?;
            records.push(record);
        }

        info!(
            "Replayed {} matches across {} players",
            records.len(),
            roster.len()
        );
        Ok(records)
    }
}
