//! Name-keyed registry of players
//!
//! A roster makes the "names are unique" convention explicit: registering a
//! name twice is an error, and matches can be recorded by name.

use crate::error::EloError;
use crate::matches::{MatchRecord, MatchRecorder};
use crate::player::Player;
use crate::types::{PlayerName, Rating};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

/// Collection of players addressed by name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    players: HashMap<PlayerName, Player>,
    default_rating: Rating,
}

impl Roster {
    /// Create an empty roster; unrated registrations start at `default_rating`
    pub fn new(default_rating: Rating) -> Self {
        Self {
            players: HashMap::new(),
            default_rating,
        }
    }

    pub fn default_rating(&self) -> Rating {
        self.default_rating
    }

    /// Register a new player at the roster's default rating
    pub fn register(&mut self, name: impl Into<PlayerName>) -> crate::error::Result<&Player> {
        let rating = self.default_rating;
        self.register_with_rating(name, rating)
    }

    pub fn register_with_rating(
        &mut self,
        name: impl Into<PlayerName>,
        rating: Rating,
    ) -> crate::error::Result<&Player> {
        self.insert(Player::with_rating(name, rating))
    }

    /// Add an existing player, e.g. one restored from storage
    pub fn insert(&mut self, player: Player) -> crate::error::Result<&Player> {
        let name = player.name().to_string();
        if self.players.contains_key(&name) {
            return Err(EloError::DuplicatePlayer { name }.into());
        }

        info!("Registered player {} at rating {}", name, player.rating());
        Ok(&*self.players.entry(name).or_insert(player))
    }

    /// Look up a player, registering them at the default rating if absent
    pub fn get_or_register(&mut self, name: &str) -> &Player {
        let default_rating = self.default_rating;
        self.players.entry(name.to_string()).or_insert_with(|| {
            info!("Registered player {} at rating {}", name, default_rating);
            Player::with_rating(name, default_rating)
        })
    }

    pub fn get(&self, name: &str) -> Option<&Player> {
        self.players.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.players.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Player> {
        self.players.remove(name)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// Record a match between two registered players
    pub fn record_match(
        &mut self,
        recorder: &MatchRecorder,
        winner: &str,
        loser: &str,
    ) -> crate::error::Result<MatchRecord> {
        if winner == loser {
            return Err(EloError::SelfMatch {
                name: winner.to_string(),
            }
            .into());
        }
        if !self.players.contains_key(loser) {
            return Err(EloError::PlayerNotFound {
                name: loser.to_string(),
            }
            .into());
        }

        let mut winning_player =
            self.players
                .remove(winner)
                .ok_or_else(|| EloError::PlayerNotFound {
                    name: winner.to_string(),
                })?;

        let result = match self.players.get_mut(loser) {
            Some(losing_player) => Ok(recorder.record_match(&mut winning_player, losing_player)),
            None => Err(EloError::PlayerNotFound {
                name: loser.to_string(),
            }
            .into()),
        };

        self.players.insert(winner.to_string(), winning_player);
        result
    }

    /// Players ordered by rating, highest first; ties broken by name
    pub fn standings(&self) -> Vec<&Player> {
        let mut standings: Vec<&Player> = self.players.values().collect();
        standings.sort_by(|a, b| {
            b.rating()
                .cmp(&a.rating())
                .then_with(|| a.name().cmp(b.name()))
        });
        standings
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_RATING)
    }
}
