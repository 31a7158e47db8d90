//! Per-player match history
//!
//! Entries are kept in the order matches were played and keyed by a
//! per-player sequence number. Each entry also carries the human-readable
//! local timestamp the match was recorded at. Two matches recorded within
//! the same second share a timestamp label but remain separate entries;
//! [`MatchHistory::get`] and [`MatchHistory::by_timestamp`] give the
//! label-keyed view where the later match shadows the earlier one.

use crate::matches::MatchRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// One match as seen from a single player's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Position of this match in the owner's history, starting at 0
    pub sequence: u64,
    /// Local time label, e.g. `Tue Mar  5 09:30:07 2024`
    pub timestamp: String,
    /// Exact instant the match was recorded
    pub played_at: DateTime<Utc>,
    pub record: MatchRecord,
}

/// Ordered collection of a player's matches
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredHistory")]
pub struct MatchHistory {
    entries: Vec<HistoryEntry>,
    /// Timestamp label -> index of the newest entry stored under it
    #[serde(skip)]
    labels: HashMap<String, usize>,
}

#[derive(Deserialize)]
struct StoredHistory {
    entries: Vec<HistoryEntry>,
}

impl From<StoredHistory> for MatchHistory {
    fn from(stored: StoredHistory) -> Self {
        let labels = stored
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (entry.timestamp.clone(), index))
            .collect();
        Self {
            entries: stored.entries,
            labels,
        }
    }
}

impl MatchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record; returns the sequence number it was stored under
    pub(crate) fn push(
        &mut self,
        timestamp: String,
        played_at: DateTime<Utc>,
        record: MatchRecord,
    ) -> u64 {
        if self.labels.contains_key(&timestamp) {
            warn!(
                "Match {} shares timestamp '{}' with an earlier entry; label lookups return the newer match",
                record.match_id(),
                timestamp
            );
        }

        let index = self.entries.len();
        let sequence = index as u64;
        self.labels.insert(timestamp.clone(), index);
        self.entries.push(HistoryEntry {
            sequence,
            timestamp,
            played_at,
            record,
        });
        sequence
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn get_by_sequence(&self, sequence: u64) -> Option<&HistoryEntry> {
        usize::try_from(sequence)
            .ok()
            .and_then(|index| self.entries.get(index))
    }

    /// Most recent record stored under a timestamp label
    pub fn get(&self, timestamp: &str) -> Option<&MatchRecord> {
        self.labels
            .get(timestamp)
            .map(|&index| &self.entries[index].record)
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Label-keyed view of the history
    ///
    /// Each distinct timestamp appears once, at the position it was first
    /// used, holding the latest record stored under it.
    pub fn by_timestamp(&self) -> Vec<(&str, &MatchRecord)> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .filter(|entry| seen.insert(entry.timestamp.as_str()))
            .filter_map(|entry| {
                let label = entry.timestamp.as_str();
                self.get(label).map(|record| (label, record))
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a MatchHistory {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
