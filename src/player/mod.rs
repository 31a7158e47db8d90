//! Players, their match histories and name-keyed rosters

pub mod history;
pub mod model;
pub mod roster;

// Re-export commonly used types
pub use history::{HistoryEntry, MatchHistory};
pub use model::Player;
pub use roster::Roster;
