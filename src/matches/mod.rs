//! Match resolution: the recorder, its clock, the immutable match record and
//! replayable match logs.

pub mod clock;
pub mod log;
pub mod record;
pub mod recorder;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use log::{MatchEntry, MatchLog, PlayerSeed};
pub use record::MatchRecord;
pub use recorder::MatchRecorder;
