//! Test fixtures shared by the integration tests

#![allow(dead_code)]

use chrono::{Local, TimeZone};
use elo_tracker::matches::{FixedClock, MatchRecorder};
use elo_tracker::rating::EloRatingCalculator;
use elo_tracker::{Player, Rating};
use std::sync::Arc;

/// Label produced by [`fixed_clock`] before it is advanced
pub const FIXED_TIMESTAMP: &str = "Tue Mar  5 09:30:07 2024";

/// Clock pinned to 2024-03-05 09:30:07 local time
pub fn fixed_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(
        Local.with_ymd_and_hms(2024, 3, 5, 9, 30, 7).unwrap(),
    ))
}

/// Default ELO recorder driven by a controllable clock
pub fn recorder_with_clock() -> (MatchRecorder, Arc<FixedClock>) {
    let clock = fixed_clock();
    let recorder = MatchRecorder::new(Arc::new(EloRatingCalculator::default()), clock.clone());
    (recorder, clock)
}

/// Build a pair of players with the given ratings
pub fn player_pair(a: (&str, Rating), b: (&str, Rating)) -> (Player, Player) {
    (Player::with_rating(a.0, a.1), Player::with_rating(b.0, b.1))
}
