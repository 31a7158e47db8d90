//! Integration tests for the rating tracker
//!
//! These tests drive the public API end to end:
//! - Recording matches between players and checking both histories
//! - Roster bookkeeping and standings
//! - Replaying match logs with custom configuration

mod fixtures;

use elo_tracker::config::{AppConfig, RatingConfig};
use elo_tracker::matches::MatchLog;
use elo_tracker::{EloError, MatchRecorder, Player, RatingPair, Roster};
use fixtures::{player_pair, recorder_with_clock, FIXED_TIMESTAMP};

#[test]
fn test_underdog_scenario() {
    let (recorder, _clock) = recorder_with_clock();
    let (mut a, mut b) = player_pair(("A", 1000), ("B", 1200));

    let record = recorder.record_match(&mut a, &mut b);

    assert_eq!(a.rating(), 1024);
    assert_eq!(b.rating(), 1176);
    assert_eq!(record.winner_name(), "A");
    assert_eq!(record.loser_name(), "B");
    assert_eq!(record.starting_ratings(), RatingPair::new(1000, 1200));
    assert_eq!(record.final_ratings(), RatingPair::new(1024, 1176));

    let rates = record.expected_win_rates();
    assert_eq!(rates.winner, 0.24);
    assert!((rates.loser - 0.76).abs() < 1e-9);
}

#[test]
fn test_equal_players() {
    let (recorder, _clock) = recorder_with_clock();
    let mut a = Player::new("A");
    let mut b = Player::new("B");

    recorder.record_match(&mut a, &mut b);

    assert_eq!(a.rating(), 1016);
    assert_eq!(b.rating(), 984);
}

#[test]
fn test_history_grows_in_both_players() {
    let (recorder, clock) = recorder_with_clock();
    let mut a = Player::new("A");
    let mut b = Player::new("B");
    let mut c = Player::new("C");

    let first = recorder.record_match(&mut a, &mut b);
    clock.advance_seconds(5);
    recorder.record_match(&mut c, &mut a);

    assert_eq!(a.match_history().len(), 2);
    assert_eq!(b.match_history().len(), 1);
    assert_eq!(c.match_history().len(), 1);

    assert_eq!(a.match_history().get(FIXED_TIMESTAMP), Some(&first));
    assert_eq!(b.match_history().get(FIXED_TIMESTAMP), Some(&first));

    let latest = a.last_match().unwrap();
    assert_eq!(latest.sequence, 1);
    assert_eq!(latest.timestamp, "Tue Mar  5 09:30:12 2024");
    assert_eq!(latest.record.winner_name(), "C");
    assert_eq!(a.wins(), 1);
    assert_eq!(a.losses(), 1);
}

#[test]
fn test_rating_can_go_negative() {
    let (recorder, clock) = recorder_with_clock();
    let (mut strong, mut weak) = player_pair(("strong", 40), ("weak", 20));

    for _ in 0..5 {
        recorder.record_match(&mut strong, &mut weak);
        clock.advance_seconds(1);
    }

    assert!(weak.rating() < 0);
    assert_eq!(strong.rating() + weak.rating(), 60);
}

#[test]
fn test_reversed_arguments_transfer_points_the_other_way() {
    let (recorder, _clock) = recorder_with_clock();
    let (mut a, mut b) = player_pair(("A", 1000), ("B", 1200));

    // B passed as winner: the favourite gains, p = 0.75 -> delta 8
    recorder.record_match(&mut b, &mut a);

    assert_eq!(b.rating(), 1208);
    assert_eq!(a.rating(), 992);
}

#[test]
fn test_players_sharing_a_name_resolve_normally() {
    let (recorder, _clock) = recorder_with_clock();
    let (mut sam, mut other_sam) = player_pair(("Sam", 1000), ("Sam", 1200));

    let record = recorder.record_match(&mut sam, &mut other_sam);

    assert_eq!(sam.rating(), 1024);
    assert_eq!(other_sam.rating(), 1176);
    assert_eq!(record.rating_change(), 24);
    assert_eq!(sam.match_history().get(FIXED_TIMESTAMP), Some(&record));
    assert_eq!(other_sam.match_history().get(FIXED_TIMESTAMP), Some(&record));
}

#[test]
fn test_roster_rejects_self_match() {
    let recorder = MatchRecorder::default();
    let mut roster = Roster::default();
    roster.register("A").unwrap();

    let err = roster.record_match(&recorder, "A", "A").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<EloError>(),
        Some(EloError::SelfMatch { .. })
    ));
    assert_eq!(roster.get("A").unwrap().rating(), 1000);
    assert!(roster.get("A").unwrap().match_history().is_empty());
}

#[test]
fn test_odd_k_factor_rounds_ties_to_even() {
    let recorder = MatchRecorder::with_config(RatingConfig {
        k_factor: 5,
        default_rating: 1000,
    })
    .unwrap();

    let mut a = recorder.new_player("A");
    let mut b = recorder.new_player("B");
    recorder.record_match(&mut a, &mut b);

    assert_eq!(a.rating(), 1002);
    assert_eq!(b.rating(), 998);
}

#[test]
fn test_custom_k_factor() {
    let recorder = MatchRecorder::with_config(RatingConfig {
        k_factor: 16,
        default_rating: 1500,
    })
    .unwrap();

    let mut a = recorder.new_player("A");
    let mut b = recorder.new_player("B");
    recorder.record_match(&mut a, &mut b);

    assert_eq!(a.rating(), 1508);
    assert_eq!(b.rating(), 1492);
}

#[test]
fn test_roster_standings_after_matches() {
    let recorder = MatchRecorder::default();
    let mut roster = Roster::default();
    roster.register("alice").unwrap();
    roster.register("bob").unwrap();
    roster.register("carol").unwrap();

    roster.record_match(&recorder, "alice", "bob").unwrap();
    roster.record_match(&recorder, "alice", "carol").unwrap();
    roster.record_match(&recorder, "carol", "bob").unwrap();

    let standings = roster.standings();
    assert_eq!(standings[0].name(), "alice");
    assert_eq!(standings[2].name(), "bob");

    let total: i64 = roster.players().map(|p| p.rating()).sum();
    assert_eq!(total, 3000);
}

#[test]
fn test_replay_with_file_config() {
    let config = AppConfig::from_toml_str(
        r#"
        [rating]
        k_factor = 20
        default_rating = 1200
        "#,
    )
    .unwrap();

    let log = MatchLog::from_toml_str(
        r#"
        [[players]]
        name = "veteran"
        rating = 1600

        [[matches]]
        winner = "rookie"
        loser = "veteran"
        "#,
    )
    .unwrap();

    let recorder = MatchRecorder::with_config(config.rating.clone()).unwrap();
    let mut roster = Roster::new(config.rating.default_rating);
    let records = log.replay(&mut roster, &recorder).unwrap();

    // 1200 vs 1600: p = 0.0909... -> 0.09, delta = round(0.91 * 20) = 18
    assert_eq!(records[0].expected_win_rates().winner, 0.09);
    assert_eq!(roster.get("rookie").unwrap().rating(), 1218);
    assert_eq!(roster.get("veteran").unwrap().rating(), 1582);
}

#[test]
fn test_player_state_survives_serialization() {
    let (recorder, _clock) = recorder_with_clock();
    let (mut a, mut b) = player_pair(("A", 1000), ("B", 1200));
    recorder.record_match(&mut a, &mut b);

    let json = serde_json::to_string(&a).unwrap();
    let restored: Player = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, a);
    assert_eq!(restored.match_history().get(FIXED_TIMESTAMP).unwrap().loser_name(), "B");
}
