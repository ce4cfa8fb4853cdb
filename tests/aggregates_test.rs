// ABOUTME: Integration tests for the aggregate calculator
// ABOUTME: Validates means over partial fields, stable argmax, and bounded activity and readiness scores
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{days_ago, full_game, game, hours_ago, now, session};
use courtside::intelligence::aggregates::{
    activity_score, argmax, mean, readiness_score, recent_activity_count,
};
use courtside::intelligence::config::{ScoringConfig, SportProfile};
use courtside::models::{GameMetric, GameRecord};

fn points(game: &GameRecord) -> Option<f64> {
    game.points.map(f64::from)
}

#[test]
fn test_mean_and_argmax_of_empty() {
    let games: Vec<GameRecord> = Vec::new();
    assert!(mean(&games, points).abs() < f64::EPSILON);
    assert!(argmax(&games, points).is_none());
}

#[test]
fn test_mean_excludes_records_missing_the_field() {
    let mut without_points = game(days_ago(1), 0);
    without_points.points = None;
    let games = vec![game(days_ago(3), 10), without_points, game(days_ago(2), 20)];

    assert!((mean(&games, points) - 15.0).abs() < f64::EPSILON);
}

#[test]
fn test_argmax_returns_single_maximum() {
    let games = vec![game(days_ago(3), 10), game(days_ago(2), 31), game(days_ago(1), 18)];
    let best = argmax(&games, points).unwrap();
    assert_eq!(best.points, Some(31));
}

#[test]
fn test_argmax_ties_resolve_to_first_occurrence() {
    let mut first = game(days_ago(3), 25);
    first.opponent = "First".into();
    let mut second = game(days_ago(1), 25);
    second.opponent = "Second".into();
    let games = vec![game(days_ago(4), 12), first, second];

    assert_eq!(argmax(&games, points).unwrap().opponent, "First");
}

#[test]
fn test_activity_score_clamps_at_max() {
    let scoring = ScoringConfig::default();
    assert_eq!(activity_score(0, &scoring), 0);
    assert_eq!(activity_score(3, &scoring), 45);
    assert_eq!(activity_score(6, &scoring), 90);
    assert_eq!(activity_score(7, &scoring), 100);
    assert_eq!(activity_score(50, &scoring), 100);
}

#[test]
fn test_activity_score_is_monotonic() {
    let scoring = ScoringConfig::default();
    let scores: Vec<u32> = (0..20).map(|n| activity_score(n, &scoring)).collect();
    assert!(scores.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn test_recent_activity_counts_games_and_sessions_in_window() {
    let scoring = ScoringConfig::default();
    let games = vec![game(days_ago(2), 10), game(days_ago(10), 12)];
    let sessions = vec![
        session(hours_ago(5), "shooting", &[]),
        session(days_ago(30), "agility", &[]),
        session(now(), "conditioning", &[]),
    ];

    assert_eq!(recent_activity_count(&games, &sessions, &scoring, now()), 2);
}

#[test]
fn test_readiness_score_against_sport_profile() {
    let profile = SportProfile::default();
    let games = vec![game(days_ago(2), 10), game(days_ago(1), 20)];
    assert_eq!(readiness_score(&games, &profile, 100), 75);

    let hot_streak = vec![game(days_ago(2), 30), game(days_ago(1), 40)];
    assert_eq!(readiness_score(&hot_streak, &profile, 100), 100);

    assert_eq!(readiness_score(&[], &profile, 100), 0);
}

#[test]
fn test_readiness_score_follows_profile_metric() {
    let profile = SportProfile {
        metric: GameMetric::Rebounds,
        ideal_value: 10.0,
    };
    let games = vec![full_game(days_ago(1), 2, 1, 5, 0)];
    assert_eq!(readiness_score(&games, &profile, 100), 50);
}
