// ABOUTME: Shared test utilities and record fixtures for integration tests
// ABOUTME: Provides a fixed evaluation clock plus game, training, and goal builders
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `courtside`

use chrono::{DateTime, Duration, Utc};
use courtside::models::{
    GameRecord, GoalPeriod, GoalRecord, GoalStatus, RawGameRecord, TrainingRecord,
};
use std::collections::BTreeMap;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Parse an RFC 3339 timestamp
pub fn at(timestamp: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(timestamp)
        .expect("valid RFC 3339 timestamp")
        .with_timezone(&Utc)
}

/// Fixed evaluation time used across tests
pub fn now() -> DateTime<Utc> {
    at("2025-03-15T12:00:00Z")
}

/// `days` days before `now()`
pub fn days_ago(days: i64) -> DateTime<Utc> {
    now() - Duration::days(days)
}

/// `hours` hours before `now()`
pub fn hours_ago(hours: i64) -> DateTime<Utc> {
    now() - Duration::hours(hours)
}

/// Game with only points recorded
pub fn game(date: DateTime<Utc>, points: u32) -> GameRecord {
    GameRecord {
        date,
        opponent: "Eagles".into(),
        points: Some(points),
        ..GameRecord::default()
    }
}

/// Game with the common box-score stats recorded
pub fn full_game(
    date: DateTime<Utc>,
    points: u32,
    assists: u32,
    rebounds: u32,
    turnovers: u32,
) -> GameRecord {
    GameRecord {
        date,
        opponent: "Hawks".into(),
        points: Some(points),
        assists: Some(assists),
        rebounds: Some(rebounds),
        steals: Some(1),
        blocks: Some(0),
        turnovers: Some(turnovers),
        minutes: Some(24.0),
        ..GameRecord::default()
    }
}

/// Games with the given points, one per day ending yesterday, in ascending date order
pub fn games_with_points(points: &[u32]) -> Vec<GameRecord> {
    let count = i64::try_from(points.len()).unwrap();
    points
        .iter()
        .enumerate()
        .map(|(i, &p)| game(days_ago(count - i64::try_from(i).unwrap()), p))
        .collect()
}

/// Training session with the given metrics
pub fn session(date: DateTime<Utc>, drill: &str, metrics: &[(&str, f64)]) -> TrainingRecord {
    TrainingRecord {
        id: None,
        date,
        drill_type: drill.into(),
        metrics: metrics
            .iter()
            .map(|(key, value)| ((*key).to_owned(), *value))
            .collect::<BTreeMap<_, _>>(),
        notes: None,
    }
}

/// Active goal with progress short of target
pub fn active_goal(title: &str, current: f64, target: f64, end_date: DateTime<Utc>) -> GoalRecord {
    GoalRecord {
        id: None,
        goal_type: GoalPeriod::Weekly,
        category: "Scoring".into(),
        title: title.into(),
        description: String::new(),
        target_value: Some(target),
        current_value: Some(current),
        metric: Some("points".into()),
        start_date: days_ago(14),
        end_date,
        status: GoalStatus::Active,
    }
}

/// Raw upstream game with a date string and points
pub fn raw_game(date: &str, points: i64) -> RawGameRecord {
    RawGameRecord {
        date: Some(date.into()),
        opponent: Some("Lions".into()),
        points: Some(points),
        ..RawGameRecord::default()
    }
}
