// ABOUTME: Integration tests for the record ingestion boundary
// ABOUTME: Verifies timestamp formats, per-record rejection, and that valid records survive a bad batch
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{at, raw_game};
use courtside::errors::{AppError, ErrorCode, RecordKind};
use courtside::intelligence::ingest::parse_timestamp;
use courtside::intelligence::{ingest_games, ingest_goals, ingest_training_sessions};
use courtside::models::{GoalPeriod, GoalStatus, RawGameRecord, RawGoalRecord, RawTrainingRecord};

#[test]
fn test_accepted_timestamp_formats() {
    assert_eq!(
        parse_timestamp("2025-01-15T18:00:00Z"),
        Some(at("2025-01-15T18:00:00Z"))
    );
    assert_eq!(
        parse_timestamp("2025-01-15T20:00:00+02:00"),
        Some(at("2025-01-15T18:00:00Z"))
    );
    assert_eq!(
        parse_timestamp("2025-01-15T18:00:00"),
        Some(at("2025-01-15T18:00:00Z"))
    );
    assert_eq!(
        parse_timestamp("2025-01-15 18:00:00.250"),
        Some(at("2025-01-15T18:00:00.250Z"))
    );
    assert_eq!(parse_timestamp("2025-01-15"), Some(at("2025-01-15T00:00:00Z")));
    assert_eq!(parse_timestamp("last tuesday"), None);
    assert_eq!(parse_timestamp("2025-02-30"), None);
}

#[test]
fn test_bad_games_are_excluded_and_reported() {
    let mut missing = raw_game("", 10);
    missing.date = None;
    missing.id = Some("g-2".into());
    let raw = vec![
        raw_game("2025-03-01", 12),
        missing,
        raw_game("yesterday", 8),
        raw_game("2025-03-03", -4),
        raw_game("2025-03-04T19:30:00Z", 20),
    ];

    let ingested = ingest_games(&raw);

    let points: Vec<Option<u32>> = ingested.records.iter().map(|g| g.points).collect();
    assert_eq!(points, vec![Some(12), Some(20)]);
    assert!(!ingested.is_clean());

    let rejected: Vec<(usize, &str)> = ingested
        .rejected
        .iter()
        .map(|e| (e.index, e.reason.as_str()))
        .collect();
    assert_eq!(
        rejected,
        vec![
            (1, "missing required date"),
            (2, "unparsable date 'yesterday'"),
            (3, "points must be a non-negative count, got -4"),
        ]
    );
    assert_eq!(ingested.rejected[0].kind, RecordKind::Game);
    assert_eq!(ingested.rejected[0].record_id.as_deref(), Some("g-2"));
    assert_eq!(
        ingested.rejected[0].to_string(),
        "Invalid game #1 (id g-2): missing required date"
    );
}

#[test]
fn test_missing_stats_stay_absent() {
    let raw = vec![RawGameRecord {
        date: Some("2025-03-01".into()),
        assists: Some(0),
        ..RawGameRecord::default()
    }];
    let ingested = ingest_games(&raw);

    assert!(ingested.is_clean());
    let game = &ingested.records[0];
    assert_eq!(game.points, None);
    assert_eq!(game.assists, Some(0));
}

#[test]
fn test_negative_minutes_rejected() {
    let raw = vec![RawGameRecord {
        date: Some("2025-03-01".into()),
        minutes: Some(-3.5),
        ..RawGameRecord::default()
    }];
    assert_eq!(ingest_games(&raw).rejected.len(), 1);
}

#[test]
fn test_training_sessions_keep_unknown_metrics() {
    let raw: Vec<RawTrainingRecord> = serde_json::from_str(
        r#"[
            {"date": "2025-03-02", "drillType": "shooting",
             "metrics": {"freeThrowPercentage": 71.5, "wallBallReps": 40}},
            {"drillType": "agility"}
        ]"#,
    )
    .unwrap();

    let ingested = ingest_training_sessions(&raw);
    assert_eq!(ingested.records.len(), 1);
    assert_eq!(ingested.records[0].drill_type, "shooting");
    assert_eq!(ingested.records[0].metric("wallBallReps"), Some(40.0));
    assert_eq!(ingested.rejected[0].kind, RecordKind::TrainingSession);
}

#[test]
fn test_goal_defaults_and_status_mapping() {
    let raw: Vec<RawGoalRecord> = serde_json::from_str(
        r#"[
            {"_id": "goal-1", "type": "weekly", "title": "Shoot 100 free throws",
             "targetValue": 100, "currentValue": 40, "metric": "shots",
             "startDate": "2025-03-10", "endDate": "2025-03-17", "status": "active"},
            {"type": "season", "title": "Make varsity", "status": "abandoned",
             "startDate": "2024-09-01", "endDate": "2025-05-01"},
            {"type": "monthly", "title": "No end date", "startDate": "2025-03-01"}
        ]"#,
    )
    .unwrap();

    let ingested = ingest_goals(&raw);
    assert_eq!(ingested.records.len(), 2);
    assert_eq!(ingested.records[0].id.as_deref(), Some("goal-1"));
    assert_eq!(ingested.records[0].goal_type, GoalPeriod::Weekly);
    assert_eq!(ingested.records[0].status, GoalStatus::Active);
    assert_eq!(ingested.records[1].goal_type, GoalPeriod::Seasonal);
    assert_eq!(ingested.records[1].status, GoalStatus::Missed);
    assert_eq!(ingested.rejected[0].index, 2);
    assert_eq!(ingested.rejected[0].reason, "missing required end_date");
}

#[test]
fn test_invalid_record_maps_to_unprocessable() {
    let ingested = ingest_games(&[raw_game("not a date", 1)]);
    let error: AppError = ingested.rejected[0].clone().into();
    assert_eq!(error.code, ErrorCode::InvalidRecord);
    assert_eq!(error.http_status(), 422);
}
