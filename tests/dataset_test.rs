// ABOUTME: Integration tests for loading JSON dataset files into the record store
// ABOUTME: Uses temporary files to cover parsing, aliases, missing files, and malformed JSON
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use courtside::dataset::{load_dataset, Dataset};
use courtside::errors::ErrorCode;
use courtside::intelligence::{ingest_games, ingest_training_sessions};
use courtside::store::{InMemoryStore, RecordStore};
use std::fs;
use tempfile::TempDir;

const DATASET: &str = r#"{
    "games": [
        {"_id": "g1", "date": "2025-03-10", "opponent": "Tigers", "points": 14, "assists": 3},
        {"date": "2025-03-12T18:30:00Z", "opponent": "Bears", "points": 21}
    ],
    "sessions": [
        {"date": "2025-03-11", "drillType": "shooting", "metrics": {"freeThrowPercentage": 68}}
    ],
    "goals": [
        {"type": "weekly", "title": "Make 50 free throws", "targetValue": 50,
         "currentValue": 20, "startDate": "2025-03-10", "endDate": "2025-03-17"}
    ]
}"#;

#[tokio::test]
async fn test_load_dataset_and_seed_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("athlete.json");
    fs::write(&path, DATASET).unwrap();

    let dataset = load_dataset(&path).await.unwrap();
    assert_eq!(dataset.games.len(), 2);
    assert_eq!(dataset.training_sessions.len(), 1);
    assert_eq!(dataset.goals.len(), 1);
    assert_eq!(dataset.len(), 4);

    let store = InMemoryStore::new();
    dataset.load_into(&store, "jordan").await.unwrap();

    let games = store.list_games("jordan").await.unwrap();
    assert_eq!(games[0].id.as_deref(), Some("g1"));
    assert!(games[1].id.is_some());
    assert_eq!(store.list_training_sessions("jordan").await.unwrap().len(), 1);
    assert_eq!(store.list_goals("jordan").await.unwrap().len(), 1);
}

#[test]
fn test_missing_sections_default_to_empty() {
    let dataset = Dataset::from_json(r#"{"games": []}"#).unwrap();
    assert!(dataset.is_empty());
}

#[tokio::test]
async fn test_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let error = load_dataset(dir.path().join("nope.json")).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_malformed_json_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ games: ").unwrap();

    let error = load_dataset(&path).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
}

#[test]
fn test_wrongly_typed_date_rejects_only_that_game() {
    let dataset = Dataset::from_json(
        r#"{"games": [
            {"date": "2025-03-14", "points": 10},
            {"date": 20250313, "points": 12}
        ]}"#,
    )
    .unwrap();
    assert_eq!(dataset.games.len(), 2);

    let ingested = ingest_games(&dataset.games);
    assert_eq!(ingested.records.len(), 1);
    assert_eq!(ingested.records[0].points, Some(10));
    assert_eq!(ingested.rejected.len(), 1);
    assert_eq!(ingested.rejected[0].index, 1);
    assert_eq!(ingested.rejected[0].reason, "unparsable date '20250313'");
}

#[test]
fn test_null_metric_is_treated_as_absent() {
    let dataset = Dataset::from_json(
        r#"{"trainingSessions": [
            {"date": "2025-03-14", "metrics": {"speed": null, "freeThrowPercentage": 64}}
        ]}"#,
    )
    .unwrap();

    let ingested = ingest_training_sessions(&dataset.training_sessions);
    assert!(ingested.is_clean());
    let session = &ingested.records[0];
    assert_eq!(session.metric("speed"), None);
    assert_eq!(session.metric("freeThrowPercentage"), Some(64.0));
}
