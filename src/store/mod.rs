// ABOUTME: Record store abstraction for owner-scoped games, training sessions, goals, and summaries
// ABOUTME: Async traits the service layer depends on, with an in-memory implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Record store abstraction
//!
//! Records are stored exactly as they arrive from upstream (timestamps still
//! unparsed); validation happens when the service loads them for analysis.
//! Listing an owner with no records returns an empty collection.

mod memory;

pub use memory::InMemoryStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use courtside_core::errors::AppResult;
use courtside_core::models::{InsightSummary, RawGameRecord, RawGoalRecord, RawTrainingRecord};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Owner-scoped storage of logged records
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Store a game, assigning an id when it has none; returns the id
    async fn insert_game(&self, owner_id: &str, game: RawGameRecord) -> AppResult<String>;

    /// Store a training session; returns the id
    async fn insert_training_session(
        &self,
        owner_id: &str,
        session: RawTrainingRecord,
    ) -> AppResult<String>;

    /// Store a goal; returns the id
    async fn insert_goal(&self, owner_id: &str, goal: RawGoalRecord) -> AppResult<String>;

    /// Replace the game with the same id
    ///
    /// # Errors
    ///
    /// `InvalidInput` when the record has no id, `ResourceNotFound` when no
    /// stored game carries it
    async fn update_game(&self, owner_id: &str, game: RawGameRecord) -> AppResult<()>;

    /// Replace the training session with the same id
    async fn update_training_session(
        &self,
        owner_id: &str,
        session: RawTrainingRecord,
    ) -> AppResult<()>;

    /// Replace the goal with the same id; this is how goal progress is recorded
    async fn update_goal(&self, owner_id: &str, goal: RawGoalRecord) -> AppResult<()>;

    /// Delete a record of any kind by id; returns whether something was removed
    async fn delete_record(&self, owner_id: &str, record_id: &str) -> AppResult<bool>;

    /// All games for an owner
    async fn list_games(&self, owner_id: &str) -> AppResult<Vec<RawGameRecord>>;

    /// All training sessions for an owner
    async fn list_training_sessions(&self, owner_id: &str) -> AppResult<Vec<RawTrainingRecord>>;

    /// All goals for an owner
    async fn list_goals(&self, owner_id: &str) -> AppResult<Vec<RawGoalRecord>>;
}

/// A persisted insight summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSummary {
    /// Summary identifier
    pub id: Uuid,
    /// Owner the summary belongs to
    pub owner_id: String,
    /// Generation time, the log's ordering key
    pub generated_at: DateTime<Utc>,
    /// The summary itself
    pub summary: InsightSummary,
}

/// Append-only log of generated summaries
#[async_trait]
pub trait SummaryLog: Send + Sync {
    /// Append a summary; summaries for the same owner and period are never merged
    async fn append_summary(
        &self,
        owner_id: &str,
        summary: InsightSummary,
    ) -> AppResult<StoredSummary>;

    /// All summaries for an owner ordered by generation time
    async fn list_summaries(&self, owner_id: &str) -> AppResult<Vec<StoredSummary>>;
}
