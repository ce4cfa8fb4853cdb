// ABOUTME: In-memory record store backed by a concurrent map keyed by owner
// ABOUTME: Used by the CLI and tests; no persistence across process restarts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{RecordStore, StoredSummary, SummaryLog};
use async_trait::async_trait;
use courtside_core::errors::{AppError, AppResult};
use courtside_core::models::{InsightSummary, RawGameRecord, RawGoalRecord, RawTrainingRecord};
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Default)]
struct OwnerData {
    games: Vec<RawGameRecord>,
    sessions: Vec<RawTrainingRecord>,
    goals: Vec<RawGoalRecord>,
    summaries: Vec<StoredSummary>,
}

/// In-memory store for records and summaries
#[derive(Debug, Default)]
pub struct InMemoryStore {
    owners: DashMap<String, OwnerData>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in `record` for the stored one carrying the same id
    fn replace_record<T>(
        &self,
        owner_id: &str,
        kind: &str,
        record: T,
        id_of: impl Fn(&T) -> Option<&str>,
        records: impl FnOnce(&mut OwnerData) -> &mut Vec<T>,
    ) -> AppResult<()> {
        let Some(record_id) = id_of(&record).map(str::to_owned) else {
            return Err(AppError::invalid_input(format!(
                "{kind} update requires an id"
            )));
        };
        let mut owner = self
            .owners
            .get_mut(owner_id)
            .ok_or_else(|| AppError::not_found(format!("{kind} {record_id}")))?;
        let slot = records(owner.value_mut())
            .iter_mut()
            .find(|existing| id_of(existing) == Some(record_id.as_str()))
            .ok_or_else(|| AppError::not_found(format!("{kind} {record_id}")))?;
        *slot = record;
        debug!(owner_id, record_id = %record_id, kind, "updated record");
        Ok(())
    }
}

/// Keep the caller's id or mint a fresh one
fn ensure_id(id: &mut Option<String>) -> String {
    id.get_or_insert_with(|| Uuid::new_v4().to_string()).clone()
}

/// Remove the first element whose id matches; returns whether one was removed
fn remove_by_id<T>(items: &mut Vec<T>, record_id: &str, id_of: impl Fn(&T) -> Option<&str>) -> bool {
    items
        .iter()
        .position(|item| id_of(item) == Some(record_id))
        .map(|index| items.remove(index))
        .is_some()
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn insert_game(&self, owner_id: &str, mut game: RawGameRecord) -> AppResult<String> {
        let id = ensure_id(&mut game.id);
        self.owners.entry(owner_id.to_owned()).or_default().games.push(game);
        debug!(owner_id, record_id = %id, "stored game");
        Ok(id)
    }

    async fn insert_training_session(
        &self,
        owner_id: &str,
        mut session: RawTrainingRecord,
    ) -> AppResult<String> {
        let id = ensure_id(&mut session.id);
        self.owners
            .entry(owner_id.to_owned())
            .or_default()
            .sessions
            .push(session);
        debug!(owner_id, record_id = %id, "stored training session");
        Ok(id)
    }

    async fn insert_goal(&self, owner_id: &str, mut goal: RawGoalRecord) -> AppResult<String> {
        let id = ensure_id(&mut goal.id);
        self.owners.entry(owner_id.to_owned()).or_default().goals.push(goal);
        debug!(owner_id, record_id = %id, "stored goal");
        Ok(id)
    }

    async fn update_game(&self, owner_id: &str, game: RawGameRecord) -> AppResult<()> {
        self.replace_record(
            owner_id,
            "game",
            game,
            |g| g.id.as_deref(),
            |owner| &mut owner.games,
        )
    }

    async fn update_training_session(
        &self,
        owner_id: &str,
        session: RawTrainingRecord,
    ) -> AppResult<()> {
        self.replace_record(
            owner_id,
            "training session",
            session,
            |s| s.id.as_deref(),
            |owner| &mut owner.sessions,
        )
    }

    async fn update_goal(&self, owner_id: &str, goal: RawGoalRecord) -> AppResult<()> {
        self.replace_record(
            owner_id,
            "goal",
            goal,
            |g| g.id.as_deref(),
            |owner| &mut owner.goals,
        )
    }

    async fn delete_record(&self, owner_id: &str, record_id: &str) -> AppResult<bool> {
        let Some(mut owner) = self.owners.get_mut(owner_id) else {
            return Ok(false);
        };
        let removed = remove_by_id(&mut owner.games, record_id, |g| g.id.as_deref())
            || remove_by_id(&mut owner.sessions, record_id, |s| s.id.as_deref())
            || remove_by_id(&mut owner.goals, record_id, |g| g.id.as_deref());
        Ok(removed)
    }

    async fn list_games(&self, owner_id: &str) -> AppResult<Vec<RawGameRecord>> {
        Ok(self
            .owners
            .get(owner_id)
            .map(|owner| owner.games.clone())
            .unwrap_or_default())
    }

    async fn list_training_sessions(&self, owner_id: &str) -> AppResult<Vec<RawTrainingRecord>> {
        Ok(self
            .owners
            .get(owner_id)
            .map(|owner| owner.sessions.clone())
            .unwrap_or_default())
    }

    async fn list_goals(&self, owner_id: &str) -> AppResult<Vec<RawGoalRecord>> {
        Ok(self
            .owners
            .get(owner_id)
            .map(|owner| owner.goals.clone())
            .unwrap_or_default())
    }
}

#[async_trait]
impl SummaryLog for InMemoryStore {
    async fn append_summary(
        &self,
        owner_id: &str,
        summary: InsightSummary,
    ) -> AppResult<StoredSummary> {
        let stored = StoredSummary {
            id: Uuid::new_v4(),
            owner_id: owner_id.to_owned(),
            generated_at: summary.generated_at,
            summary,
        };
        self.owners
            .entry(owner_id.to_owned())
            .or_default()
            .summaries
            .push(stored.clone());
        Ok(stored)
    }

    async fn list_summaries(&self, owner_id: &str) -> AppResult<Vec<StoredSummary>> {
        let mut summaries = self
            .owners
            .get(owner_id)
            .map(|owner| owner.summaries.clone())
            .unwrap_or_default();
        summaries.sort_by_key(|stored| stored.generated_at);
        Ok(summaries)
    }
}
