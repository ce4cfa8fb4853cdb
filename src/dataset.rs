// ABOUTME: JSON dataset files holding an athlete's games, training sessions, and goals
// ABOUTME: Loads a dataset from disk and seeds it into a record store for one owner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Dataset files
//!
//! A dataset is a single JSON object with three optional arrays:
//!
//! ```json
//! {
//!   "games": [{ "date": "2025-03-01", "points": 18, "assists": 4 }],
//!   "trainingSessions": [{ "date": "2025-03-02", "drillType": "shooting",
//!                          "metrics": { "freeThrowPercentage": 72.0 } }],
//!   "goals": []
//! }
//! ```

use crate::store::RecordStore;
use courtside_core::errors::{AppError, AppResult};
use courtside_core::models::{RawGameRecord, RawGoalRecord, RawTrainingRecord};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Raw records for one athlete
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Logged games
    #[serde(default)]
    pub games: Vec<RawGameRecord>,
    /// Logged training sessions
    #[serde(default, alias = "sessions", alias = "training_sessions")]
    pub training_sessions: Vec<RawTrainingRecord>,
    /// Goals
    #[serde(default)]
    pub goals: Vec<RawGoalRecord>,
}

impl Dataset {
    /// Parse a dataset from JSON text
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the text is not a dataset object
    pub fn from_json(text: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Total number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len() + self.training_sessions.len() + self.goals.len()
    }

    /// Whether the dataset holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert every record into the store under `owner_id`
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects a write
    pub async fn load_into<S: RecordStore + ?Sized>(
        &self,
        store: &S,
        owner_id: &str,
    ) -> AppResult<()> {
        for game in &self.games {
            store.insert_game(owner_id, game.clone()).await?;
        }
        for session in &self.training_sessions {
            store.insert_training_session(owner_id, session.clone()).await?;
        }
        for goal in &self.goals {
            store.insert_goal(owner_id, goal.clone()).await?;
        }
        info!(owner_id, records = self.len(), "seeded record store");
        Ok(())
    }
}

/// Read a dataset file
///
/// # Errors
///
/// Returns a not-found error when the file is missing, a storage error when
/// it cannot be read, or a serialization error when it is not valid JSON
pub async fn load_dataset(path: impl AsRef<Path>) -> AppResult<Dataset> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AppError::not_found(format!("dataset {}", path.display()))
        } else {
            AppError::storage(format!("failed to read {}: {e}", path.display()))
        }
    })?;
    Dataset::from_json(&text)
}
